//! # Integration Test Flows
//!
//! Exercises the full check choreography over a real event bus:
//!
//! 1. **Domain Check → Site Store**: `CheckDomainAvailability` actions flow
//!    to the store
//! 2. **Site Store → Domain Check**: `DomainAvailabilityChecked` results
//!    flow back and resume the waiting caller
//! 3. **Latest-wins**: overlapping checks supersede each other; late and
//!    unmatched results are dropped without effect

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::task::JoinHandle;
    use tokio::time::timeout;

    // Shared infrastructure
    use shared_bus::{EventPublisher, InMemoryEventBus, StoreEvent};
    use shared_types::{
        DomainAvailabilityStatus, DomainCheckResult, DomainMappabilityStatus,
    };

    // Subsystem 1: Domain Check
    use domain_check::{CheckError, DomainCheckConfig, DomainCheckService};

    // Subsystem 2: Site Store
    use domain_store::{DomainRegistry, DomainStoreService, StoreBusAdapter};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    struct Engine {
        bus: Arc<InMemoryEventBus>,
        service: DomainCheckService,
        router: JoinHandle<()>,
        store: Option<JoinHandle<()>>,
    }

    impl Engine {
        /// Wire the client onto a fresh bus; optionally attach a store
        /// seeded with registered domains.
        fn start(registered: Option<&[&str]>, wait: Duration) -> Self {
            crate::init_tracing();

            let bus = Arc::new(InMemoryEventBus::new());

            let store = registered.map(|domains| {
                let registry = Arc::new(DomainRegistry::with_domains(domains.iter().copied()));
                let service = Arc::new(DomainStoreService::new(registry));
                let adapter = StoreBusAdapter::new(service, Arc::clone(&bus));
                tokio::spawn(adapter.run())
            });

            let config = DomainCheckConfig {
                default_timeout: wait,
            };
            let (service, router) = DomainCheckService::over_bus(Arc::clone(&bus), config);

            Self {
                bus,
                service,
                router,
                store,
            }
        }

        fn stop(self) {
            self.router.abort();
            if let Some(store) = self.store {
                store.abort();
            }
        }
    }

    fn result(domain: &str, status: DomainAvailabilityStatus) -> DomainCheckResult {
        DomainCheckResult::new(
            domain,
            status,
            DomainMappabilityStatus::MappableDomain,
            true,
        )
    }

    // =============================================================================
    // END-TO-END FLOWS
    // =============================================================================

    #[tokio::test]
    async fn test_available_domain_end_to_end() {
        let engine = Engine::start(Some(&[]), Duration::from_secs(2));

        let outcome = engine
            .service
            .check_domain_availability("mysite.blog")
            .await
            .expect("check should resolve");

        assert_eq!(outcome.domain_name, "mysite.blog");
        assert_eq!(outcome.status, DomainAvailabilityStatus::Available);
        assert!(outcome.supports_privacy);
        assert!(outcome.is_acquirable());

        engine.stop();
    }

    #[tokio::test]
    async fn test_registered_domain_is_transferrable() {
        let engine = Engine::start(Some(&["taken.blog"]), Duration::from_secs(2));

        let outcome = engine
            .service
            .check_domain_availability("taken.blog")
            .await
            .expect("check should resolve");

        assert_eq!(outcome.status, DomainAvailabilityStatus::TransferrableDomain);

        engine.stop();
    }

    #[tokio::test]
    async fn test_blacklisted_domain_is_not_acquirable() {
        let engine = Engine::start(Some(&[]), Duration::from_secs(2));

        let outcome = engine
            .service
            .check_domain_availability("example.blog")
            .await
            .expect("check should resolve");

        assert_eq!(outcome.status, DomainAvailabilityStatus::BlacklistedDomain);
        assert!(!outcome.is_acquirable());

        engine.stop();
    }

    #[tokio::test]
    async fn test_sequential_checks_reuse_the_slot() {
        let engine = Engine::start(Some(&["taken.blog"]), Duration::from_secs(2));

        for (domain, expected) in [
            ("one.blog", DomainAvailabilityStatus::Available),
            ("taken.blog", DomainAvailabilityStatus::TransferrableDomain),
            ("two.dev", DomainAvailabilityStatus::TldNotSupported),
        ] {
            let outcome = engine
                .service
                .check_domain_availability(domain)
                .await
                .expect("check should resolve");
            assert_eq!(outcome.status, expected, "domain {domain}");
        }

        assert_eq!(engine.service.pending_count(), 0);
        assert_eq!(
            engine
                .service
                .stats()
                .total_completed
                .load(Ordering::Relaxed),
            3
        );

        engine.stop();
    }

    // =============================================================================
    // BRIDGE SEMANTICS (no store attached; events published by hand)
    // =============================================================================

    #[tokio::test]
    async fn test_check_times_out_when_nobody_answers() {
        let engine = Engine::start(None, Duration::from_millis(80));

        let outcome = engine.service.check_domain_availability("mysite.blog").await;

        assert_eq!(
            outcome,
            Err(CheckError::Timeout {
                domain_name: "mysite.blog".into()
            })
        );
        assert_eq!(engine.service.pending_count(), 0);

        // A result arriving after the timeout finds nothing to resolve.
        engine
            .bus
            .publish(StoreEvent::DomainAvailabilityChecked(result(
                "mysite.blog",
                DomainAvailabilityStatus::Available,
            )))
            .await;
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(engine.service.pending_count(), 0);

        engine.stop();
    }

    #[tokio::test]
    async fn test_mismatched_result_does_not_resolve_pending_check() {
        let engine = Engine::start(None, Duration::from_millis(300));
        let service = Arc::new(engine.service);
        let slot = service.pending_slot();

        let check = {
            let service = Arc::clone(&service);
            tokio::spawn(async move { service.check_domain_availability("wanted.blog").await })
        };
        while !slot.is_pending("wanted.blog") {
            tokio::task::yield_now().await;
        }

        // A result for a different key is dropped; the check then times out.
        engine
            .bus
            .publish(StoreEvent::DomainAvailabilityChecked(result(
                "other.blog",
                DomainAvailabilityStatus::Available,
            )))
            .await;

        let outcome = timeout(Duration::from_secs(1), check)
            .await
            .expect("join timeout")
            .expect("join");
        assert!(matches!(outcome, Err(CheckError::Timeout { .. })));
        assert!(slot.stats().total_stale_dropped.load(Ordering::Relaxed) >= 1);

        engine.router.abort();
    }

    #[tokio::test]
    async fn test_latest_wins_across_the_bus() {
        let engine = Engine::start(None, Duration::from_secs(5));
        let service = Arc::new(engine.service);
        let slot = service.pending_slot();

        let first = {
            let service = Arc::clone(&service);
            tokio::spawn(async move { service.check_domain_availability("first.blog").await })
        };
        while !slot.is_pending("first.blog") {
            tokio::task::yield_now().await;
        }

        let second = {
            let service = Arc::clone(&service);
            tokio::spawn(async move { service.check_domain_availability("second.blog").await })
        };
        while !slot.is_pending("second.blog") {
            tokio::task::yield_now().await;
        }

        // The first caller is already superseded; its late result must not
        // resolve anything.
        engine
            .bus
            .publish(StoreEvent::DomainAvailabilityChecked(result(
                "first.blog",
                DomainAvailabilityStatus::Available,
            )))
            .await;

        // Only the second key's result resolves the pending check.
        engine
            .bus
            .publish(StoreEvent::DomainAvailabilityChecked(result(
                "second.blog",
                DomainAvailabilityStatus::Available,
            )))
            .await;

        let first_outcome = timeout(Duration::from_secs(1), first)
            .await
            .expect("first join timeout")
            .expect("first join");
        assert_eq!(
            first_outcome,
            Err(CheckError::Superseded {
                domain_name: "first.blog".into()
            })
        );

        let second_outcome = timeout(Duration::from_secs(1), second)
            .await
            .expect("second join timeout")
            .expect("second join");
        assert_eq!(second_outcome.unwrap().domain_name, "second.blog");

        assert_eq!(slot.pending_count(), 0);

        engine.router.abort();
    }

    #[tokio::test]
    async fn test_unsolicited_result_is_a_noop() {
        let engine = Engine::start(None, Duration::from_millis(100));
        let slot = engine.service.pending_slot();

        engine
            .bus
            .publish(StoreEvent::DomainAvailabilityChecked(result(
                "nobody-asked.blog",
                DomainAvailabilityStatus::Available,
            )))
            .await;

        tokio::time::sleep(Duration::from_millis(50)).await;

        assert_eq!(slot.pending_count(), 0);
        assert_eq!(slot.stats().total_stale_dropped.load(Ordering::Relaxed), 1);
        assert_eq!(slot.stats().total_completed.load(Ordering::Relaxed), 0);

        engine.stop();
    }

    // =============================================================================
    // CONCURRENCY
    // =============================================================================

    #[tokio::test]
    async fn test_supersede_chain_only_last_caller_resolves() {
        let engine = Engine::start(None, Duration::from_secs(5));
        let service = Arc::new(engine.service);
        let slot = service.pending_slot();

        let mut callers = Vec::new();
        for i in 0..10 {
            let domain = format!("site-{i}.blog");
            let task = {
                let service = Arc::clone(&service);
                let domain = domain.clone();
                tokio::spawn(async move { service.check_domain_availability(&domain).await })
            };
            while !slot.is_pending(&domain) {
                tokio::task::yield_now().await;
            }
            callers.push((domain, task));
        }

        // Resolve only the last registration.
        engine
            .bus
            .publish(StoreEvent::DomainAvailabilityChecked(result(
                "site-9.blog",
                DomainAvailabilityStatus::Available,
            )))
            .await;

        for (domain, task) in callers {
            let outcome = timeout(Duration::from_secs(1), task)
                .await
                .expect("join timeout")
                .expect("join");
            if domain == "site-9.blog" {
                assert_eq!(outcome.unwrap().domain_name, domain);
            } else {
                assert_eq!(outcome, Err(CheckError::Superseded { domain_name: domain }));
            }
        }

        assert_eq!(slot.stats().total_registered.load(Ordering::Relaxed), 10);
        assert_eq!(slot.stats().total_superseded.load(Ordering::Relaxed), 9);
        assert_eq!(slot.stats().total_completed.load(Ordering::Relaxed), 1);
        assert_eq!(slot.pending_count(), 0);

        engine.router.abort();
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_interleaved_checks_and_results_never_wedge_the_slot() {
        let engine = Engine::start(Some(&[]), Duration::from_millis(500));
        let service = Arc::new(engine.service);

        // Hammer the slot from many tasks; with a live store each check
        // either resolves, gets superseded, or times out - never anything
        // else, and never a double resolution.
        let mut tasks = Vec::new();
        for i in 0..32 {
            let service = Arc::clone(&service);
            tasks.push(tokio::spawn(async move {
                let domain = format!("hammer-{i}.blog");
                service.check_domain_availability(&domain).await
            }));
        }

        let mut resolved = 0usize;
        let mut superseded = 0usize;
        let mut timed_out = 0usize;
        for task in tasks {
            match timeout(Duration::from_secs(2), task)
                .await
                .expect("join timeout")
                .expect("join")
            {
                Ok(outcome) => {
                    assert!(outcome.domain_name.starts_with("hammer-"));
                    resolved += 1;
                }
                Err(CheckError::Superseded { .. }) => superseded += 1,
                Err(CheckError::Timeout { .. }) => timed_out += 1,
                Err(other) => panic!("unexpected error: {other}"),
            }
        }

        assert_eq!(resolved + superseded + timed_out, 32);
        // The slot must end empty regardless of interleaving.
        assert_eq!(service.pending_count(), 0);

        engine.router.abort();
        if let Some(store) = engine.store {
            store.abort();
        }
    }
}

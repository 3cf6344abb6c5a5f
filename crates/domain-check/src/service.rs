//! # Domain Check Service
//!
//! Application service that turns the dispatch/result choreography into a
//! single awaitable call.
//!
//! A caller may issue overlapping checks (e.g. a user still typing); the
//! service accepts only the latest one. Cancelling the caller is not enough
//! on its own, because a result event may already be in flight when the
//! caller goes away - the pending slot drops such late results on the floor.

use crate::adapters::bus::{EventBusDispatcher, ResultRouter};
use crate::domain::config::DomainCheckConfig;
use crate::domain::correlation::RequestId;
use crate::domain::error::CheckError;
use crate::domain::pending::{PendingCheckSlot, PendingCheckStats};
use crate::ports::outbound::{ActionDispatcher, SiteAction};
use shared_bus::InMemoryEventBus;
use shared_types::DomainCheckResult;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

/// Awaitable domain-availability checks over a fire-and-forget dispatcher.
pub struct DomainCheckService {
    /// Outbound port toward the site store.
    dispatcher: Arc<dyn ActionDispatcher>,
    /// The single-slot pending-check bridge.
    pending: Arc<PendingCheckSlot>,
    /// Subsystem configuration.
    config: DomainCheckConfig,
}

impl DomainCheckService {
    /// Create a service over an arbitrary dispatcher.
    ///
    /// The caller is responsible for routing result events into
    /// [`Self::pending_slot`] (e.g. by spawning a [`ResultRouter`]).
    #[must_use]
    pub fn new(dispatcher: Arc<dyn ActionDispatcher>, config: DomainCheckConfig) -> Self {
        Self {
            dispatcher,
            pending: Arc::new(PendingCheckSlot::new()),
            config,
        }
    }

    /// Create a service wired to the shared event bus, with a result router
    /// spawned in the background.
    ///
    /// Returns the service and the router task handle; the router exits on
    /// its own when the bus is dropped.
    #[must_use]
    pub fn over_bus(bus: Arc<InMemoryEventBus>, config: DomainCheckConfig) -> (Self, JoinHandle<()>) {
        let service = Self::new(Arc::new(EventBusDispatcher::new(Arc::clone(&bus))), config);
        // Subscribe before spawning so no early result can slip past the
        // router.
        let router = ResultRouter::new(&bus, Arc::clone(&service.pending));
        let handle = tokio::spawn(router.run());
        (service, handle)
    }

    /// Check availability of `domain_name`, waiting up to the configured
    /// default timeout.
    ///
    /// Issuing a new check while one is outstanding supersedes the old one:
    /// the old caller gets [`CheckError::Superseded`] and only the newest
    /// check can be resolved by a result event.
    pub async fn check_domain_availability(
        &self,
        domain_name: &str,
    ) -> Result<DomainCheckResult, CheckError> {
        self.check_bounded(domain_name, self.config.default_timeout)
            .await
    }

    /// Check availability of `domain_name` with an explicit wait bound.
    pub async fn check_domain_availability_with_timeout(
        &self,
        domain_name: &str,
        timeout: Duration,
    ) -> Result<DomainCheckResult, CheckError> {
        self.check_bounded(domain_name, timeout).await
    }

    async fn check_bounded(
        &self,
        domain_name: &str,
        wait: Duration,
    ) -> Result<DomainCheckResult, CheckError> {
        let request_id = RequestId::new();
        let (ticket, rx) = self.pending.register(domain_name);

        // Cleanup runs on every exit path, including this future being
        // dropped mid-await. A slot already resolved or superseded is left
        // untouched (ticket mismatch).
        let _cleanup = self.pending.guard(ticket);

        self.dispatcher
            .dispatch(SiteAction::CheckDomainAvailability {
                request_id,
                domain_name: domain_name.to_string(),
            })
            .await?;

        debug!(
            request_id = %request_id,
            domain = %domain_name,
            wait_ms = wait.as_millis() as u64,
            "Awaiting availability result"
        );

        match tokio::time::timeout(wait, rx).await {
            Ok(Ok(result)) => Ok(result),
            // Sender dropped: a newer registration replaced this one.
            Ok(Err(_)) => Err(CheckError::Superseded {
                domain_name: domain_name.to_string(),
            }),
            Err(_) => Err(CheckError::Timeout {
                domain_name: domain_name.to_string(),
            }),
        }
    }

    /// The pending-check slot, for wiring a custom result router.
    #[must_use]
    pub fn pending_slot(&self) -> Arc<PendingCheckSlot> {
        Arc::clone(&self.pending)
    }

    /// Number of outstanding checks (0 or 1).
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.pending_count()
    }

    /// Bridge statistics.
    #[must_use]
    pub fn stats(&self) -> &PendingCheckStats {
        self.pending.stats()
    }
}

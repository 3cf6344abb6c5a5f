//! # Event Bus Adapter
//!
//! Wires the site store to the shared event bus: consumes
//! `CheckDomainAvailability` actions, publishes `DomainAvailabilityChecked`
//! results.

use crate::ports::inbound::DomainCheckApi;
use futures::StreamExt;
use shared_bus::{
    EventFilter, EventPublisher, EventStream, EventTopic, InMemoryEventBus, StoreEvent,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Bus adapter for the site store.
pub struct StoreBusAdapter<S: DomainCheckApi> {
    /// The store service.
    service: Arc<S>,
    /// The shared event bus (for publishing results).
    bus: Arc<InMemoryEventBus>,
    /// Incoming check actions. The subscription is taken at construction
    /// time, so actions published before `run` is polled are not lost.
    actions: EventStream,
}

impl<S: DomainCheckApi> StoreBusAdapter<S> {
    /// Create a new bus adapter, subscribed to the `DomainCheck` topic.
    #[must_use]
    pub fn new(service: Arc<S>, bus: Arc<InMemoryEventBus>) -> Self {
        let filter = EventFilter::topics(vec![EventTopic::DomainCheck]);
        let actions = bus.event_stream(filter);
        Self {
            service,
            bus,
            actions,
        }
    }

    /// Get a reference to the underlying service.
    #[must_use]
    pub fn service(&self) -> &S {
        &self.service
    }

    /// Consume check actions until the bus closes.
    ///
    /// This should be spawned as a background task. Every action gets
    /// exactly one result event; whether anyone still waits for it is the
    /// client's concern.
    pub async fn run(self) {
        info!("[SiteStore] Started listening for CheckDomainAvailability actions");

        let mut stream = self.actions;

        while let Some(event) = stream.next().await {
            let StoreEvent::CheckDomainAvailability {
                request_id,
                domain_name,
            } = event
            else {
                continue;
            };

            debug!(
                request_id = %request_id,
                domain = %domain_name,
                "Handling availability check"
            );

            let result = self.service.check(&domain_name);
            self.bus
                .publish(StoreEvent::DomainAvailabilityChecked(result))
                .await;
        }

        warn!("[SiteStore] Event stream ended, shutting down");
    }
}

//! # Event Bus Adapters
//!
//! Wires the domain-check client to the shared event bus.
//!
//! ## Event Flow
//!
//! ```text
//! check_domain_availability ──dispatch──→ [EventBusDispatcher]
//!                                               │ publish CheckDomainAvailability
//!                                               ▼
//!                                          [Event Bus]
//!                                               │ DomainAvailabilityChecked
//!                                               ▼
//!                                         [ResultRouter] ──complete──→ pending slot
//! ```

use crate::domain::pending::PendingCheckSlot;
use crate::ports::outbound::{ActionDispatcher, DispatchError, SiteAction};
use async_trait::async_trait;
use futures::StreamExt;
use shared_bus::{EventFilter, EventPublisher, EventStream, EventTopic, InMemoryEventBus, StoreEvent};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Dispatcher that publishes check actions onto the shared event bus.
pub struct EventBusDispatcher {
    /// Reference to the event bus.
    bus: Arc<InMemoryEventBus>,
}

impl EventBusDispatcher {
    /// Create a new event bus dispatcher.
    #[must_use]
    pub fn new(bus: Arc<InMemoryEventBus>) -> Self {
        Self { bus }
    }
}

#[async_trait]
impl ActionDispatcher for EventBusDispatcher {
    async fn dispatch(&self, action: SiteAction) -> Result<(), DispatchError> {
        let SiteAction::CheckDomainAvailability {
            request_id,
            domain_name,
        } = action;

        debug!(
            request_id = %request_id,
            domain = %domain_name,
            "Publishing CheckDomainAvailability to event bus"
        );

        let event = StoreEvent::CheckDomainAvailability {
            request_id: request_id.to_string(),
            domain_name: domain_name.clone(),
        };

        let receivers = self.bus.publish(event).await;

        if receivers == 0 {
            // Dispatch stays fire-and-forget; the caller will time out.
            warn!(
                request_id = %request_id,
                domain = %domain_name,
                "No subscribers for CheckDomainAvailability (site store may not be running)"
            );
        }

        Ok(())
    }
}

/// Routes result events from the bus into the pending check slot.
///
/// Subscribes to the `SiteStore` topic and feeds every
/// `DomainAvailabilityChecked` event to [`PendingCheckSlot::complete`];
/// the slot decides whether anyone is waiting for it.
pub struct ResultRouter {
    /// Result events from the bus. The subscription is taken at
    /// construction time, so events published before `run` is polled are
    /// not lost.
    stream: EventStream,
    /// The slot to complete.
    pending: Arc<PendingCheckSlot>,
}

impl ResultRouter {
    /// Create a new result router, subscribed to the `SiteStore` topic.
    #[must_use]
    pub fn new(bus: &InMemoryEventBus, pending: Arc<PendingCheckSlot>) -> Self {
        let filter = EventFilter::topics(vec![EventTopic::SiteStore]);
        Self {
            stream: bus.event_stream(filter),
            pending,
        }
    }

    /// Listen for result events and route them until the bus closes.
    ///
    /// This should be spawned as a background task.
    pub async fn run(self) {
        info!("[ResultRouter] Started listening for DomainAvailabilityChecked events");

        let mut stream = self.stream;

        while let Some(event) = stream.next().await {
            let StoreEvent::DomainAvailabilityChecked(result) = event else {
                continue;
            };

            debug!(
                domain = %result.domain_name,
                "Routing DomainAvailabilityChecked to pending slot"
            );
            self.pending.complete(result);
        }

        warn!("[ResultRouter] Event stream ended, shutting down");
    }
}

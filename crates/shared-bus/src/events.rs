//! # Bus Events
//!
//! Defines all event types that flow through the shared bus, together with
//! the topic/filter machinery used by subscribers.

use serde::{Deserialize, Serialize};
use shared_types::DomainCheckResult;

/// Subsystem identifier for the domain-check client.
pub const SUBSYSTEM_DOMAIN_CHECK: u8 = 1;

/// Subsystem identifier for the site store.
pub const SUBSYSTEM_SITE_STORE: u8 = 2;

/// All events that can be published to the event bus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum StoreEvent {
    // =========================================================================
    // SUBSYSTEM 1: DOMAIN CHECK (client)
    // =========================================================================
    /// Request to check availability of a domain name.
    /// Source: Subsystem 1 | Target: Subsystem 2
    CheckDomainAvailability {
        /// Correlation id for log tracing; results are matched by
        /// `domain_name`, not by this id.
        request_id: String,
        /// The domain name to check.
        domain_name: String,
    },

    // =========================================================================
    // SUBSYSTEM 2: SITE STORE
    // =========================================================================
    /// Availability verdict for a previously requested domain name.
    /// Source: Subsystem 2 | Target: Subsystem 1
    DomainAvailabilityChecked(DomainCheckResult),
}

impl StoreEvent {
    /// Get the topic for this event (for filtering).
    #[must_use]
    pub fn topic(&self) -> EventTopic {
        match self {
            Self::CheckDomainAvailability { .. } => EventTopic::DomainCheck,
            Self::DomainAvailabilityChecked(_) => EventTopic::SiteStore,
        }
    }

    /// Get the originating subsystem ID.
    #[must_use]
    pub fn source_subsystem(&self) -> u8 {
        match self {
            Self::CheckDomainAvailability { .. } => SUBSYSTEM_DOMAIN_CHECK,
            Self::DomainAvailabilityChecked(_) => SUBSYSTEM_SITE_STORE,
        }
    }
}

/// Event topics for subscription filtering, named after the subsystem that
/// originates the events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventTopic {
    /// Actions originated by the domain-check client.
    DomainCheck,
    /// Results originated by the site store.
    SiteStore,
    /// All events (no filtering).
    All,
}

/// Filter for subscribing to specific events.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    /// Topics to include. Empty means all topics.
    pub topics: Vec<EventTopic>,
    /// Source subsystems to include. Empty means all sources.
    pub source_subsystems: Vec<u8>,
}

impl EventFilter {
    /// Create a filter that accepts all events.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Create a filter for specific topics.
    #[must_use]
    pub fn topics(topics: Vec<EventTopic>) -> Self {
        Self {
            topics,
            source_subsystems: Vec::new(),
        }
    }

    /// Create a filter for events from specific subsystems.
    #[must_use]
    pub fn from_subsystems(subsystems: Vec<u8>) -> Self {
        Self {
            topics: Vec::new(),
            source_subsystems: subsystems,
        }
    }

    /// Check if an event matches this filter.
    #[must_use]
    pub fn matches(&self, event: &StoreEvent) -> bool {
        let topic_match = self.topics.is_empty()
            || self.topics.contains(&EventTopic::All)
            || self.topics.contains(&event.topic());

        let source_match = self.source_subsystems.is_empty()
            || self.source_subsystems.contains(&event.source_subsystem());

        topic_match && source_match
    }
}

//! # Shared Bus - Event Bus for Inter-Subsystem Communication
//!
//! All inter-subsystem communication travels over this bus; subsystems never
//! call each other directly.
//!
//! ## Choreography
//!
//! ```text
//! ┌──────────────┐                    ┌──────────────┐
//! │ Domain Check │                    │  Site Store  │
//! │   (client)   │    publish()       │              │
//! │              │ ──────┐            │              │
//! └──────────────┘       │            └──────────────┘
//!                        ▼                    ↑
//!                  ┌──────────────┐          │
//!                  │  Event Bus   │          │
//!                  │              │ ─────────┘
//!                  └──────────────┘  subscribe()
//! ```
//!
//! The client publishes `CheckDomainAvailability` actions; the store answers
//! with `DomainAvailabilityChecked` results. Delivery order and thread are
//! not guaranteed beyond broadcast-channel semantics, and events for which
//! nobody is waiting are simply dropped by the subscribers that see them.

// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod events;
pub mod publisher;
pub mod subscriber;

// Re-export main types
pub use events::{EventFilter, EventTopic, StoreEvent};
pub use publisher::{EventPublisher, InMemoryEventBus};
pub use subscriber::{EventStream, EventSubscriber, Subscription, SubscriptionError};

/// Maximum events to buffer per subscriber before lagging kicks in.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

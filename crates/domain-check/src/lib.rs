//! # Domain Check - Availability Client Subsystem
//!
//! Converts the bus's fire-and-forget choreography into awaitable calls.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     DOMAIN CHECK (client)                    │
//! ├─────────────────────────────────────────────────────────────┤
//! │  check_domain_availability(name)                             │
//! │        │                                                     │
//! │  ┌─────┴──────────────────────────────┐                      │
//! │  │        Pending Check Slot          │                      │
//! │  │  (latest-wins bridge via oneshot)  │                      │
//! │  └─────┬───────────────────────▲──────┘                      │
//! │        │ dispatch              │ complete                    │
//! │  ┌─────┴──────────┐   ┌────────┴───────┐                     │
//! │  │ ActionDispatcher│   │  ResultRouter  │                    │
//! │  └─────┬──────────┘   └────────▲───────┘                     │
//! └────────┼───────────────────────┼─────────────────────────────┘
//!          ▼                       │
//!     [ Event Bus ] ──────────────►┘
//!          │
//!     [ Site Store ]
//! ```
//!
//! At most one check is outstanding per slot. Issuing a new check while one
//! is in flight supersedes the old one: the old caller gets
//! [`CheckError::Superseded`] and a late result event for it is silently
//! dropped. Only the most recently issued check can ever receive a result.

#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports for public API
pub use adapters::bus::{EventBusDispatcher, ResultRouter};
pub use domain::config::{ConfigError, DomainCheckConfig};
pub use domain::correlation::RequestId;
pub use domain::error::CheckError;
pub use domain::pending::{PendingCheckSlot, PendingCheckStats};
pub use ports::outbound::{ActionDispatcher, DispatchError, SiteAction};
pub use service::DomainCheckService;

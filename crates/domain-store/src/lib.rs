//! # Domain Store - Site Store Subsystem
//!
//! Answers domain availability checks for the domain-check client.
//!
//! ## Architecture
//!
//! This subsystem follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): validation rules and the registry, no I/O
//! - **Ports Layer** (`ports/`): trait definitions for inbound interfaces
//! - **Service Layer** (`service.rs`): wires domain logic to ports
//! - **Adapters** (`adapters/`): event-bus wiring
//!
//! ## Event Flow
//!
//! ```text
//! [Event Bus] ──CheckDomainAvailability──→ [StoreBusAdapter]
//!                                                │
//!                                                ▼
//!                                      [DomainStoreService]
//!                                       validation + registry
//!                                                │
//! [Event Bus] ◄──DomainAvailabilityChecked───────┘
//! ```

#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use adapters::bus::StoreBusAdapter;
pub use domain::registry::DomainRegistry;
pub use domain::validation::{mappability_for, syntax_status, supports_privacy, SUPPORTED_TLDS};
pub use ports::inbound::DomainCheckApi;
pub use service::DomainStoreService;

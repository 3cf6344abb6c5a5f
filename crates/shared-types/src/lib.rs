//! # Shared Types Crate
//!
//! This crate contains the domain entities and result payloads shared
//! across subsystems.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-subsystem types are defined here.
//! - **Plain Payloads**: Types are serde-derived data carriers; behavior
//!   lives in the owning subsystem crates.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;

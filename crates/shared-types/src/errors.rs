//! # Error Types
//!
//! Defines error payloads used across subsystems.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Classification of a store-side check failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DomainCheckErrorKind {
    /// The query itself was malformed (empty name, oversized payload).
    InvalidQuery,
    /// The registry backend could not be reached.
    StoreUnavailable,
    /// Any other store-side failure.
    GenericError,
}

/// Error payload attached to a failed availability check.
///
/// Travels inside `DomainCheckResult`, so it is serde-derived like all
/// cross-subsystem payloads.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{kind:?}: {message}")]
pub struct DomainCheckError {
    /// Failure classification.
    pub kind: DomainCheckErrorKind,
    /// Human-readable description.
    pub message: String,
}

impl DomainCheckError {
    /// Create a new error payload.
    #[must_use]
    pub fn new(kind: DomainCheckErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

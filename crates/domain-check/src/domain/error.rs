//! Errors returned to callers of the domain-check service.

use crate::ports::outbound::DispatchError;
use thiserror::Error;

/// Errors from `check_domain_availability`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CheckError {
    /// No result event arrived within the configured bound. A result that
    /// shows up later is silently dropped.
    #[error("Check for '{domain_name}' timed out")]
    Timeout {
        /// The domain name that was being checked.
        domain_name: String,
    },

    /// A newer check replaced this one before its result arrived. Under the
    /// latest-wins contract only the most recent caller can be resolved.
    #[error("Check for '{domain_name}' was superseded by a newer check")]
    Superseded {
        /// The domain name that was being checked.
        domain_name: String,
    },

    /// The check action could not be dispatched.
    #[error("Dispatch failed: {0}")]
    Dispatch(#[from] DispatchError),
}

//! # Outbound Ports
//!
//! Traits this subsystem drives: dispatching check actions toward the site
//! store. Production wires these to the event bus; tests substitute
//! in-process fakes.

use crate::domain::correlation::RequestId;
use async_trait::async_trait;
use thiserror::Error;

/// Actions the domain-check client can dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteAction {
    /// Ask the site store whether a domain name is available.
    CheckDomainAvailability {
        /// Correlation id for log tracing.
        request_id: RequestId,
        /// The domain name to check.
        domain_name: String,
    },
}

impl SiteAction {
    /// The domain name this action concerns.
    #[must_use]
    pub fn domain_name(&self) -> &str {
        match self {
            Self::CheckDomainAvailability { domain_name, .. } => domain_name,
        }
    }

    /// The correlation id stamped on this action.
    #[must_use]
    pub fn request_id(&self) -> RequestId {
        match self {
            Self::CheckDomainAvailability { request_id, .. } => *request_id,
        }
    }
}

/// Errors from dispatching an action.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// The dispatch channel (or bus) is gone.
    #[error("Dispatch channel closed")]
    ChannelClosed,
}

/// Trait for dispatching actions toward the site store.
///
/// Dispatch is fire-and-forget: a successful dispatch says nothing about
/// whether, or when, a result event will come back.
#[async_trait]
pub trait ActionDispatcher: Send + Sync {
    /// Dispatch an action.
    async fn dispatch(&self, action: SiteAction) -> Result<(), DispatchError>;
}

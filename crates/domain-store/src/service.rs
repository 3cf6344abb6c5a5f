//! # Domain Store Service
//!
//! Application service that implements the `DomainCheckApi` trait:
//! syntactic validation first, then a registry lookup.

use crate::domain::registry::DomainRegistry;
use crate::domain::validation::{mappability_for, supports_privacy, syntax_status};
use crate::ports::inbound::DomainCheckApi;
use shared_types::{
    DomainAvailabilityStatus, DomainCheckError, DomainCheckErrorKind, DomainCheckResult,
    DomainMappabilityStatus,
};
use std::sync::Arc;
use tracing::debug;

/// Site store service answering availability checks.
pub struct DomainStoreService {
    registry: Arc<DomainRegistry>,
}

impl DomainStoreService {
    /// Create a service over the given registry.
    #[must_use]
    pub fn new(registry: Arc<DomainRegistry>) -> Self {
        Self { registry }
    }

    /// Get the underlying registry.
    #[must_use]
    pub fn registry(&self) -> &DomainRegistry {
        &self.registry
    }
}

impl DomainCheckApi for DomainStoreService {
    fn check(&self, domain_name: &str) -> DomainCheckResult {
        // The result must echo the queried name verbatim; the client matches
        // results by that key.
        let normalized = domain_name.trim().to_ascii_lowercase();

        if normalized.is_empty() {
            return DomainCheckResult::errored(
                domain_name,
                DomainCheckError::new(DomainCheckErrorKind::InvalidQuery, "empty domain name"),
            );
        }

        if let Some(status) = syntax_status(&normalized) {
            debug!(domain = %domain_name, status = ?status, "Domain failed validation");
            return DomainCheckResult::new(
                domain_name,
                status,
                mappability_for(Some(status)),
                false,
            );
        }

        let status = if self.registry.is_registered(&normalized) {
            DomainAvailabilityStatus::TransferrableDomain
        } else {
            DomainAvailabilityStatus::Available
        };

        debug!(domain = %domain_name, status = ?status, "Domain checked");

        DomainCheckResult::new(
            domain_name,
            status,
            DomainMappabilityStatus::MappableDomain,
            supports_privacy(&normalized),
        )
    }
}

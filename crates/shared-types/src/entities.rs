//! # Core Domain Entities
//!
//! Defines the entities that flow between the domain-check client and the
//! site store.
//!
//! ## Clusters
//!
//! - **Verdicts**: `DomainAvailabilityStatus`, `DomainMappabilityStatus`
//! - **Results**: `DomainCheckResult`

use crate::errors::DomainCheckError;
use serde::{Deserialize, Serialize};

/// Maximum total length of a domain name, in bytes.
pub const MAX_DOMAIN_LENGTH: usize = 253;

/// Maximum length of a single domain label, in bytes.
pub const MAX_LABEL_LENGTH: usize = 63;

/// Availability verdict for a queried domain name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DomainAvailabilityStatus {
    /// The domain is free and can be registered.
    Available,
    /// The domain is registered elsewhere but may be transferred in.
    TransferrableDomain,
    /// The name is not a syntactically valid domain.
    InvalidDomain,
    /// The trailing label is not a valid top-level domain.
    InvalidTld,
    /// The top-level domain is valid but not offered by the platform.
    TldNotSupported,
    /// The name is on the reserved/blocked list.
    BlacklistedDomain,
    /// The store could not produce a verdict.
    #[default]
    UnknownStatus,
}

/// Whether a queried domain name could be mapped onto an existing site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DomainMappabilityStatus {
    /// The domain can be mapped.
    MappableDomain,
    /// The name is not a syntactically valid domain.
    InvalidDomain,
    /// The name is on the reserved/blocked list.
    BlacklistedDomain,
    /// The store could not produce a verdict.
    #[default]
    UnknownStatus,
}

/// Result payload produced by the site store for an availability check.
///
/// The `domain_name` field carries the queried name back to the caller and
/// is the key used to match a result against the query that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DomainCheckResult {
    /// The domain name that was checked.
    pub domain_name: String,
    /// Availability verdict.
    pub status: DomainAvailabilityStatus,
    /// Mappability verdict.
    pub mappability: DomainMappabilityStatus,
    /// Whether WHOIS privacy is offered for this domain.
    pub supports_privacy: bool,
    /// Error reported by the store, if the check itself failed.
    pub error: Option<DomainCheckError>,
}

impl DomainCheckResult {
    /// Create a successful result with the given verdicts.
    #[must_use]
    pub fn new(
        domain_name: impl Into<String>,
        status: DomainAvailabilityStatus,
        mappability: DomainMappabilityStatus,
        supports_privacy: bool,
    ) -> Self {
        Self {
            domain_name: domain_name.into(),
            status,
            mappability,
            supports_privacy,
            error: None,
        }
    }

    /// Create a result carrying a store-side error.
    ///
    /// Verdicts are left at `UnknownStatus` since the check did not complete.
    #[must_use]
    pub fn errored(domain_name: impl Into<String>, error: DomainCheckError) -> Self {
        Self {
            domain_name: domain_name.into(),
            status: DomainAvailabilityStatus::UnknownStatus,
            mappability: DomainMappabilityStatus::UnknownStatus,
            supports_privacy: false,
            error: Some(error),
        }
    }

    /// Whether the domain can be acquired (registered or transferred).
    #[must_use]
    pub fn is_acquirable(&self) -> bool {
        matches!(
            self.status,
            DomainAvailabilityStatus::Available | DomainAvailabilityStatus::TransferrableDomain
        )
    }
}

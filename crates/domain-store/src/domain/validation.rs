//! Syntactic validation of domain names.
//!
//! Validation runs before any registry lookup; a name that fails here gets
//! its verdict without ever touching the registry.

use shared_types::{
    DomainAvailabilityStatus, DomainMappabilityStatus, MAX_DOMAIN_LENGTH, MAX_LABEL_LENGTH,
};

/// TLDs the platform sells registrations for.
pub const SUPPORTED_TLDS: &[&str] = &["blog", "com", "net", "org", "site", "me"];

/// TLDs for which WHOIS privacy is offered. The `.me` registry does not
/// support it.
pub const PRIVACY_TLDS: &[&str] = &["blog", "com", "net", "org", "site"];

/// Reserved second-level names that can never be registered.
pub const BLACKLISTED_NAMES: &[&str] = &["localhost", "example", "invalid", "test", "www"];

/// Check `domain_name` syntactically.
///
/// Expects a trimmed, lowercased name. Returns `None` when the name is
/// well-formed and sellable, otherwise the verdict explaining why not.
#[must_use]
pub fn syntax_status(domain_name: &str) -> Option<DomainAvailabilityStatus> {
    if domain_name.is_empty() || domain_name.len() > MAX_DOMAIN_LENGTH {
        return Some(DomainAvailabilityStatus::InvalidDomain);
    }

    let labels: Vec<&str> = domain_name.split('.').collect();
    if labels.len() < 2 {
        return Some(DomainAvailabilityStatus::InvalidDomain);
    }

    for label in &labels {
        if !is_valid_label(label) {
            return Some(DomainAvailabilityStatus::InvalidDomain);
        }
    }

    let tld = labels[labels.len() - 1];
    if tld.len() < 2 || !tld.bytes().all(|b| b.is_ascii_lowercase()) {
        return Some(DomainAvailabilityStatus::InvalidTld);
    }

    if !SUPPORTED_TLDS.contains(&tld) {
        return Some(DomainAvailabilityStatus::TldNotSupported);
    }

    let sld = labels[labels.len() - 2];
    if BLACKLISTED_NAMES.contains(&sld) {
        return Some(DomainAvailabilityStatus::BlacklistedDomain);
    }

    None
}

/// Derive the mappability verdict from a syntactic availability verdict.
///
/// A name with an unsupported TLD is still a real domain the owner could
/// map onto a site, so it stays mappable.
#[must_use]
pub fn mappability_for(status: Option<DomainAvailabilityStatus>) -> DomainMappabilityStatus {
    match status {
        None | Some(DomainAvailabilityStatus::TldNotSupported) => {
            DomainMappabilityStatus::MappableDomain
        }
        Some(DomainAvailabilityStatus::BlacklistedDomain) => {
            DomainMappabilityStatus::BlacklistedDomain
        }
        Some(
            DomainAvailabilityStatus::InvalidDomain | DomainAvailabilityStatus::InvalidTld,
        ) => DomainMappabilityStatus::InvalidDomain,
        Some(_) => DomainMappabilityStatus::UnknownStatus,
    }
}

/// Whether WHOIS privacy is offered for `domain_name`'s TLD.
#[must_use]
pub fn supports_privacy(domain_name: &str) -> bool {
    domain_name
        .rsplit('.')
        .next()
        .is_some_and(|tld| PRIVACY_TLDS.contains(&tld))
}

fn is_valid_label(label: &str) -> bool {
    if label.is_empty() || label.len() > MAX_LABEL_LENGTH {
        return false;
    }
    if label.starts_with('-') || label.ends_with('-') {
        return false;
    }
    label
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

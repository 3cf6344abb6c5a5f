//! In-memory registry of registered domain names.

use dashmap::DashSet;

/// Concurrent set of registered domain names.
///
/// A registered name is not sellable, but it can be transferred in, so
/// lookups against this registry produce `TransferrableDomain` rather than
/// a hard "taken" verdict.
#[derive(Debug, Default)]
pub struct DomainRegistry {
    registered: DashSet<String>,
}

impl DomainRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            registered: DashSet::new(),
        }
    }

    /// Create a registry seeded with the given names.
    #[must_use]
    pub fn with_domains<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let registry = Self::new();
        for domain in domains {
            registry.registered.insert(domain.into());
        }
        registry
    }

    /// Record `domain_name` as registered.
    ///
    /// Returns true if the name was not registered before.
    pub fn register(&self, domain_name: impl Into<String>) -> bool {
        self.registered.insert(domain_name.into())
    }

    /// Whether `domain_name` is registered.
    #[must_use]
    pub fn is_registered(&self, domain_name: &str) -> bool {
        self.registered.contains(domain_name)
    }

    /// Number of registered names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.registered.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registered.is_empty()
    }
}

//! Domain-check configuration with validation.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Default bound on how long a check waits for its result event.
pub const DEFAULT_CHECK_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the domain-check subsystem.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainCheckConfig {
    /// How long `check_domain_availability` waits before giving up.
    pub default_timeout: Duration,
}

impl Default for DomainCheckConfig {
    fn default() -> Self {
        Self {
            default_timeout: DEFAULT_CHECK_TIMEOUT,
        }
    }
}

impl DomainCheckConfig {
    /// Validate configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout(
                "default_timeout cannot be 0".into(),
            ));
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A timeout value is out of range.
    #[error("Invalid timeout: {0}")]
    InvalidTimeout(String),
}

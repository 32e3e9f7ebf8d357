//! Configuration and the evaluation environment.
//!
//! [`ValidatorConfig`] is plain data that deserialises from JSON with
//! defaults for every field. [`Environment`] is what a value holder
//! actually carries: the config, a DNS resolver and the "now" snapshot used
//! by age and personal number rules.

use std::sync::Arc;
use std::time::Duration;

use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::dns::{Resolver, SystemResolver};

/// Default upper bound for one DNS lookup.
pub const DEFAULT_DNS_TIMEOUT_MS: u64 = 2_000;

/// Default format for `isDate`.
pub const DEFAULT_DATE_FORMAT: &str = "Y-m-d";

/// Default format for each end of a `dateRange`.
pub const DEFAULT_DATE_RANGE_FORMAT: &str = "Y-m-d H:i";

// ============================================================================
// CONFIG
// ============================================================================

/// Validator configuration.
///
/// # Examples
///
/// ```
/// use sieve_validator::config::ValidatorConfig;
///
/// let config = ValidatorConfig::from_json_str(r#"{ "dns": { "timeout_ms": 500 } }"#).unwrap();
/// assert_eq!(config.dns.timeout_ms, 500);
/// assert!(config.dns.enabled);
/// assert_eq!(config.default_date_format, "Y-m-d");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// DNS collaborator settings.
    pub dns: DnsConfig,
    /// Format used by `isDate` when none is given.
    pub default_date_format: String,
    /// Format used by `dateRange` when none is given.
    pub default_date_range_format: String,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            dns: DnsConfig::default(),
            default_date_format: DEFAULT_DATE_FORMAT.to_owned(),
            default_date_range_format: DEFAULT_DATE_RANGE_FORMAT.to_owned(),
        }
    }
}

impl ValidatorConfig {
    /// Create a new configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration that never touches the network.
    pub fn offline() -> Self {
        Self {
            dns: DnsConfig::disabled(),
            ..Self::default()
        }
    }

    /// Parses a JSON document; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(ConfigError::Parse)
    }
}

/// DNS settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DnsConfig {
    /// When false every DNS rule is false without a lookup.
    pub enabled: bool,
    /// Upper bound for one blocking lookup, in milliseconds.
    pub timeout_ms: u64,
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            timeout_ms: DEFAULT_DNS_TIMEOUT_MS,
        }
    }
}

impl DnsConfig {
    /// DNS switched off.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Lookup bound as a duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The document is not valid configuration JSON.
    #[error("Invalid validator configuration: {0}")]
    Parse(#[source] serde_json::Error),
}

// ============================================================================
// ENVIRONMENT
// ============================================================================

/// Everything a value holder needs beyond the value itself.
///
/// Cheap to clone; the resolver is shared.
#[derive(Debug, Clone)]
pub struct Environment {
    config: Arc<ValidatorConfig>,
    resolver: Arc<dyn Resolver>,
    now: NaiveDateTime,
}

impl Environment {
    /// Builds an environment from a config, using the system resolver and
    /// the current local time.
    #[must_use]
    pub fn from_config(config: ValidatorConfig) -> Self {
        let resolver = SystemResolver::new(config.dns.timeout());
        Self {
            config: Arc::new(config),
            resolver: Arc::new(resolver),
            now: chrono::Local::now().naive_local(),
        }
    }

    /// Replaces the resolver.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_resolver(mut self, resolver: impl Resolver + 'static) -> Self {
        self.resolver = Arc::new(resolver);
        self
    }

    /// Pins "now".
    #[must_use = "builder methods must be chained or built"]
    pub fn with_now(mut self, now: NaiveDateTime) -> Self {
        self.now = now;
        self
    }

    /// The configuration.
    #[must_use]
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// The DNS resolver.
    #[must_use]
    pub fn resolver(&self) -> &dyn Resolver {
        self.resolver.as_ref()
    }

    /// The "now" snapshot.
    #[must_use]
    pub fn now(&self) -> NaiveDateTime {
        self.now
    }

    /// Year of the "now" snapshot.
    #[must_use]
    pub fn current_year(&self) -> i32 {
        self.now.year()
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::from_config(ValidatorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let config = ValidatorConfig::default();
        assert_eq!(config.dns.timeout_ms, 2_000);
        assert!(config.dns.enabled);
        assert_eq!(config.default_date_range_format, "Y-m-d H:i");
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config =
            ValidatorConfig::from_json_str(r#"{ "default_date_format": "d/m/Y" }"#).unwrap();
        assert_eq!(config.default_date_format, "d/m/Y");
        assert_eq!(config.dns, DnsConfig::default());
    }

    #[test]
    fn invalid_json_is_an_error() {
        let err = ValidatorConfig::from_json_str(r#"{ "dns": { "enabled": "yes" } }"#).unwrap_err();
        assert!(err.to_string().starts_with("Invalid validator configuration"));
    }

    #[test]
    fn offline_disables_dns() {
        assert!(!ValidatorConfig::offline().dns.enabled);
    }

    #[test]
    fn environment_pins_now() {
        let now = NaiveDate::from_ymd_opt(2026, 10, 17)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let env = Environment::default().with_now(now);
        assert_eq!(env.current_year(), 2026);
        assert_eq!(env.now(), now);
    }
}

//! Runtime configuration for the fetcher.
//!
//! Values come from three layers, later ones winning: built-in defaults, an
//! optional YAML file, and CLI flags / environment variables.
//!
//! ```yaml
//! timeout_secs: 20
//! connect_timeout_secs: 5
//! user_agent: "Mozilla/5.0 (compatible; headline_sentiment)"
//! ```

use crate::cli::Cli;
use crate::error::ConfigError;
use serde::Deserialize;
use tracing::{debug, info, instrument};

/// Default whole-request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Default TCP/TLS connect timeout.
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Settings for [`HttpFetcher`](crate::scrapers::fetch::HttpFetcher).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FetchConfig {
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// `User-Agent` header value.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl FetchConfig {
    /// Parse a YAML document. Missing keys keep their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read and parse a YAML config file.
    #[instrument(level = "info", skip_all, fields(%path))]
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        let config = Self::from_yaml_str(&raw)?;
        info!("Loaded configuration file");
        Ok(config)
    }

    /// Build the effective config from CLI arguments.
    ///
    /// Loads the config file when one was given, applies CLI overrides, and
    /// validates the result.
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let base = match cli.config.as_deref() {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        let config = base.with_overrides(cli.timeout_secs, cli.user_agent.as_deref());
        config.validate()?;
        debug!(?config, "Resolved fetch configuration");
        Ok(config)
    }

    fn with_overrides(mut self, timeout_secs: Option<u64>, user_agent: Option<&str>) -> Self {
        if let Some(secs) = timeout_secs {
            self.timeout_secs = secs;
        }
        if let Some(ua) = user_agent {
            self.user_agent = ua.to_string();
        }
        self
    }

    /// Reject values that would make the client unusable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "timeout_secs",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.connect_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "connect_timeout_secs",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "user_agent",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

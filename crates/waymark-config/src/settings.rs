//! Sync client settings.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Environment variable overriding [`SyncConfig::fetch_timeout_ms`].
pub const ENV_FETCH_TIMEOUT_MS: &str = "WAYMARK_FETCH_TIMEOUT_MS";

/// Environment variable overriding [`SyncConfig::dimension`].
pub const ENV_DIMENSION: &str = "WAYMARK_DIMENSION";

/// Settings for the sync client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Upper bound on a single snapshot fetch, in milliseconds.
    pub fetch_timeout_ms: u64,
    /// When set, snapshots are restricted to this dimension.
    pub dimension: Option<String>,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            fetch_timeout_ms: 5000,
            dimension: None,
        }
    }
}

impl SyncConfig {
    /// Loads settings from a TOML file, applying defaults for absent keys.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` when the file cannot be read and
    /// `ConfigError::Parse` when it is not valid TOML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&raw)?;
        tracing::debug!(path = %path.as_ref().display(), "loaded sync config");
        Ok(config)
    }

    /// Applies environment-variable overrides on top of the current values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Env` when an override is present but
    /// malformed.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Ok(raw) = std::env::var(ENV_FETCH_TIMEOUT_MS) {
            self.fetch_timeout_ms = raw
                .parse()
                .map_err(|_| ConfigError::env(ENV_FETCH_TIMEOUT_MS, format!("not a number: '{raw}'")))?;
        }
        if let Ok(raw) = std::env::var(ENV_DIMENSION) {
            self.dimension = Some(raw);
        }
        Ok(())
    }

    /// Checks the resolved settings as a whole.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` when the timeout is zero or a set
    /// dimension is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fetch_timeout_ms == 0 {
            return Err(ConfigError::validation("fetch_timeout_ms must be greater than zero"));
        }
        if let Some(dimension) = &self.dimension
            && dimension.is_empty()
        {
            return Err(ConfigError::validation("dimension must not be empty when set"));
        }
        Ok(())
    }

    /// The fetch timeout as a [`Duration`].
    #[must_use]
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }
}

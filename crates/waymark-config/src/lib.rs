//! Configuration for the Waymark sync client.
//!
//! Configuration is resolved in three steps: defaults, then an optional TOML
//! file, then environment-variable overrides, and finally validated as a
//! whole. There is no hot reload; the resolved value is plain data handed to
//! the client at construction.

mod settings;

pub use settings::{ENV_DIMENSION, ENV_FETCH_TIMEOUT_MS, SyncConfig};

/// Error types for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Environment error: {variable}: {message}")]
    Env {
        /// The offending environment variable.
        variable: String,
        /// What went wrong with its value.
        message: String,
    },

    #[error("Validation error: {0}")]
    Validation(String),
}

impl ConfigError {
    pub fn env(variable: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Env {
            variable: variable.into(),
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

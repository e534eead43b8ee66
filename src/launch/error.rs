// Error types for Launch module

use std::path::PathBuf;
use thiserror::Error;

/// Launch error types
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("{tool} executable not found; set its path in the configuration")]
    DiscoveryMiss { tool: String },

    #[error("Failed to launch {tool} ({}): {message}", .path.display())]
    SpawnFailed {
        tool: String,
        path: PathBuf,
        message: String,
    },

    #[error("Discovery failed: {0}")]
    Discovery(#[from] crate::discovery::DiscoveryError),
}

impl LaunchError {
    /// True when nothing was launched because no executable could be located
    pub fn is_discovery_miss(&self) -> bool {
        matches!(self, LaunchError::DiscoveryMiss { .. })
    }
}

pub type Result<T> = std::result::Result<T, LaunchError>;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("TOML parse error in {}: {source}", .path.display())]
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

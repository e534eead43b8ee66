// Launch configuration
// Built once at startup and passed by reference to the launcher

use crate::launch::error::ConfigError;
use crate::launch::types::ToolId;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Default serial line speed
pub const DEFAULT_BAUD_RATE: u32 = 115200;

/// Launch configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LaunchConfig {
    /// Absolute path to PuTTY, bypassing discovery
    pub putty_path: Option<PathBuf>,
    /// Absolute path to RealTerm, bypassing discovery
    pub realterm_path: Option<PathBuf>,
    /// Baud rate passed to both tools (default: 115200)
    pub baud_rate: u32,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            putty_path: None,
            realterm_path: None,
            baud_rate: DEFAULT_BAUD_RATE,
        }
    }
}

/// Parse an environment variable, logging a warning if the value is present but invalid.
fn parse_env_var<T: std::str::FromStr>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(v) => match v.parse() {
            Ok(parsed) => parsed,
            Err(_) => {
                warn!(var = name, value = %v, "Invalid env var value, using default");
                default
            }
        },
        Err(_) => default,
    }
}

fn path_env_var(name: &str) -> Option<PathBuf> {
    std::env::var_os(name)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

impl LaunchConfig {
    /// Default config file location: `<config_dir>/portpilot/portpilot.toml`
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .map(|p| p.join("portpilot").join("portpilot.toml"))
            .unwrap_or_else(|| PathBuf::from("portpilot.toml"))
    }

    /// Load from a TOML file; a missing file yields the defaults
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: LaunchConfig =
            toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
                path: path.to_path_buf(),
                source,
            })?;

        debug!(path = %path.display(), "loaded launch config");
        Ok(config)
    }

    /// Apply `PORTPILOT_*` environment overrides (including a `.env` file)
    pub fn with_env_overrides(mut self) -> Self {
        dotenvy::dotenv().ok();

        if let Some(path) = path_env_var("PORTPILOT_PUTTY_PATH") {
            self.putty_path = Some(path);
        }
        if let Some(path) = path_env_var("PORTPILOT_REALTERM_PATH") {
            self.realterm_path = Some(path);
        }
        self.baud_rate = parse_env_var("PORTPILOT_BAUD", self.baud_rate);

        self
    }

    /// Load file then environment, the startup path used by the binary
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map_or_else(Self::default_path, Path::to_path_buf);
        Ok(Self::from_file(&path)?.with_env_overrides())
    }

    /// Configured override for `tool`, if any
    pub fn override_for(&self, tool: ToolId) -> Option<&Path> {
        match tool {
            ToolId::Putty => self.putty_path.as_deref(),
            ToolId::RealTerm => self.realterm_path.as_deref(),
        }
    }
}

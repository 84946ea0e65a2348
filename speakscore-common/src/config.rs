//! Bootstrap configuration
//!
//! Settings resolve in priority order:
//! 1. Command-line argument
//! 2. Environment variable (handled by the binary's argument parser)
//! 3. TOML config file
//! 4. Compiled default
//!
//! A missing or unreadable TOML file is not fatal; the caller logs a warning
//! and continues with defaults.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Default HTTP port (overridable with `PORT`)
pub const DEFAULT_PORT: u16 = 3000;

/// Default bind address
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";

/// Default backing record, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "data/studentData.json";

/// Compiled-in fallback values
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledDefaults {
    pub port: u16,
    pub bind_address: String,
    pub data_file: PathBuf,
    pub log_level: String,
}

impl Default for CompiledDefaults {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            log_level: default_log_level(),
        }
    }
}

/// Configuration file contents
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    /// HTTP server port
    #[serde(default)]
    pub port: Option<u16>,

    /// Address to bind the HTTP listener to
    #[serde(default)]
    pub bind_address: Option<String>,

    /// Path to the assessment record JSON file
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    /// Logging configuration (optional)
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl TomlConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("Parse TOML failed: {}", e)))
    }

    /// Read and parse the TOML file at `path`
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Read TOML failed: {}", e)))?;
        Self::from_toml_str(&content)
    }
}

/// Platform config file location: `<config_dir>/speakscore/speakscore.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("speakscore").join("speakscore.toml"))
}

/// Values supplied on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub data_file: Option<PathBuf>,
}

/// Fully resolved server configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    pub bind_address: String,
    pub data_file: PathBuf,
    pub log_level: String,
}

impl ServerConfig {
    /// Merge overrides, TOML and compiled defaults (in that order of priority)
    pub fn resolve(overrides: Overrides, toml: &TomlConfig) -> Self {
        let defaults = CompiledDefaults::default();

        Self {
            port: overrides.port.or(toml.port).unwrap_or(defaults.port),
            bind_address: overrides
                .bind_address
                .or_else(|| toml.bind_address.clone())
                .unwrap_or(defaults.bind_address),
            data_file: overrides
                .data_file
                .or_else(|| toml.data_file.clone())
                .unwrap_or(defaults.data_file),
            log_level: toml.logging.level.clone(),
        }
    }

    /// `host:port` string for the listener
    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.port.is_none());
        assert!(config.data_file.is_none());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_listen_address() {
        let config = ServerConfig::resolve(Overrides::default(), &TomlConfig::default());
        assert_eq!(config.listen_address(), "0.0.0.0:3000");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("port = \"not a number\"").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}

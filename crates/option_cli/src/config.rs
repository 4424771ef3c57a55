//! CLI configuration management.
//!
//! Handles loading configuration from a TOML file with environment variable
//! override support.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// Environment variable overriding the log level
pub const ENV_LOG_LEVEL: &str = "OPTION_PRICER_LOG_LEVEL";
/// Environment variable overriding the batch output directory
pub const ENV_OUTPUT_DIR: &str = "OPTION_PRICER_OUTPUT_DIR";
/// Environment variable overriding the number of displayed decimals
pub const ENV_DECIMALS: &str = "OPTION_PRICER_DECIMALS";

/// Largest accepted `decimals` value
pub const MAX_DECIMALS: usize = 12;

/// Configuration error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Unknown log level
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// Too many decimals requested
    #[error("Invalid decimals: {0}. Must be at most 12")]
    InvalidDecimals(usize),

    /// Reading the configuration file failed
    #[error("Configuration file error: {0}")]
    Io(String),

    /// Parsing the configuration file failed
    #[error("Configuration parse error: {0}")]
    Parse(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Everything
    Trace,
    /// Per-contract pricing detail
    Debug,
    /// Command progress
    #[default]
    Info,
    /// Recovered problems
    Warn,
    /// Errors only
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level
    pub log_level: LogLevel,

    /// Directory batch output files are written to
    pub output_dir: PathBuf,

    /// Decimal places shown in table output
    pub decimals: usize,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            output_dir: PathBuf::from("."),
            decimals: 4,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load from `path` if it exists, otherwise use defaults.
    ///
    /// A file that exists but cannot be read or parsed is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = level.parse()?;
        }

        if let Some(dir) = lookup(ENV_OUTPUT_DIR) {
            self.output_dir = PathBuf::from(dir);
        }

        if let Some(decimals) = lookup(ENV_DECIMALS) {
            self.decimals = decimals
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("{}={}", ENV_DECIMALS, decimals)))?;
        }

        Ok(self)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.decimals > MAX_DECIMALS {
            return Err(ConfigError::InvalidDecimals(self.decimals));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.decimals, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_toml_partial() {
        let config = CliConfig::from_toml("log_level = \"debug\"\n").unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.decimals, 4);
    }

    #[test]
    fn test_from_toml_full() {
        let config = CliConfig::from_toml(
            "log_level = \"warn\"\noutput_dir = \"reports\"\ndecimals = 6\n",
        )
        .unwrap();
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.output_dir, PathBuf::from("reports"));
        assert_eq!(config.decimals, 6);
    }

    #[test]
    fn test_from_toml_rejects_unknown_level() {
        let err = CliConfig::from_toml("log_level = \"verbose\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = CliConfig::load_or_default(Path::new("does/not/exist.toml")).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            (ENV_LOG_LEVEL, "ERROR"),
            (ENV_OUTPUT_DIR, "/tmp/out"),
            (ENV_DECIMALS, "8"),
        ]
        .into_iter()
        .collect();

        let config = CliConfig::default()
            .with_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Error);
        assert_eq!(config.output_dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.decimals, 8);
    }

    #[test]
    fn test_override_invalid_decimals() {
        let result = CliConfig::default().with_overrides(|key| {
            (key == ENV_DECIMALS).then(|| "many".to_string())
        });
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_validate_decimals() {
        let config = CliConfig {
            decimals: 13,
            ..CliConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidDecimals(13)));
    }

    #[test]
    fn test_log_level_parse_and_display() {
        assert_eq!("Trace".parse::<LogLevel>().unwrap(), LogLevel::Trace);
        assert!("loud".parse::<LogLevel>().is_err());
        assert_eq!(LogLevel::Warn.to_string(), "warn");
    }
}

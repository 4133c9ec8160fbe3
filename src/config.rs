//! Configuration management for the green commute service
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::CommuteError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the green commute service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GreenCommuteConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Emissions model settings
    #[serde(default)]
    pub model: ModelConfig,
    /// Distance table settings
    #[serde(default)]
    pub geography: GeographyConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind
    #[serde(default = "default_server_host")]
    pub host: String,
    /// Port to listen on
    #[serde(default = "default_server_port")]
    pub port: u16,
}

/// Emissions model settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelConfig {
    /// JSON artifact bundle; the embedded model is used when unset
    pub artifacts_path: Option<PathBuf>,
}

/// Distance table settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeographyConfig {
    /// Distance for pairs missing from the table
    #[serde(default = "default_distance_km")]
    pub default_distance_km: f64,
    /// Reuse the (A, B) distance for (B, A) when (B, A) has no entry
    #[serde(default)]
    pub symmetric: bool,
    /// Reject locations outside the known set
    #[serde(default)]
    pub strict_locations: bool,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_server_host() -> String {
    "0.0.0.0".to_string()
}

fn default_server_port() -> u16 {
    8080
}

fn default_distance_km() -> f64 {
    crate::geography::DEFAULT_DISTANCE_KM
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
        }
    }
}

impl Default for GeographyConfig {
    fn default() -> Self {
        Self {
            default_distance_km: default_distance_km(),
            symmetric: false,
            strict_locations: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl GreenCommuteConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path()
                .filter(|path| path.exists())
                .unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Add environment variable overrides, e.g. GREEN_COMMUTE_SERVER__PORT
        builder = builder.add_source(
            Environment::with_prefix("GREEN_COMMUTE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: GreenCommuteConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        // Apply defaults for missing values
        config.apply_defaults();

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("green-commute").join("config.toml"))
    }

    /// Apply default values to empty configuration fields
    pub fn apply_defaults(&mut self) {
        if self.server.host.is_empty() {
            self.server.host = default_server_host();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
        if self
            .model
            .artifacts_path
            .as_ref()
            .is_some_and(|path| path.as_os_str().is_empty())
        {
            self.model.artifacts_path = None;
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(CommuteError::config("Server port cannot be 0").into());
        }

        let km = self.geography.default_distance_km;
        if !(km.is_finite() && km > 0.0) {
            return Err(CommuteError::config(format!(
                "Default distance must be a positive number of km, got {km}"
            ))
            .into());
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(CommuteError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(CommuteError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        Ok(())
    }

    /// Socket address string the server binds to
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = GreenCommuteConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.geography.default_distance_km, 10.0);
        assert!(!config.geography.symmetric);
        assert!(!config.geography.strict_locations);
        assert_eq!(config.logging.level, "info");
        assert!(config.model.artifacts_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = GreenCommuteConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_invalid_log_format() {
        let mut config = GreenCommuteConfig::default();
        config.logging.format = "xml".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_numeric_ranges() {
        let mut config = GreenCommuteConfig::default();
        config.geography.default_distance_km = 0.0;
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Default distance"));

        let mut config = GreenCommuteConfig::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_apply_defaults_fills_empty_strings() {
        let mut config = GreenCommuteConfig::default();
        config.logging.level = String::new();
        config.server.host = String::new();
        config.model.artifacts_path = Some(PathBuf::new());
        config.apply_defaults();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.server.host, "0.0.0.0");
        assert!(config.model.artifacts_path.is_none());
    }

    #[test]
    fn test_load_from_toml_file() {
        let path = std::env::temp_dir().join(format!(
            "green-commute-config-{}.toml",
            std::process::id()
        ));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[server]\nport = 9090\n\n[geography]\nsymmetric = true\ndefault_distance_km = 12.5\n\n[logging]\nformat = \"json\""
        )
        .unwrap();

        let config = GreenCommuteConfig::load_from_path(Some(path.clone())).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "0.0.0.0");
        assert!(config.geography.symmetric);
        assert_eq!(config.geography.default_distance_km, 12.5);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_shipped_default_config_is_valid() {
        let config =
            GreenCommuteConfig::load_from_path(Some(PathBuf::from("config/default.toml"))).unwrap();
        assert_eq!(config.server.port, 8080);
        assert!(config.model.artifacts_path.is_none());
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_config_path_generation() {
        if let Some(path) = GreenCommuteConfig::get_config_path() {
            assert!(path.to_string_lossy().contains("green-commute"));
            assert!(path.to_string_lossy().contains("config.toml"));
        }
    }
}

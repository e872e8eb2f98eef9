//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `AUSPIRE` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use auspire::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! config.logging.init().expect("Failed to install logger");
//! ```

mod error;
mod logging;
mod report;

pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use report::ReportConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment is a valid
/// configuration. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Report rendering switches
    #[serde(default)]
    pub report: ReportConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `AUSPIRE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `AUSPIRE__LOGGING__LEVEL=debug` -> `logging.level = "debug"`
    /// - `AUSPIRE__REPORT__INCLUDE_METHODOLOGY=false` -> `report.include_methodology = false`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("AUSPIRE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("AUSPIRE__LOGGING__LEVEL");
        env::remove_var("AUSPIRE__LOGGING__FORMAT");
        env::remove_var("AUSPIRE__REPORT__INCLUDE_METHODOLOGY");
    }

    #[test]
    fn test_load_with_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.logging.level, "info,auspire=debug");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert!(config.report.include_methodology);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("AUSPIRE__LOGGING__LEVEL", "warn");
        env::set_var("AUSPIRE__LOGGING__FORMAT", "json");
        env::set_var("AUSPIRE__REPORT__INCLUDE_METHODOLOGY", "false");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert!(!config.report.include_methodology);
    }

    #[test]
    fn test_validate_rejects_empty_log_level() {
        let config = AppConfig {
            logging: LoggingConfig {
                level: String::new(),
                format: LogFormat::Pretty,
            },
            report: ReportConfig::default(),
        };
        assert!(config.validate().is_err());
    }
}

//! Logging configuration and subscriber setup

use serde::Deserialize;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::{ConfigError, ValidationError};

/// Output format for log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directives; `RUST_LOG` takes precedence when set
    #[serde(default = "default_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

fn default_level() -> String {
    "info,auspire=debug".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

impl LoggingConfig {
    /// Validate logging configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.level.trim().is_empty() {
            return Err(ValidationError::MissingRequired("logging.level"));
        }
        EnvFilter::try_new(&self.level)
            .map_err(|e| ValidationError::InvalidLogFilter(e.to_string()))?;
        Ok(())
    }

    /// Installs the global subscriber, writing to stderr so stdout stays
    /// free for command output.
    pub fn init(&self) -> Result<(), ConfigError> {
        let filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => EnvFilter::try_new(&self.level)
                .map_err(|e| ConfigError::LoggingInit(e.to_string()))?,
        };

        let registry = tracing_subscriber::registry().with(filter);
        let result = match self.format {
            LogFormat::Pretty => registry
                .with(fmt::layer().with_writer(std::io::stderr))
                .try_init(),
            LogFormat::Json => registry
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .try_init(),
        };

        result.map_err(|e| ConfigError::LoggingInit(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_defaults() {
        let logging = LoggingConfig::default();
        assert_eq!(logging.level, "info,auspire=debug");
        assert_eq!(logging.format, LogFormat::Pretty);
        assert!(logging.validate().is_ok());
    }

    #[test]
    fn test_empty_level_rejected() {
        let logging = LoggingConfig {
            level: "  ".to_string(),
            format: LogFormat::Json,
        };
        assert!(matches!(
            logging.validate(),
            Err(ValidationError::MissingRequired("logging.level"))
        ));
    }

    #[test]
    fn test_malformed_directive_rejected() {
        let logging = LoggingConfig {
            level: "auspire=loud".to_string(),
            format: LogFormat::Pretty,
        };
        assert!(matches!(
            logging.validate(),
            Err(ValidationError::InvalidLogFilter(_))
        ));
    }

    #[test]
    fn test_logging_deserialization() {
        let json = r#"{ "level": "warn", "format": "json" }"#;
        let logging: LoggingConfig = serde_json::from_str(json).unwrap();
        assert_eq!(logging.level, "warn");
        assert_eq!(logging.format, LogFormat::Json);
    }
}

//! Structured logging.
//!
//! # Responsibilities
//! - Parse the configured log level and format
//! - Install the global `tracing` subscriber
//! - Carry service identity for request log records
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - JSON format for production, pretty format for development
//! - Log level configurable via config, overridden by `RUST_LOG`

use std::str::FromStr;
use std::sync::Arc;

use thiserror::Error;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, ObservabilityConfig, ServiceSection};

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid log level '{level}': expected one of trace, debug, info, warn, error, off")]
    InvalidLevel { level: String },

    #[error("failed to install log subscriber: {0}")]
    Install(String),
}

/// Handle to the logging collaborator.
///
/// Cheap to clone; all emission goes through the global `tracing`
/// dispatcher, which is safe to use from any number of tasks at once.
#[derive(Debug, Clone)]
pub struct Logger {
    level: LevelFilter,
    format: LogFormat,
    service: Arc<str>,
    environment: Arc<str>,
}

impl Logger {
    /// Build a logger from configuration without installing it.
    pub fn new(
        config: &ObservabilityConfig,
        service: &ServiceSection,
    ) -> Result<Self, LoggingError> {
        let level = LevelFilter::from_str(config.log_level.trim()).map_err(|_| {
            LoggingError::InvalidLevel {
                level: config.log_level.clone(),
            }
        })?;

        Ok(Self {
            level,
            format: config.log_format,
            service: Arc::from(service.name.as_str()),
            environment: Arc::from(service.environment.as_str()),
        })
    }

    /// Install this logger as the process-wide subscriber.
    ///
    /// Fails if a global subscriber is already set.
    pub fn install(&self) -> Result<(), LoggingError> {
        let filter = EnvFilter::builder()
            .with_default_directive(self.level.into())
            .from_env_lossy();

        let registry = tracing_subscriber::registry().with(filter);
        let result = match self.format {
            LogFormat::Json => registry
                .with(tracing_subscriber::fmt::layer().json())
                .try_init(),
            LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).try_init(),
        };

        result.map_err(|e| LoggingError::Install(e.to_string()))
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    pub fn format(&self) -> LogFormat {
        self.format
    }

    /// Service name attached to request records.
    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observability(level: &str) -> ObservabilityConfig {
        ObservabilityConfig {
            log_level: level.to_string(),
            ..ObservabilityConfig::default()
        }
    }

    #[test]
    fn test_levels_parse_case_insensitively() {
        let service = ServiceSection::default();
        for (raw, expected) in [
            ("info", LevelFilter::INFO),
            ("DEBUG", LevelFilter::DEBUG),
            (" warn ", LevelFilter::WARN),
            ("off", LevelFilter::OFF),
        ] {
            let logger = Logger::new(&observability(raw), &service).unwrap();
            assert_eq!(logger.level(), expected);
        }
    }

    #[test]
    fn test_invalid_level_fails_construction() {
        let err = Logger::new(&observability("loud"), &ServiceSection::default()).unwrap_err();
        assert!(matches!(err, LoggingError::InvalidLevel { ref level } if level == "loud"));
        assert!(err.to_string().contains("invalid log level 'loud'"));
    }

    #[test]
    fn test_carries_service_identity() {
        let service = ServiceSection {
            name: "rides".into(),
            environment: "production".into(),
            region: "eu-west-1".into(),
        };
        let logger = Logger::new(&ObservabilityConfig::default(), &service).unwrap();
        assert_eq!(logger.service(), "rides");
        assert_eq!(logger.environment(), "production");
        assert_eq!(logger.format(), LogFormat::Json);
    }

    #[test]
    fn test_second_install_fails() {
        let logger =
            Logger::new(&ObservabilityConfig::default(), &ServiceSection::default()).unwrap();
        // The first call may race with other tests; the second can never succeed.
        let _ = logger.install();
        assert!(matches!(logger.install(), Err(LoggingError::Install(_))));
    }
}

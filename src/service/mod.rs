//! Service object and its collaborators.
//!
//! Collaborators are constructed in order (config, logger, database) and
//! handed to [`Service::new`] explicitly; nothing is resolved at runtime.

use std::sync::Arc;

use crate::config::ServiceConfig;
use crate::database::Connection;
use crate::error::Result;
use crate::observability::Logger;

/// The running service and the collaborators it was built with.
#[derive(Debug)]
pub struct Service {
    config: Arc<ServiceConfig>,
    database: Arc<Connection>,
    logger: Logger,
}

impl Service {
    pub fn new(config: Arc<ServiceConfig>, database: Arc<Connection>, logger: Logger) -> Self {
        Self {
            config,
            database,
            logger,
        }
    }

    /// Announce the service and summarise its components.
    pub fn start(&self) -> Result<()> {
        tracing::info!(service = %self.config.service.name, "Starting service");

        tracing::info!(
            service = %self.config.service.name,
            environment = %self.config.service.environment,
            region = %self.config.service.region,
            database = %self.database,
            log_level = %self.logger.level(),
            log_format = %self.logger.format(),
            "Service components initialized"
        );

        Ok(())
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_with_default_collaborators() {
        let config = Arc::new(ServiceConfig::default());
        let logger = Logger::new(&config.observability, &config.service).unwrap();
        let database = Arc::new(Connection::open(&config.database).unwrap());

        let service = Service::new(config, database, logger);
        assert!(service.start().is_ok());
        assert_eq!(service.logger().service(), "fake-uber-service");
        assert_eq!(service.config().database.database, "uber_core");
    }
}

use std::fmt;

use thiserror::Error;

use crate::config::DatabaseConfig;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DatabaseError {
    #[error("invalid database configuration: {0}")]
    InvalidConfig(&'static str),
}

/// Inert database handle built at startup.
#[derive(Debug, Clone)]
pub struct Connection {
    config: DatabaseConfig,
}

impl Connection {
    /// Build a handle from configuration.
    pub fn open(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        if config.host.trim().is_empty() {
            return Err(DatabaseError::InvalidConfig("host must not be empty"));
        }
        if config.port == 0 {
            return Err(DatabaseError::InvalidConfig("port must be non-zero"));
        }
        if config.database.trim().is_empty() {
            return Err(DatabaseError::InvalidConfig("database name must not be empty"));
        }
        if config.username.trim().is_empty() {
            return Err(DatabaseError::InvalidConfig("username must not be empty"));
        }

        tracing::debug!(dsn = %Self::format_dsn(config), "Database handle created");

        Ok(Self {
            config: config.clone(),
        })
    }

    /// Connection string, without credentials.
    pub fn dsn(&self) -> String {
        Self::format_dsn(&self.config)
    }

    fn format_dsn(config: &DatabaseConfig) -> String {
        format!(
            "postgres://{}@{}:{}/{}",
            config.username, config.host, config.port, config.database
        )
    }
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dsn())
    }
}

//! Error types for fake-uber-service
//!
//! Every variant is a startup failure: once the listener is serving, the
//! request path has no error to report.

use thiserror::Error;

use crate::config::ConfigError;
use crate::database::DatabaseError;
use crate::observability::LoggingError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("logger error: {0}")]
    Logging(#[from] LoggingError),

    #[error("database error: {0}")]
    Database(#[from] DatabaseError),

    #[error("metrics exporter error: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

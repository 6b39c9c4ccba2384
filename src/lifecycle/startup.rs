//! Startup orchestration.
//!
//! # Responsibilities
//! - Construct collaborators in dependency order
//! - Start the service and the optional metrics exporter
//! - Bind the listener and begin accepting traffic
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Collaborators are passed explicitly; there is no container
//! - Listener binds last (traffic only when ready)

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::config::{parse_socket_addr, validate_config, ConfigError, ServiceConfig};
use crate::database::Connection;
use crate::error::{Error, Result};
use crate::http::HttpServer;
use crate::lifecycle::{signals, Shutdown};
use crate::observability::{metrics, Logger};
use crate::service::Service;

/// Open the database handle, build the service and start it.
pub fn build_service(config: ServiceConfig, logger: Logger) -> Result<Arc<Service>> {
    let config = Arc::new(config);
    let database = Arc::new(Connection::open(&config.database)?);

    let service = Service::new(config, database, logger);
    service.start()?;

    Ok(Arc::new(service))
}

/// Start the service and serve until a shutdown signal arrives.
///
/// Returns an error without accepting any traffic if the configuration is
/// invalid or a collaborator fails to initialize.
pub async fn start(config: ServiceConfig) -> Result<()> {
    validate_config(&config).map_err(ConfigError::Validation)?;
    let metrics_address = metrics_address(&config)?;

    let logger = Logger::new(&config.observability, &config.service)?;
    logger.install()?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        service = %config.service.name,
        "fake-uber-service starting"
    );

    let bind_address = config.listener.bind_address.clone();
    let service = build_service(config, logger)?;

    if let Some(addr) = metrics_address {
        metrics::init_metrics(addr)?;
    }

    let listener = TcpListener::bind(&bind_address)
        .await
        .map_err(|source| Error::Bind {
            address: bind_address.clone(),
            source,
        })?;
    let local_addr = listener.local_addr().map_err(Error::Serve)?;

    tracing::info!(address = %local_addr, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::wait_for_signal().await;
        shutdown.trigger();
    });

    HttpServer::new(service)
        .run(listener, server_shutdown)
        .await
        .map_err(Error::Serve)?;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Exporter address, when metrics are enabled.
fn metrics_address(config: &ServiceConfig) -> Result<Option<SocketAddr>> {
    if !config.observability.metrics_enabled {
        return Ok(None);
    }

    let addr = parse_socket_addr(
        "observability.metrics_address",
        &config.observability.metrics_address,
    )
    .map_err(|e| ConfigError::Validation(vec![e]))?;

    Ok(Some(addr))
}

//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the catch-all handler
//! - Wire up middleware (tracing, concurrency limit, timeout)
//! - Request spans only; the handler emits the single per-request record
//! - Serve on a bound listener until shutdown is signalled

use std::sync::Arc;
use std::time::Duration;

use axum::{middleware, routing::any, Router};
use tokio::net::TcpListener;
use tokio::sync::Semaphore;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::http::handler::handle_request;
use crate::http::middleware::concurrency_limit;
use crate::lifecycle::ShutdownSignal;
use crate::service::Service;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<Service>,
}

/// HTTP server for the service.
pub struct HttpServer {
    router: Router,
    service: Arc<Service>,
}

impl HttpServer {
    /// Create a new HTTP server around a started service.
    pub fn new(service: Arc<Service>) -> Self {
        let router = Self::build_router(service.clone());
        Self { router, service }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(service: Arc<Service>) -> Router {
        let config = service.config();
        let request_timeout = Duration::from_secs(config.timeouts.request_secs);
        let limit = Arc::new(Semaphore::new(config.listener.max_connections));

        Router::new()
            .route("/", any(handle_request))
            .route("/{*path}", any(handle_request))
            .with_state(AppState { service })
            .layer(TimeoutLayer::new(request_timeout))
            .layer(middleware::from_fn_with_state(limit, concurrency_limit))
            .layer(
                TraceLayer::new_for_http()
                    .on_request(())
                    .on_response(())
                    .on_body_chunk(())
                    .on_eos(()),
            )
    }

    /// A clone of the router, for driving requests in-process.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Returns once `shutdown` resolves and in-flight requests have completed.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: ShutdownSignal,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            service = %self.service.config().service.name,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.wait().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

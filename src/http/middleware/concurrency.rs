//! Concurrency limit middleware.
//! Bounds in-flight requests with a semaphore sized by `listener.max_connections`.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tokio::sync::Semaphore;

/// Wait for a slot, then run the rest of the stack while holding it.
pub async fn concurrency_limit(
    State(limit): State<Arc<Semaphore>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    match limit.acquire_owned().await {
        Ok(_permit) => next.run(request).await,
        Err(_) => {
            tracing::error!("Concurrency limiter closed");
            StatusCode::SERVICE_UNAVAILABLE.into_response()
        }
    }
}

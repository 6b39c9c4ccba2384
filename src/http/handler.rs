//! The catch-all request handler.

use std::time::Instant;

use axum::{
    extract::State,
    http::{Method, Uri},
};

use crate::http::request::RequestId;
use crate::http::response::ServiceResponse;
use crate::http::server::AppState;
use crate::observability::metrics;

/// Answer any method on any path with a fresh success record.
pub async fn handle_request(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> ServiceResponse {
    let started = Instant::now();
    let request_id = RequestId::generate();
    let logger = state.service.logger();

    tracing::info!(
        service = %logger.service(),
        environment = %logger.environment(),
        request_id = %request_id,
        method = %method,
        path = %uri.path(),
        "Processing request"
    );

    let response = ServiceResponse::success(request_id);
    metrics::record_request(method.as_str(), started);
    response
}

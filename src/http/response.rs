//! Response record and its wire form.
//!
//! # Responsibilities
//! - Build the fixed-shape success record
//! - Serialize it as JSON with a stable field order
//! - Attach `Content-Type` and the request ID header
//!
//! # Design Decisions
//! - Timestamps are UTC, RFC 3339, whole seconds
//! - Serialization failure maps to 500; the record as built cannot trigger it

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

use crate::http::request::{RequestId, X_UBER_REQUEST_ID};

pub const STATUS_SUCCESS: &str = "success";
pub const FAKE_DATA: &str = "fake-uber-data";

/// Body returned for every request. Field order is the JSON key order.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceResponse {
    pub request_id: RequestId,
    pub status: &'static str,
    pub data: &'static str,
    #[serde(serialize_with = "serialize_rfc3339")]
    pub timestamp: DateTime<Utc>,
}

impl ServiceResponse {
    pub fn success(request_id: RequestId) -> Self {
        Self {
            request_id,
            status: STATUS_SUCCESS,
            data: FAKE_DATA,
            timestamp: Utc::now(),
        }
    }
}

fn serialize_rfc3339<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Secs, true))
}

impl IntoResponse for ServiceResponse {
    fn into_response(self) -> Response {
        let body = match serde_json::to_vec(&self) {
            Ok(body) => body,
            Err(e) => {
                tracing::error!(request_id = %self.request_id, error = %e, "Failed to serialize response");
                return StatusCode::INTERNAL_SERVER_ERROR.into_response();
            }
        };

        let mut response = (
            StatusCode::OK,
            [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
            body,
        )
            .into_response();

        match self.request_id.header_value() {
            Some(value) => {
                response.headers_mut().insert(X_UBER_REQUEST_ID, value);
            }
            None => {
                tracing::warn!(request_id = %self.request_id, "Request ID is not a valid header value");
            }
        }

        response
    }
}

//! Request identification.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4) per request
//! - Expose it as the `X-Uber-Request-ID` correlation header
//!
//! # Design Decisions
//! - Request ID generated before anything else is done for the request
//! - IDs are opaque strings to callers

use std::fmt;

use axum::http::{HeaderName, HeaderValue};
use serde::Serialize;
use uuid::Uuid;

/// Correlation header carrying the request ID back to the caller.
pub const X_UBER_REQUEST_ID: HeaderName = HeaderName::from_static("x-uber-request-id");

/// Opaque per-request identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RequestId(String);

impl RequestId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Header form of the ID. `None` only if the ID holds non-visible ASCII,
    /// which generated IDs never do.
    pub fn header_value(&self) -> Option<HeaderValue> {
        HeaderValue::from_str(self.as_str()).ok()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generated_ids_are_unique() {
        let ids: HashSet<RequestId> = (0..10_000).map(|_| RequestId::generate()).collect();
        assert_eq!(ids.len(), 10_000);
    }

    #[test]
    fn test_id_is_hyphenated_uuid() {
        let id = RequestId::generate();
        let parsed = Uuid::parse_str(id.as_str()).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
        assert_eq!(id.as_str().len(), 36);
    }

    #[test]
    fn test_header_value_matches_id() {
        let id = RequestId::generate();
        let value = id.header_value().unwrap();
        assert_eq!(value.to_str().unwrap(), id.as_str());
        assert_eq!(X_UBER_REQUEST_ID.as_str(), "x-uber-request-id");
    }
}

//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → middleware/ (concurrency limit)
//!     → handler.rs (generate request ID, log, build record)
//!     → response.rs (serialize JSON, add headers)
//!     → Send to client
//! ```

pub mod handler;
pub mod middleware;
pub mod request;
pub mod response;
pub mod server;

pub use request::{RequestId, X_UBER_REQUEST_ID};
pub use response::ServiceResponse;
pub use server::{AppState, HttpServer};

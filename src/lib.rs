//! Fake Uber service.
//!
//! A minimal service skeleton: configuration, a logger and an inert
//! database handle are built in order, handed to a [`Service`] by
//! constructor injection, and a single catch-all HTTP handler answers every
//! request with a fixed-shape JSON record carrying a fresh request ID.
//!
//! # Architecture Overview
//!
//! ```text
//!     ┌────────────┐   ┌──────────┐   ┌────────────┐   ┌───────────┐
//!     │   config   │──▶│  logger  │──▶│  database  │──▶│  service  │
//!     │ TOML + CLI │   │ tracing  │   │   (inert)  │   │   start   │
//!     └────────────┘   └──────────┘   └────────────┘   └─────┬─────┘
//!                                                            │
//!     Client Request   ┌──────────────────────────────────┐  │
//!     ────────────────▶│ http: trace → limit → timeout    │◀─┘
//!                      │       → handler → JSON response  │
//!     ◀────────────────│  X-Uber-Request-ID + 200         │
//!     Client Response  └──────────────────────────────────┘
//! ```

pub mod config;
pub mod database;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod service;

pub use config::ServiceConfig;
pub use error::{Error, Result};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use service::Service;

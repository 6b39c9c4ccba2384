//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML) or built-in defaults
//!     → loader.rs (read, deserialize, apply CLI overrides)
//!     → validation.rs (semantic checks)
//!     → ServiceConfig (validated, immutable)
//!     → shared via Arc with the service and its collaborators
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; it is read at startup only
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - Collaborator-specific settings (log level, database) are checked by
//!   the collaborator that consumes them

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, resolve_config, ConfigError};
pub use schema::ServiceConfig;
pub use schema::{
    DatabaseConfig, ListenerConfig, LogFormat, ObservabilityConfig, ServiceSection, TimeoutConfig,
};
pub use validation::{parse_socket_addr, validate_config, ValidationError};

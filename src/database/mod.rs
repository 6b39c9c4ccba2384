//! Database handle.
//!
//! The service is wired with a database collaborator but never queries it.
//! Opening the handle validates settings only; no network I/O happens.

pub mod connection;

pub use connection::{Connection, DatabaseError};

//! Common error types for Todde

use thiserror::Error;

/// Common result type for Todde operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the Todde crates
///
/// Malformed visitor input (filters, pagination, financing figures) never
/// becomes an `Error`; it is dropped at the parsing boundary instead. These
/// variants cover storage, configuration and lookup failures only.
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation error (wraps sqlx::Error)
    #[cfg(feature = "sqlx")]
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Stored row holds a value outside its declared domain
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

//! Error types for the petmem decision layer.

use thiserror::Error;

/// Top-level error type for all petmem operations.
///
/// Note that the salience predicates and the predictor never return errors:
/// they are total over malformed input by contract. Errors only arise from
/// configuration loading and from the engine write path.
#[derive(Error, Debug)]
pub enum PetmemError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An engine write operation failed.
    #[error("Engine operation failed: {operation} for {category}/{key}: {message}")]
    Engine {
        /// Which engine operation failed.
        operation: String,
        /// Category of the record being mutated.
        category: String,
        /// Key of the record being mutated.
        key: String,
        /// Engine-reported failure detail.
        message: String,
    },

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, PetmemError>;

//! Error types for booklist
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using BookError
pub type Result<T> = std::result::Result<T, BookError>;

/// Unified error type for booklist operations
#[derive(Debug, Error)]
pub enum BookError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Argument Errors
    // -------------------------------------------------------------------------
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // -------------------------------------------------------------------------
    // Catalog Errors
    // -------------------------------------------------------------------------
    #[error("Catalog is empty, nothing to sort")]
    EmptyCollection,

    #[error("Unsupported operation: {0}")]
    Unsupported(&'static str),

    // -------------------------------------------------------------------------
    // Codec Errors
    // -------------------------------------------------------------------------
    /// A single malformed record. Recovered inside the storage layer and
    /// never returned from a bulk read.
    #[error("Malformed record: {0}")]
    Decode(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

//! Error types for langorder.
//!
//! This module defines the centralized error type [`LangorderError`] and a type
//! alias [`Result`] used throughout the crate. Errors are implemented with the
//! `thiserror` crate.
//!
//! Moving rows never produces an error: boundary moves are silent no-ops and
//! out-of-bounds selections are programming errors that panic inside
//! [`crate::reorder`]. The variants here cover the fallible edges around the
//! engine (storage, configuration, and selection construction).

use thiserror::Error;

/// The main error type for langorder operations.
///
/// # Examples
///
/// ```
/// use langorder::LangorderError;
///
/// fn read_store() -> Result<(), LangorderError> {
///     Err(LangorderError::Storage("Failed to read file".to_string()))
/// }
/// assert!(read_store().is_err());
/// ```
#[derive(Debug, Error)]
pub enum LangorderError {
    /// Reading or writing the preference store failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Selection ranges are unsorted, overlapping, or outside the sequence.
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),
}

/// A specialized `Result` type for langorder operations.
pub type Result<T> = std::result::Result<T, LangorderError>;

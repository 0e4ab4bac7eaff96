//! Errors
//!
//! Custom error types used throughout the `arbol` crate.
use thiserror::Error;

/// Errors that can occur when saving or loading tree models.
#[derive(Debug, Error)]
pub enum ArbolError {
    /// Unable to write model to file.
    #[error("Unable to write model to file: {0}")]
    UnableToWrite(String),
    /// Unable to read model from file.
    #[error("Unable to read model from a file {0}")]
    UnableToRead(String),
}

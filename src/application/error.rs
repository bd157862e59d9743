//! Application-level errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a load or a configuration lookup.
///
/// Structural problems in individual definition files are not represented
/// here: they are recovered where they occur (see [`crate::domain::DomainError`]).
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("I/O error: {context}: {}", .path.display())]
    Io {
        context: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config error: {message}")]
    Config { message: String },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

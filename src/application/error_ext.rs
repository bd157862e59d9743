//! Error conversion helpers for common I/O operations
//!
//! Provides extension traits for cleaner error handling with path context.

use std::io;
use std::path::Path;

use crate::application::{ApplicationError, ApplicationResult};

/// Extension trait for converting `io::Result` to `ApplicationResult` with context.
pub trait IoResultExt<T> {
    /// Add path context to an I/O error.
    ///
    /// # Example
    /// ```ignore
    /// fs.read_to_string(&file)
    ///     .with_path_context("read definition file", &file)?;
    /// ```
    fn with_path_context(self, action: &str, path: &Path) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_path_context(self, action: &str, path: &Path) -> ApplicationResult<T> {
        self.map_err(|source| ApplicationError::Io {
            context: action.to_string(),
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_io_error_when_adding_context_then_message_names_path() {
        let result: io::Result<()> = Err(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "denied",
        ));

        let err = result
            .with_path_context("read definition file", Path::new("/conf/oids_common.xml"))
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "I/O error: read definition file: /conf/oids_common.xml"
        );
        assert!(std::error::Error::source(&err).is_some());
    }
}

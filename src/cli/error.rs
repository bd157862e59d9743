//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    Usage(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::NotFound(_) => crate::exitcode::DATAERR,
            CliError::Application(e) => match e {
                ApplicationError::Io { .. } => crate::exitcode::IOERR,
                ApplicationError::Config { .. } => crate::exitcode::CONFIG,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn given_errors_when_mapping_then_sysexits_codes() {
        let io = CliError::from(ApplicationError::Io {
            context: "read".into(),
            path: PathBuf::from("/x"),
            source: std::io::Error::new(std::io::ErrorKind::Other, "boom"),
        });
        let config = CliError::from(ApplicationError::Config {
            message: "bad".into(),
        });

        assert_eq!(io.exit_code(), crate::exitcode::IOERR);
        assert_eq!(config.exit_code(), crate::exitcode::CONFIG);
        assert_eq!(CliError::NotFound("1.2".into()).exit_code(), crate::exitcode::DATAERR);
        assert_eq!(CliError::Usage("no".into()).exit_code(), crate::exitcode::USAGE);
    }
}

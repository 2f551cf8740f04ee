//! CLI-level errors (wraps library errors)

use std::path::PathBuf;

use thiserror::Error;

use crate::errors::TreeError;
use crate::exitcode;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Tree(#[from] TreeError),

    #[error("Cannot open {path}: {source}")]
    OpenInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Failed to render config: {0}")]
    ConfigFormat(#[from] toml::ser::Error),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::OpenInput { .. } => exitcode::NOINPUT,
            CliError::Config(_) | CliError::ConfigFormat(_) => exitcode::CONFIG,
            CliError::Tree(e) => match e {
                TreeError::Io(_) => exitcode::IOERR,
                TreeError::Internal(_) => exitcode::SOFTWARE,
                _ => exitcode::DATAERR,
            },
        }
    }
}

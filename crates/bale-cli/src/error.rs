//! Error handling for the bale CLI.
//!
//! Configuration failures keep their own diagnostics (code and help text);
//! everything else is wrapped with a short message.

use bale_config::ConfigError;
use miette::Diagnostic;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

/// Top-level CLI error type.
#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    /// Loading, validating or resolving the configuration failed
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    /// The plan could not be serialized
    #[error("failed to serialize build plan: {0}")]
    #[diagnostic(code(bale::cli::serialize))]
    Serialize(#[from] serde_json::Error),

    /// I/O failure outside configuration loading
    #[error("I/O error: {0}")]
    #[diagnostic(code(bale::io))]
    Io(#[from] std::io::Error),
}

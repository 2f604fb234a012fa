//! Error types for configuration loading, validation and plan resolution.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Every way a build configuration can fail to resolve.
///
/// All variants are fatal for the current invocation and carry the offending
/// fragment of the configuration (entry name, path or pattern).
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    // Entry errors
    #[error("duplicate entry `{name}`")]
    #[diagnostic(
        code(bale::config::duplicate_entry),
        help("Entry names must be unique within a configuration")
    )]
    DuplicateEntry { name: String },

    #[error("entry `{name}` source not found: {}", .path.display())]
    #[diagnostic(code(bale::config::entry_not_found))]
    EntryNotFound { name: String, path: PathBuf },

    #[error("no entries specified")]
    #[diagnostic(
        code(bale::config::no_entries),
        help("Add at least one entry under [bundle.entries]")
    )]
    NoEntries,

    // Filesystem validation errors
    #[error("template not found: {}", .path.display())]
    #[diagnostic(code(bale::config::template_not_found))]
    TemplateNotFound { path: PathBuf },

    // Pattern and output errors
    #[error("invalid pattern `{pattern}`: {message}")]
    #[diagnostic(
        code(bale::config::invalid_pattern),
        help("Patterns use Rust regex syntax; look-around is not supported, use `unless` instead")
    )]
    InvalidPattern { pattern: String, message: String },

    #[error("output `{filename}` is produced by both `{first}` and `{second}`")]
    #[diagnostic(
        code(bale::config::output_collision),
        help("Include the `[name]` placeholder in the filename template")
    )]
    OutputCollision {
        filename: String,
        first: String,
        second: String,
    },

    // Schema validation errors (no filesystem checks)
    #[error("schema validation failed: {message}")]
    #[diagnostic(code(bale::config::schema))]
    SchemaValidation {
        message: String,
        #[help]
        hint: Option<String>,
    },

    // Config parsing/loading errors
    #[error("config not found")]
    #[diagnostic(
        code(bale::config::not_found),
        help("Create a bale.toml or add a \"bale\" field to package.json")
    )]
    NotFound,

    #[error("invalid config value for `{field}`")]
    #[diagnostic(code(bale::config::invalid_value))]
    InvalidValue {
        field: String,
        #[help]
        hint: Option<String>,
    },

    #[error("invalid profile override: {message}")]
    #[diagnostic(code(bale::config::profile))]
    InvalidProfileOverride { message: String },

    // I/O errors
    #[error("I/O error: {0}")]
    #[diagnostic(code(bale::io))]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    pub(crate) fn invalid_value(field: &str, hint: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.to_string(),
            hint: Some(hint.into()),
        }
    }
}

//! bale CLI - resolve front-end build configuration into a build plan.
//!
//! The CLI is organized into several key modules:
//!
//! - [`cli`] - argument definitions
//! - [`commands`] - `plan`, `check` and `match` implementations
//! - [`error`] - CLI error type with miette diagnostics
//! - [`logger`] - structured logging with tracing
//! - [`ui`] - status messages on stderr

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result};

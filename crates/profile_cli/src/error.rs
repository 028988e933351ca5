//! CLI error type and result alias.

use thiserror::Error;

use profile_core::functions::FunctionError;
use profile_core::settings::SettingsError;

/// Errors surfaced by the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// An argument combination the parser cannot reject on its own.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Plot settings failed validation.
    #[error("Invalid settings: {0}")]
    Settings(#[from] SettingsError),

    /// A built-in function rejected its parameters.
    #[error("Invalid function parameters: {0}")]
    Function(#[from] FunctionError),

    /// Writing the figure failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialising the figure failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used throughout the CLI.
pub type Result<T> = std::result::Result<T, CliError>;

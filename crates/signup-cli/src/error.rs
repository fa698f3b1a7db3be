//! Error types for the command-line driver.

use std::path::PathBuf;

/// Errors that can occur while loading or replaying an event script.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    /// IO error reading the script.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A script line is not a valid event.
    #[error("Failed to parse event on line {line} of '{path}': {source}")]
    Parse {
        /// Path to the script file.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// Form error while building or rendering the form.
    #[error("Form error: {0}")]
    Form(#[from] signup_forms::FormError),
}

/// Result type for script operations.
pub type Result<T> = std::result::Result<T, ScriptError>;

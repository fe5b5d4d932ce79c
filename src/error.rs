//! Error types for the patchsub CLI.
//!
//! Uses thiserror for derive macros. Every failure is fatal for the run;
//! there is no skip-and-continue mode.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for patchsub operations.
#[derive(Error, Debug)]
pub enum PatchsubError {
    /// User provided invalid arguments or an invalid rules file.
    #[error("{0}")]
    UserError(String),

    /// A patch file could not be read.
    #[error("Failed to read input: {0}")]
    InputError(String),

    /// A rewritten artifact could not be written.
    #[error("Failed to write output: {0}")]
    OutputError(String),

    /// Git operation failed.
    #[error("Git operation failed: {0}")]
    GitError(String),
}

impl PatchsubError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PatchsubError::UserError(_) => exit_codes::USER_ERROR,
            PatchsubError::InputError(_) => exit_codes::INPUT_FAILURE,
            PatchsubError::OutputError(_) => exit_codes::OUTPUT_FAILURE,
            PatchsubError::GitError(_) => exit_codes::GIT_FAILURE,
        }
    }
}

/// Result type alias for patchsub operations.
pub type Result<T> = std::result::Result<T, PatchsubError>;

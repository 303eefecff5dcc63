//! Error types for the launcher
//!
//! Uses `thiserror` for library errors; the binary layer wraps these with
//! `anyhow` and maps each kind to a process exit code.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for launcher operations
pub type LaunchResult<T> = Result<T, LaunchError>;

/// Main error type for launcher operations
#[derive(Error, Debug)]
pub enum LaunchError {
    /// No usable Python interpreter could be resolved
    #[error("python interpreter not found{}", candidates_note(.candidates))]
    PythonNotFound { candidates: Vec<String> },

    /// `python -m venv` exited nonzero
    #[error("failed to create virtual environment at {dir}: {message}")]
    VenvCreate { dir: PathBuf, message: String },

    /// `pip install` exited nonzero
    #[error("dependency installation failed: {message}")]
    Install { message: String },

    /// Dependency manifest is missing
    #[error("dependency manifest not found: {path}")]
    ManifestMissing { path: PathBuf },

    /// Application entry file is missing
    #[error("application entry file not found: {path}")]
    AppMissing { path: PathBuf },

    /// Setup lock could not be acquired
    #[error("could not acquire setup lock at {path}: {message}")]
    Lock { path: PathBuf, message: String },

    /// Invalid launcher configuration
    #[error("invalid configuration in {path}: {message}")]
    InvalidConfig { path: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn candidates_note(candidates: &[String]) -> String {
    if candidates.is_empty() {
        String::new()
    } else {
        format!(" (tried: {})", candidates.join(", "))
    }
}

impl LaunchError {
    /// Process exit code for this failure kind.
    ///
    /// Normalized so operators and CI can tell the three distinguished
    /// failures apart instead of inheriting whichever status the failing
    /// command happened to exit with.
    pub fn exit_code(&self) -> i32 {
        match self {
            LaunchError::PythonNotFound { .. } => 2,
            LaunchError::VenvCreate { .. } => 3,
            LaunchError::Install { .. } => 4,
            _ => 1,
        }
    }
}

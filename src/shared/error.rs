use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Missing restore output is an application error, so scripts can tell it
/// apart from a usage mistake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - every requested hierarchy was rendered
    Success = 0,
    /// Application error (assets file not found, file I/O error, cancellation, etc.)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for dependency hierarchy display.
///
/// Only conditions where no graph (not even an empty one) can be shown are
/// represented here. An unreadable or corrupt assets file is not an error.
#[derive(Debug, Error)]
pub enum HierarchyError {
    #[error("Path {path} not found.\n\n💡 Hint: {suggestion}")]
    AssetsNotFound { path: PathBuf, suggestion: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid project directory or .csproj file")]
    InvalidProjectPath { path: PathBuf, reason: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Reading {path} was cancelled")]
    Cancelled { path: PathBuf },

    /// Validation error for configuration and request values
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl HierarchyError {
    /// Builds the not-found error with the standard restore hint
    pub fn assets_not_found(path: PathBuf) -> Self {
        HierarchyError::AssetsNotFound {
            path,
            suggestion: "Try restoring the project first using Visual Studio or 'dotnet restore'."
                .to_string(),
        }
    }
}

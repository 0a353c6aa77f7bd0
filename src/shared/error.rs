use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (login failure, HTTP error, nothing to export, file I/O error, etc.)
    ApplicationError = 3,
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
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for inspection queries and exports.
///
/// Every variant is fatal for the current fetch/enrich/export cycle.
/// Empty results are never reported through this type.
#[derive(Debug, Error)]
pub enum InspectError {
    #[error("Login failed: {message}\n\n💡 Hint: Check the company code, user key and password")]
    AuthenticationFailed { message: String },

    #[error("Request to {url} failed with HTTP status {status}\nResponse: {body_head}")]
    HttpStatus {
        url: String,
        status: u16,
        body_head: String,
    },

    #[error("Request to {url} could not be completed\nDetails: {details}\n\n💡 Hint: Check the network connection and the configured base_url")]
    Transport { url: String, details: String },

    #[error("Response from {url} is not valid JSON\nDetails: {details}")]
    InvalidResponse { url: String, details: String },

    #[error("No inspection records to export for {from} ~ {to}\n\n💡 Hint: Adjust the date range or the filters")]
    NothingToExport { from: String, to: String },

    #[error("Invalid date range: {from} is after {to}")]
    InvalidDateRange { from: String, to: String },

    #[error("Missing credential: {field}\n\n💡 Hint: Pass it on the command line, in the config file or via QF_PASSWORD")]
    MissingCredentials { field: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for requests and configuration
    #[error("Validation error: {message}")]
    Validation { message: String },
}

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Configuration problems and index problems map to different codes so
/// scripts can tell "fix your config" apart from "the repository is broken".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - report produced
    Success = 0,
    /// Unexpected failure (output could not be written, etc.)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// The CSV configuration is missing, malformed or invalid
    ConfigurationError = 3,
    /// The index could not be fetched or decoded, or the package is unknown
    IndexError = 4,
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
            ExitCode::ConfigurationError => write!(f, "Configuration Error (3)"),
            ExitCode::IndexError => write!(f, "Index Error (4)"),
        }
    }
}

/// Application-specific errors for dependency resolution.
///
/// Every variant is terminal for the invocation; `main` maps it to an
/// [`ExitCode`] with [`ApkError::exit_code`].
#[derive(Debug, Error)]
pub enum ApkError {
    #[error("Configuration error:\n{details}\n\n💡 Hint: The config must be a CSV file with the header package_name,repo_url_or_path,repo_mode,ascii_tree,filter_substring and exactly one row")]
    ConfigError { details: String },

    #[error("Failed to fetch APKINDEX from {location}\nDetails: {details}\n\n💡 Hint: {hint}")]
    FetchError {
        location: String,
        details: String,
        hint: String,
    },

    #[error("Index file not found: {path}\n\n💡 Hint: Point repo_url_or_path at an existing APKINDEX or APKINDEX.tar.gz file, or at the directory containing it")]
    IndexFileNotFound { path: PathBuf },

    #[error("Failed to decode APKINDEX: {details}\n\n💡 Hint: Verify that the archive is a valid APKINDEX.tar.gz")]
    DecodeError { details: String },

    #[error("Package '{package}' not found in the index\n\n💡 Hint: Check the package_name spelling and that the repository contains it")]
    PackageNotFound { package: String },

    #[error("Failed to write report to {path}\nDetails: {details}\n\n💡 Hint: Check that the output directory exists and is writable")]
    FileWriteError { path: PathBuf, details: String },
}

impl ApkError {
    /// Exit code the CLI uses when this error terminates the run
    pub fn exit_code(&self) -> ExitCode {
        match self {
            ApkError::ConfigError { .. } => ExitCode::ConfigurationError,
            ApkError::FetchError { .. }
            | ApkError::IndexFileNotFound { .. }
            | ApkError::DecodeError { .. }
            | ApkError::PackageNotFound { .. } => ExitCode::IndexError,
            ApkError::FileWriteError { .. } => ExitCode::ApplicationError,
        }
    }
}

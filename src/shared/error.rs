use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// CI pipelines gate on these: `1` means the scan itself worked but the
/// policy rejected at least one component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Scan completed without error-severity violations (or failing was disabled)
    Success = 0,
    /// One or more error-severity policy violations were found
    ViolationsDetected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (unreadable SBOM, invalid policy, file I/O error, etc.)
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
            ExitCode::ViolationsDetected => write!(f, "Policy Violations Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for SBOM policy evaluation.
#[derive(Debug, Error)]
pub enum ClearbomError {
    #[error("SBOM file not found: {path}\n\n💡 Hint: {suggestion}")]
    SbomNotFound { path: PathBuf, suggestion: String },

    #[error("Malformed SBOM document: {path}\nDetails: {details}\n\n💡 Hint: The SBOM must be a CycloneDX JSON document whose 'components' entries each carry a 'name'")]
    MalformedSbom { path: PathBuf, details: String },

    #[error("Invalid policy file: {path}\nDetails: {details}\n\n💡 Hint: Check the policy against the documented schema (version, licenses.allow/warn/deny, licenses.unknown_action, components.exclude)")]
    InvalidPolicy { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    /// Validation error for builder patterns
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl ClearbomError {
    /// Re-attributes a document-level error to the file it came from.
    ///
    /// Parsers work on in-memory text and report an empty path; readers
    /// call this once they know where the text was loaded from.
    pub fn with_path(self, source_path: PathBuf) -> Self {
        match self {
            ClearbomError::MalformedSbom { details, .. } => ClearbomError::MalformedSbom {
                path: source_path,
                details,
            },
            ClearbomError::InvalidPolicy { details, .. } => ClearbomError::InvalidPolicy {
                path: source_path,
                details,
            },
            other => other,
        }
    }
}

//! Custom error types for the application
use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum ReportError {
    SourceUnavailable(PathBuf),
    EmptySource(PathBuf),
    ReadFailure(std::io::Error),
    WriteFailure(std::io::Error),
    InvalidArgument(String),
    SerdeJsonError(serde_json::Error),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ReportError::SourceUnavailable(path) => write!(
                f,
                "'{}' not found or not readable. Ensure you are running on a Linux system with appropriate permissions.",
                path.display()
            ),
            ReportError::EmptySource(path) => {
                write!(f, "No data received from '{}'", path.display())
            }
            ReportError::ReadFailure(e) => write!(f, "Failed to read statistics source: {}", e),
            ReportError::WriteFailure(e) => write!(f, "Failed to write report: {}", e),
            ReportError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            ReportError::SerdeJsonError(e) => write!(f, "JSON error: {}", e),
        }
    }
}

impl std::error::Error for ReportError {}

impl From<serde_json::Error> for ReportError {
    fn from(error: serde_json::Error) -> Self {
        ReportError::SerdeJsonError(error)
    }
}

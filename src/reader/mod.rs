//! Acquisition of the raw socket statistics text
use crate::error::ReportError;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Handle on the statistics source. Holds only the path; the file is read in
/// one operation and never cached.
pub struct SockstatSource {
    path: PathBuf,
}

impl SockstatSource {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// Check that the source exists and can be opened, before any read or
    /// parse work is attempted.
    pub fn preflight(&self) -> Result<(), ReportError> {
        File::open(&self.path)
            .map(drop)
            .map_err(|_| ReportError::SourceUnavailable(self.path.clone()))
    }

    /// Read the entire source as text in one operation.
    ///
    /// Content that is empty after trimming is an error: the kernel record
    /// always carries at least the `sockets:` line, so an empty read means
    /// the source is not delivering data.
    pub fn read(&self) -> Result<String, ReportError> {
        let raw = fs::read_to_string(&self.path).map_err(ReportError::ReadFailure)?;
        if raw.trim().is_empty() {
            return Err(ReportError::EmptySource(self.path.clone()));
        }
        Ok(raw)
    }
}

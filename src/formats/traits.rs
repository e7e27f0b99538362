//! Output format traits for the socket statistics summary tool
use crate::error::ReportError;
use std::io::Write;

/// Trait for output formatters. The input is the raw statistics text; each
/// formatter decides whether parsing is needed at all.
pub trait OutputFormatter: Send + Sync {
    fn format_report(&self, raw: &str) -> Result<String, ReportError>;
}

/// Enum for output format types
#[derive(Debug, Clone, PartialEq)]
pub enum OutputFormat {
    Raw,
    Json,
}

/// Enum for output destination
#[derive(Debug, Clone)]
pub enum OutputDestination {
    Stdout,
    File(std::path::PathBuf),
}

/// Output writer that combines format and destination
pub struct OutputWriter {
    formatter: Box<dyn OutputFormatter>,
    destination: OutputDestination,
}

impl OutputWriter {
    /// Create a new output writer
    pub fn new(format: OutputFormat, destination: OutputDestination) -> Self {
        let formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Raw => Box::new(crate::formats::raw::RawFormatter),
            OutputFormat::Json => Box::new(crate::formats::json::JsonFormatter),
        };

        Self {
            formatter,
            destination,
        }
    }

    /// Format the raw statistics text and write it to the configured
    /// destination. Stdout gets the content verbatim, without an extra
    /// trailing newline, so raw mode stays byte-identical to the source.
    pub fn write_report(&self, raw: &str) -> Result<(), ReportError> {
        let content = self.formatter.format_report(raw)?;

        match &self.destination {
            OutputDestination::Stdout => {
                let mut stdout = std::io::stdout();
                stdout
                    .write_all(content.as_bytes())
                    .and_then(|_| stdout.flush())
                    .map_err(ReportError::WriteFailure)?;
            }
            OutputDestination::File(path) => {
                std::fs::write(path, content).map_err(ReportError::WriteFailure)?;
            }
        }

        Ok(())
    }
}

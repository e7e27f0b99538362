//! Raw pass-through formatter
use crate::error::ReportError;
use crate::formats::traits::OutputFormatter;

/// Emits the source text unchanged. The parser never runs in this mode.
pub struct RawFormatter;

impl OutputFormatter for RawFormatter {
    fn format_report(&self, raw: &str) -> Result<String, ReportError> {
        Ok(raw.to_string())
    }
}

//! JSON output formatter for the socket statistics summary tool
use crate::error::ReportError;
use crate::formats::traits::OutputFormatter;
use crate::sockstat;

/// JSON formatter: parses the raw text and serializes the report into the
/// fixed nested shape. Exactly one serialization routine, no fallback path.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, raw: &str) -> Result<String, ReportError> {
        let report = sockstat::parse(raw);
        let mut json = serde_json::to_string_pretty(&report)?;
        json.push('\n');
        Ok(json)
    }
}

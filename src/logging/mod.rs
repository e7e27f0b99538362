//! Leveled logging backend for the socket statistics summary tool
//!
//! Log lines follow the `YYYY-MM-DD HH:MM:SS - LEVEL - message` layout.
//! ERROR records go to standard error; every other level goes to standard
//! output, so structured output and narration share the stream the same way
//! on every run.
use crate::error::ReportError;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

/// Log levels accepted by `--log-level`, matched case-sensitively.
const LEVEL_NAMES: [(&str, LevelFilter); 4] = [
    ("DEBUG", LevelFilter::Debug),
    ("INFO", LevelFilter::Info),
    ("WARNING", LevelFilter::Warn),
    ("ERROR", LevelFilter::Error),
];

/// Parse a `--log-level` value into a threshold.
pub fn threshold_from_arg(value: &str) -> Result<LevelFilter, ReportError> {
    LEVEL_NAMES
        .iter()
        .find(|(name, _)| *name == value)
        .map(|(_, filter)| *filter)
        .ok_or_else(|| ReportError::InvalidArgument(format!("invalid LOG_LEVEL: {}", value)))
}

struct SummaryLogger;

static LOGGER: SummaryLogger = SummaryLogger;

impl log::Log for SummaryLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        // Threshold filtering is done globally via log::set_max_level.
        true
    }

    fn log(&self, record: &Record) {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        let level = match record.level() {
            Level::Error => "ERROR",
            Level::Warn => "WARNING",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Trace => "TRACE",
        };
        let line = format!("{} - {} - {}", timestamp, level, record.args());
        if record.level() == Level::Error {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }

    fn flush(&self) {}
}

/// Install the logger with the given threshold. Must be called once, before
/// any log macro fires.
pub fn init(threshold: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(threshold);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_parsing() {
        assert_eq!(threshold_from_arg("DEBUG").unwrap(), LevelFilter::Debug);
        assert_eq!(threshold_from_arg("INFO").unwrap(), LevelFilter::Info);
        assert_eq!(threshold_from_arg("WARNING").unwrap(), LevelFilter::Warn);
        assert_eq!(threshold_from_arg("ERROR").unwrap(), LevelFilter::Error);
    }

    #[test]
    fn test_threshold_is_case_sensitive() {
        assert!(threshold_from_arg("debug").is_err());
        assert!(threshold_from_arg("Warning").is_err());
    }

    #[test]
    fn test_unknown_threshold_is_rejected() {
        let err = threshold_from_arg("VERBOSE").unwrap_err();
        assert!(err.to_string().contains("VERBOSE"));
    }
}

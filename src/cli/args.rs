//! Command-line argument parsing for the socket statistics summary tool
use clap::Parser;
use std::path::PathBuf;

/// Path of the kernel's socket statistics record.
pub const DEFAULT_SOCKSTAT_PATH: &str = "/proc/net/sockstat";

#[derive(Parser)]
#[command(name = "socksum")]
#[command(about = "Socket Statistics Summary Tool", long_about = None)]
pub struct Cli {
    /// Output socket summary in JSON format
    #[arg(long)]
    pub json: bool,

    /// Set log level (DEBUG, INFO, WARNING, ERROR)
    #[arg(long, value_name = "LEVEL", default_value = "INFO")]
    pub log_level: String,

    /// Statistics source to read (defaults to the live kernel record)
    #[arg(long, value_name = "FILE", default_value = DEFAULT_SOCKSTAT_PATH)]
    pub source: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Immutable run configuration, built once from the parsed arguments.
pub struct ReportConfig {
    pub source: PathBuf,
    pub json: bool,
    pub output: Option<PathBuf>,
}

impl ReportConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            source: cli.source.clone(),
            json: cli.json,
            output: cli.output.clone(),
        }
    }
}

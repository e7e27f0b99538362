//! Main entry point for the socket statistics summary tool
use clap::error::ErrorKind;
use clap::Parser;
use log::{debug, error, info, LevelFilter};
use std::process;
use std::time::Instant;

use socksum::cli::args::{Cli, ReportConfig};
use socksum::error::ReportError;
use socksum::formats::traits::{OutputDestination, OutputFormat, OutputWriter};
use socksum::logging;
use socksum::reader::SockstatSource;

fn main() {
    // Parse command-line arguments. --help renders through clap and exits 0;
    // unknown flags and missing values print usage and exit 1.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = err.print();
            process::exit(code);
        }
    };

    // An unrecognized level falls back to INFO with a warning, never fatally.
    // The logger is not installed yet, so the warning goes straight to stderr.
    let threshold = match logging::threshold_from_arg(&cli.log_level) {
        Ok(threshold) => threshold,
        Err(err) => {
            eprintln!("Warning: {}. Using default: INFO", err);
            LevelFilter::Info
        }
    };
    if logging::init(threshold).is_err() {
        eprintln!("Warning: logger already installed, continuing");
    }

    let config = ReportConfig::from_cli(&cli);
    if let Err(err) = run(&config) {
        error!("{}", err);
        process::exit(1);
    }
}

/// Read, format and emit one socket statistics snapshot.
fn run(config: &ReportConfig) -> Result<(), ReportError> {
    info!("Welcome to the Socket Summary Analyzer");

    let source = SockstatSource::new(&config.source);
    source.preflight()?;

    info!(
        "Reading socket statistics from {}...",
        config.source.display()
    );
    let started = Instant::now();
    let raw = source.read()?;
    info!(
        "Success! Retrieved socket summary in {:.4}s.",
        started.elapsed().as_secs_f64()
    );
    debug!(
        "Read {} bytes from {}",
        raw.len(),
        config.source.display()
    );

    let format = if config.json {
        OutputFormat::Json
    } else {
        OutputFormat::Raw
    };
    let destination = match &config.output {
        Some(path) => OutputDestination::File(path.clone()),
        None => OutputDestination::Stdout,
    };

    OutputWriter::new(format, destination).write_report(&raw)
}

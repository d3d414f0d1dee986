//! # siteversion CLI entry point
//!
//! Parses arguments, initialises tracing, and runs the versions check.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use siteversion_cli::validate::{run_validate, ValidateArgs};

/// Check that versions/config.json matches the version directories on disk.
///
/// Every declared version needs a directory, a content/ folder, and the
/// required content files. Missing syllabus.pdf or demos/ are warnings.
#[derive(Parser, Debug)]
#[command(name = "siteversion", version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging on stderr. Repeat for more (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(flatten)]
    validate: ValidateArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run_validate(&cli.validate) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

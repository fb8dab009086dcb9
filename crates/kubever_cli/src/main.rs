//! kubever CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error
//! - 2: Invalid arguments
//! - 3: Invalid API version

use std::process::ExitCode;

use clap::Parser;
use kubever_core::{GroupVersionError, ParseError};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;

use commands::{Cli, Commands};

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_ARGS: u8 = 2;
    pub const INVALID_VERSION: u8 = 3;
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let format = cli.format;
    let result = match cli.command {
        Commands::Parse(args) => commands::parse::execute(args, format),
        Commands::Compare(args) => commands::compare::execute(args, format),
        Commands::Sort(args) => commands::sort::execute(args, format),
        Commands::Latest(args) => commands::latest::execute(args, format),
    };

    match result {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(categorize_error(&e))
        }
    }
}

/// Log to stderr so stdout carries only command output.
///
/// `-v`/`-q` take precedence over `RUST_LOG`, which replaces the default
/// filter when set.
fn init_logging(verbose: bool, quiet: bool) {
    let filter = log_filter(verbose, quiet, EnvFilter::try_from_default_env().ok());

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .try_init();
}

fn log_filter(verbose: bool, quiet: bool, from_env: Option<EnvFilter>) -> EnvFilter {
    if quiet {
        return EnvFilter::new("error");
    }
    let crate_level = if verbose {
        "debug"
    } else if let Some(filter) = from_env {
        return filter;
    } else {
        "info"
    };

    EnvFilter::new(format!("warn,{}={}", env!("CARGO_CRATE_NAME"), crate_level))
}

/// Categorize error to determine exit code
fn categorize_error(e: &anyhow::Error) -> u8 {
    let invalid_version = e
        .chain()
        .any(|cause| cause.is::<ParseError>() || cause.is::<GroupVersionError>());

    if invalid_version {
        ExitCodes::INVALID_VERSION
    } else if e.chain().any(|cause| cause.is::<commands::input::InputError>()) {
        ExitCodes::INVALID_ARGS
    } else {
        ExitCodes::GENERAL_ERROR
    }
}

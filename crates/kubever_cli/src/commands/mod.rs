//! CLI command definitions.
//!
//! Each subcommand is a thin wrapper over `kubever_core`.

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

pub mod compare;
pub mod input;
pub mod latest;
pub mod parse;
pub mod sort;

/// kubever - Kubernetes API version tool
#[derive(Parser)]
#[command(name = "kubever")]
#[command(version, about = "kubever - parse and order Kubernetes API versions")]
#[command(long_about = r#"
kubever parses Kubernetes API version identifiers (v1, v2beta1, v5alpha2)
and orders them the way Kubernetes promotes an API: the major version
dominates, then alpha < beta < stable, then the pre-release number.

COMMANDS:
  parse    → Show the structure of one or more versions
  compare  → Compare two versions
  sort     → Sort versions ascending
  latest   → Print the greatest version

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments
  3 - Invalid API version
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output format
    #[arg(long, global = true, value_enum, env = "KUBEVER_FORMAT", default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the structure of API versions (optionally group-qualified)
    Parse(parse::ParseArgs),

    /// Compare two API versions
    Compare(compare::CompareArgs),

    /// Sort API versions ascending
    Sort(sort::SortArgs),

    /// Print the greatest API version
    Latest(latest::LatestArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Print a value as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

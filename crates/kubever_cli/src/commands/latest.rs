//! Latest command - Print the greatest API version.

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use kubever_core::{latest, latest_stable, parse_all};

use super::input::VersionInput;
use super::{print_json, OutputFormat};

#[derive(Args)]
pub struct LatestArgs {
    #[command(flatten)]
    input: VersionInput,

    /// Only consider stable versions
    #[arg(long)]
    stable: bool,
}

pub fn execute(args: LatestArgs, format: OutputFormat) -> Result<()> {
    let versions = parse_all(args.input.collect()?)?;
    debug!("Choosing latest of {} versions", versions.len());

    let chosen = if args.stable {
        latest_stable(&versions).context("No stable version found")?
    } else {
        latest(&versions).context("No versions given")?
    };

    match format {
        OutputFormat::Json => print_json(chosen)?,
        OutputFormat::Text => println!("{}", chosen),
    }

    Ok(())
}

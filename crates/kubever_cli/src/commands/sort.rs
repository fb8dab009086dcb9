//! Sort command - Sort API versions ascending.

use anyhow::{Context, Result};
use clap::Args;
use tracing::{info, warn};

use kubever_core::{parse_all, parse_lenient, SortedVersions};

use super::input::VersionInput;
use super::{print_json, OutputFormat};

#[derive(Args)]
pub struct SortArgs {
    #[command(flatten)]
    input: VersionInput,

    /// Sort descending
    #[arg(short, long)]
    reverse: bool,

    /// Report invalid versions as warnings instead of failing
    #[arg(long)]
    skip_invalid: bool,
}

/// Sort the inputs, honouring `--skip-invalid` and `--reverse`.
pub(crate) fn sort_inputs(
    inputs: &[String],
    skip_invalid: bool,
    reverse: bool,
) -> Result<SortedVersions> {
    let mut result = if skip_invalid {
        let result = parse_lenient(inputs);
        if !result.is_clean() {
            for err in &result.rejected {
                warn!("Skipping {}", err);
            }
            warn!(
                "{} of {} versions were invalid",
                result.rejected.len(),
                inputs.len()
            );
        }
        result
    } else {
        SortedVersions {
            versions: parse_all(inputs).context("Failed to sort versions")?,
            rejected: Vec::new(),
        }
    };

    if reverse {
        result.versions.reverse();
    }
    Ok(result)
}

pub fn execute(args: SortArgs, format: OutputFormat) -> Result<()> {
    let inputs = args.input.collect()?;
    info!("Sorting {} versions", inputs.len());

    let result = sort_inputs(&inputs, args.skip_invalid, args.reverse)?;

    match format {
        OutputFormat::Json => print_json(&result)?,
        OutputFormat::Text => {
            for version in &result.versions {
                println!("{}", version);
            }
        }
    }

    Ok(())
}

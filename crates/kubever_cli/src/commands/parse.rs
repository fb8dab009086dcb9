//! Parse command - Show the structure of API versions.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tracing::debug;

use kubever_core::{GroupVersion, Stability};

use super::{print_json, OutputFormat};

#[derive(Args)]
pub struct ParseArgs {
    /// Versions to parse, e.g. `v1beta1` or `apps/v1`
    #[arg(required = true)]
    versions: Vec<String>,
}

#[derive(Debug, Serialize)]
struct VersionReport {
    input: String,
    group: Option<String>,
    major: u64,
    stability: Stability,
    pre_release: Option<u64>,
    canonical: String,
}

impl VersionReport {
    fn new(input: &str, gv: &GroupVersion) -> Self {
        let version = gv.version();
        Self {
            input: input.to_string(),
            group: gv.group().map(str::to_string),
            major: version.major(),
            stability: version.stability(),
            pre_release: version.pre_release(),
            canonical: gv.to_string(),
        }
    }
}

pub fn execute(args: ParseArgs, format: OutputFormat) -> Result<()> {
    let reports = args
        .versions
        .iter()
        .map(|input| {
            let gv = GroupVersion::parse(input)?;
            debug!("Parsed {} as {:?}", input, gv);
            Ok(VersionReport::new(input, &gv))
        })
        .collect::<Result<Vec<_>>>()?;

    match format {
        OutputFormat::Json => print_json(&reports)?,
        OutputFormat::Text => {
            for report in &reports {
                let pre_release = report
                    .pre_release
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "{}\tgroup={}\tmajor={}\tstability={}\tpre_release={}",
                    report.canonical,
                    report.group.as_deref().unwrap_or("core"),
                    report.major,
                    report.stability,
                    pre_release,
                );
            }
        }
    }

    Ok(())
}

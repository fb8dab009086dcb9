//! Compare command - Compare two API versions.

use std::cmp::Ordering;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use kubever_core::{compare, ApiVersion};

use super::{print_json, OutputFormat};

#[derive(Args)]
pub struct CompareArgs {
    /// Left-hand version
    a: String,

    /// Right-hand version
    b: String,
}

#[derive(Debug, Serialize)]
struct Comparison<'a> {
    a: &'a ApiVersion,
    b: &'a ApiVersion,
    ordering: &'static str,
}

fn relation(ordering: Ordering) -> (&'static str, &'static str) {
    match ordering {
        Ordering::Less => ("<", "less"),
        Ordering::Equal => ("=", "equal"),
        Ordering::Greater => (">", "greater"),
    }
}

pub fn execute(args: CompareArgs, format: OutputFormat) -> Result<()> {
    let a = ApiVersion::parse(&args.a).context("Invalid left-hand version")?;
    let b = ApiVersion::parse(&args.b).context("Invalid right-hand version")?;
    let (symbol, name) = relation(compare(&a, &b));

    match format {
        OutputFormat::Json => print_json(&Comparison {
            a: &a,
            b: &b,
            ordering: name,
        })?,
        OutputFormat::Text => println!("{} {} {}", a, symbol, b),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relation_symbols() {
        assert_eq!(relation(Ordering::Less).0, "<");
        assert_eq!(relation(Ordering::Equal).1, "equal");
        assert_eq!(relation(Ordering::Greater).0, ">");
    }

    #[test]
    fn test_invalid_operand_keeps_parse_error() {
        let args = CompareArgs {
            a: "v1".to_string(),
            b: "1".to_string(),
        };
        let err = execute(args, OutputFormat::Text).unwrap_err();
        assert!(err.chain().any(|c| c.is::<kubever_core::ParseError>()));
    }
}

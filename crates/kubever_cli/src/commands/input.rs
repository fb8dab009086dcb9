//! Collecting version strings from arguments, a file, or stdin.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("no versions given")]
    NoVersions,
}

#[derive(Args, Debug, Clone)]
pub struct VersionInput {
    /// Versions to process (read from stdin when none are given and no file is set)
    pub versions: Vec<String>,

    /// Read versions from a file, one per line ('#' starts a comment)
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

impl VersionInput {
    /// Gather versions from the file (if any) followed by positional arguments.
    pub fn collect(&self) -> Result<Vec<String>> {
        let mut versions = Vec::new();

        if let Some(path) = &self.file {
            debug!("Reading versions from {:?}", path);
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            versions.extend(parse_lines(&content));
        }
        versions.extend(self.versions.iter().cloned());

        if versions.is_empty() && self.file.is_none() {
            debug!("Reading versions from stdin");
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read stdin")?;
            versions.extend(parse_lines(&content));
        }

        if versions.is_empty() {
            return Err(InputError::NoVersions.into());
        }
        Ok(versions)
    }
}

/// One version per line; blank lines and `#` comments are skipped.
pub fn parse_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.split('#').next().unwrap_or_default().trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_parse_lines_skips_comments() {
        let content = "# served versions\nv1beta1\n\n  v1  \nv2alpha1 # experimental\n";
        assert_eq!(parse_lines(content), vec!["v1beta1", "v1", "v2alpha1"]);
    }

    #[test]
    fn test_collect_file_then_args() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("versions.txt");
        fs::write(&path, "v2\nv1\n").unwrap();

        let input = VersionInput {
            versions: vec!["v3".to_string()],
            file: Some(path),
        };
        assert_eq!(input.collect().unwrap(), vec!["v2", "v1", "v3"]);
    }

    #[test]
    fn test_collect_empty_file_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("empty.txt");
        fs::write(&path, "# nothing here\n").unwrap();

        let input = VersionInput {
            versions: Vec::new(),
            file: Some(path),
        };
        let err = input.collect().unwrap_err();
        assert!(err.is::<InputError>());
    }

    #[test]
    fn test_collect_missing_file() {
        let input = VersionInput {
            versions: Vec::new(),
            file: Some(PathBuf::from("/nonexistent/versions.txt")),
        };
        assert!(input.collect().is_err());
    }
}

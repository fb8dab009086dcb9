//! Ordering of API versions.
//!
//! Versions are ordered the way Kubernetes promotes them: the major version
//! always dominates, then `alpha < beta < stable`, then the pre-release
//! number within a tier. For example:
//!
//! ```
//! use kubever_core::{sorted, ApiVersion};
//!
//! let versions = ["v2beta1", "v1", "v1alpha1", "v1beta2"]
//!     .iter()
//!     .map(|s| s.parse::<ApiVersion>().unwrap());
//! let names: Vec<String> = sorted(versions).iter().map(|v| v.to_string()).collect();
//! assert_eq!(names, ["v1alpha1", "v1beta2", "v1", "v2beta1"]);
//! ```

use std::cmp::Ordering;

use serde::Serialize;

use crate::error::{ParseError, ParseResult};
use crate::version::ApiVersion;

/// Three-way comparison of two versions.
pub fn compare(a: &ApiVersion, b: &ApiVersion) -> Ordering {
    sort_key(a).cmp(&sort_key(b))
}

// Stable versions carry no pre-release number, and at most one stable
// version exists per major, so `None` never competes with `Some` here.
fn sort_key(version: &ApiVersion) -> (u64, u8, Option<u64>) {
    (
        version.major(),
        version.stability().rank(),
        version.pre_release(),
    )
}

impl Ord for ApiVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

impl PartialOrd for ApiVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Sort versions ascending, in place. Equal versions keep their input order.
pub fn sort_versions(versions: &mut [ApiVersion]) {
    versions.sort_by(compare);
}

/// Collect and sort versions ascending.
pub fn sorted<I>(versions: I) -> Vec<ApiVersion>
where
    I: IntoIterator<Item = ApiVersion>,
{
    let mut versions: Vec<_> = versions.into_iter().collect();
    sort_versions(&mut versions);
    versions
}

/// Parse every input and sort the result. Fails on the first invalid input.
pub fn parse_all<I, S>(inputs: I) -> ParseResult<Vec<ApiVersion>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let versions = inputs
        .into_iter()
        .map(|s| ApiVersion::parse(s.as_ref()))
        .collect::<ParseResult<Vec<_>>>()?;
    Ok(sorted(versions))
}

/// Outcome of [`parse_lenient`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct SortedVersions {
    /// Valid versions, ascending.
    pub versions: Vec<ApiVersion>,
    /// Rejected inputs, in input order.
    #[serde(serialize_with = "serialize_rejected")]
    pub rejected: Vec<ParseError>,
}

impl SortedVersions {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

fn serialize_rejected<S>(rejected: &[ParseError], serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    use serde::ser::SerializeSeq;

    let mut seq = serializer.serialize_seq(Some(rejected.len()))?;
    for err in rejected {
        seq.serialize_element(&RejectedEntry {
            input: err.input(),
            reason: err.kind().to_string(),
        })?;
    }
    seq.end()
}

#[derive(Serialize)]
struct RejectedEntry<'a> {
    input: &'a str,
    reason: String,
}

/// Parse every input, sorting the valid ones and keeping the failures.
pub fn parse_lenient<I, S>(inputs: I) -> SortedVersions
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut result = SortedVersions::default();
    for input in inputs {
        match ApiVersion::parse(input.as_ref()) {
            Ok(version) => result.versions.push(version),
            Err(err) => result.rejected.push(err),
        }
    }
    sort_versions(&mut result.versions);
    result
}

/// The greatest version, if any.
pub fn latest(versions: &[ApiVersion]) -> Option<&ApiVersion> {
    versions.iter().max_by(|a, b| compare(a, b))
}

/// The greatest stable version, if any.
pub fn latest_stable(versions: &[ApiVersion]) -> Option<&ApiVersion> {
    versions
        .iter()
        .filter(|v| v.is_stable())
        .max_by(|a, b| compare(a, b))
}

//! Parsing of Kubernetes API version identifiers.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Component, ParseError, ParseErrorKind, ParseResult};
use crate::stability::Stability;

/// Stability tier together with its pre-release number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Level {
    Alpha(u64),
    Beta(u64),
    Stable,
}

/// A parsed API version such as `v1`, `v2beta1` or `v5alpha2`.
///
/// Equality and hashing ignore the raw input string.
#[derive(Debug, Clone)]
pub struct ApiVersion {
    major: u64,
    level: Level,
    raw: String,
}

impl ApiVersion {
    /// Stable version `v{major}`.
    pub fn stable(major: u64) -> Self {
        Self::from_parts(major, Level::Stable)
    }

    /// Pre-release version `v{major}alpha{n}`.
    pub fn alpha(major: u64, n: u64) -> Self {
        Self::from_parts(major, Level::Alpha(n))
    }

    /// Pre-release version `v{major}beta{n}`.
    pub fn beta(major: u64, n: u64) -> Self {
        Self::from_parts(major, Level::Beta(n))
    }

    fn from_parts(major: u64, level: Level) -> Self {
        let mut version = Self {
            major,
            level,
            raw: String::new(),
        };
        version.raw = version.canonical();
        version
    }

    /// Parse a version identifier.
    ///
    /// The whole input must match `v<major>` optionally followed by
    /// `alpha<n>` or `beta<n>`. Numbers are decimal without leading zeros.
    pub fn parse(input: &str) -> ParseResult<Self> {
        let fail = |kind| ParseError::new(kind, input);

        if input.is_empty() {
            return Err(fail(ParseErrorKind::Empty));
        }
        let rest = input
            .strip_prefix('v')
            .ok_or_else(|| fail(ParseErrorKind::MissingPrefix))?;

        let (major_digits, rest) = split_digits(rest);
        if major_digits.is_empty() {
            return Err(fail(ParseErrorKind::MissingMajor));
        }
        let major = parse_number(major_digits, Component::Major).map_err(fail)?;

        if rest.is_empty() {
            return Ok(Self {
                major,
                level: Level::Stable,
                raw: input.to_string(),
            });
        }

        let keyword_end = rest.find(|c: char| c.is_ascii_digit()).unwrap_or(rest.len());
        let (keyword, rest) = rest.split_at(keyword_end);
        let level: fn(u64) -> Level = match Stability::from_keyword(keyword) {
            Some(Stability::Alpha) => Level::Alpha,
            Some(Stability::Beta) => Level::Beta,
            _ => {
                return Err(fail(ParseErrorKind::UnknownStability {
                    found: keyword.to_string(),
                }))
            }
        };

        let (pre_digits, trailing) = split_digits(rest);
        if pre_digits.is_empty() {
            return Err(fail(ParseErrorKind::MissingPreRelease {
                stability: keyword.to_string(),
            }));
        }
        let n = parse_number(pre_digits, Component::PreRelease).map_err(fail)?;
        if !trailing.is_empty() {
            return Err(fail(ParseErrorKind::TrailingCharacters {
                rest: trailing.to_string(),
            }));
        }

        Ok(Self {
            major,
            level: level(n),
            raw: input.to_string(),
        })
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn stability(&self) -> Stability {
        match self.level {
            Level::Alpha(_) => Stability::Alpha,
            Level::Beta(_) => Stability::Beta,
            Level::Stable => Stability::Stable,
        }
    }

    /// Sequence number within the alpha or beta tier; `None` when stable.
    pub fn pre_release(&self) -> Option<u64> {
        match self.level {
            Level::Alpha(n) | Level::Beta(n) => Some(n),
            Level::Stable => None,
        }
    }

    /// The string this version was parsed from.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn is_stable(&self) -> bool {
        self.level == Level::Stable
    }

    pub fn is_prerelease(&self) -> bool {
        !self.is_stable()
    }

    /// Canonical rendering, independent of the raw input.
    pub fn canonical(&self) -> String {
        self.to_string()
    }
}

/// Split `s` into its leading ASCII digits and the remainder.
fn split_digits(s: &str) -> (&str, &str) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(end)
}

fn parse_number(digits: &str, component: Component) -> Result<u64, ParseErrorKind> {
    if digits.len() > 1 && digits.starts_with('0') {
        return Err(ParseErrorKind::LeadingZero { component });
    }
    // Only ASCII digits reach this point, so overflow is the sole failure.
    digits
        .parse::<u64>()
        .map_err(|_| ParseErrorKind::Overflow { component })
}

impl PartialEq for ApiVersion {
    fn eq(&self, other: &Self) -> bool {
        self.major == other.major && self.level == other.level
    }
}

impl Eq for ApiVersion {}

impl Hash for ApiVersion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.level.hash(state);
    }
}

/// Renders the canonical form, which re-parses to an equal version.
impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.level {
            Level::Alpha(n) => write!(f, "v{}alpha{}", self.major, n),
            Level::Beta(n) => write!(f, "v{}beta{}", self.major, n),
            Level::Stable => write!(f, "v{}", self.major),
        }
    }
}

impl FromStr for ApiVersion {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for ApiVersion {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl Serialize for ApiVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ApiVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind_of(input: &str) -> ParseErrorKind {
        ApiVersion::parse(input).unwrap_err().kind().clone()
    }

    #[test]
    fn test_parse_stable() {
        let version = ApiVersion::parse("v1").unwrap();
        assert_eq!(version.major(), 1);
        assert_eq!(version.stability(), Stability::Stable);
        assert_eq!(version.pre_release(), None);
        assert_eq!(version.raw(), "v1");
        assert!(version.is_stable());
    }

    #[test]
    fn test_parse_prerelease() {
        let version = ApiVersion::parse("v2beta3").unwrap();
        assert_eq!(version.major(), 2);
        assert_eq!(version.stability(), Stability::Beta);
        assert_eq!(version.pre_release(), Some(3));
        assert!(version.is_prerelease());

        let version: ApiVersion = "v5alpha2".parse().unwrap();
        assert_eq!(version, ApiVersion::alpha(5, 2));
    }

    #[test]
    fn test_zero_is_allowed() {
        assert_eq!(ApiVersion::parse("v0").unwrap(), ApiVersion::stable(0));
        assert_eq!(
            ApiVersion::parse("v1alpha0").unwrap(),
            ApiVersion::alpha(1, 0)
        );
    }

    #[test]
    fn test_rejections() {
        assert_eq!(kind_of(""), ParseErrorKind::Empty);
        assert_eq!(kind_of("1"), ParseErrorKind::MissingPrefix);
        assert_eq!(kind_of("V1"), ParseErrorKind::MissingPrefix);
        assert_eq!(kind_of(" v1"), ParseErrorKind::MissingPrefix);
        assert_eq!(kind_of("v"), ParseErrorKind::MissingMajor);
        assert_eq!(kind_of("valpha1"), ParseErrorKind::MissingMajor);
        assert_eq!(
            kind_of("v1gamma1"),
            ParseErrorKind::UnknownStability {
                found: "gamma".to_string()
            }
        );
        assert_eq!(
            kind_of("v1Alpha1"),
            ParseErrorKind::UnknownStability {
                found: "Alpha".to_string()
            }
        );
        assert_eq!(
            kind_of("v1alpha"),
            ParseErrorKind::MissingPreRelease {
                stability: "alpha".to_string()
            }
        );
        assert_eq!(
            kind_of("v01"),
            ParseErrorKind::LeadingZero {
                component: Component::Major
            }
        );
        assert_eq!(
            kind_of("v1beta01"),
            ParseErrorKind::LeadingZero {
                component: Component::PreRelease
            }
        );
        assert_eq!(
            kind_of("v1beta1x"),
            ParseErrorKind::TrailingCharacters {
                rest: "x".to_string()
            }
        );
        assert_eq!(
            kind_of("v1 "),
            ParseErrorKind::UnknownStability {
                found: " ".to_string()
            }
        );
    }

    #[test]
    fn test_overflow() {
        assert_eq!(
            kind_of("v18446744073709551616"),
            ParseErrorKind::Overflow {
                component: Component::Major
            }
        );
        assert_eq!(
            kind_of("v1alpha99999999999999999999"),
            ParseErrorKind::Overflow {
                component: Component::PreRelease
            }
        );
        // Beyond 32 bits is fine.
        assert_eq!(
            ApiVersion::parse("v4294967296").unwrap().major(),
            4_294_967_296
        );
    }

    #[test]
    fn test_non_ascii_input_does_not_panic() {
        assert!(ApiVersion::parse("v1βeta1").is_err());
        assert!(ApiVersion::parse("vé").is_err());
    }

    #[test]
    fn test_error_keeps_input() {
        let err = ApiVersion::parse("v1gamma1").unwrap_err();
        assert_eq!(err.input(), "v1gamma1");
    }

    #[test]
    fn test_display_and_canonical() {
        let version = ApiVersion::beta(1, 2);
        assert_eq!(version.to_string(), "v1beta2");
        assert_eq!(version.canonical(), "v1beta2");
        assert_eq!(ApiVersion::parse(&version.to_string()).unwrap(), version);
    }

    #[test]
    fn test_display_matches_canonical_for_parsed_input() {
        for input in ["v0", "v1", "v1alpha0", "v2beta10", "v18446744073709551615"] {
            let version = ApiVersion::parse(input).unwrap();
            assert_eq!(version.to_string(), version.canonical());
            assert_eq!(version.to_string(), version.raw());
        }
        assert_eq!(ApiVersion::alpha(3, 4).raw(), "v3alpha4");
    }

    #[test]
    fn test_serde_uses_string_form() {
        let version = ApiVersion::parse("v2beta1").unwrap();
        let json = serde_json::to_string(&version).unwrap();
        assert_eq!(json, "\"v2beta1\"");

        let back: ApiVersion = serde_json::from_str(&json).unwrap();
        assert_eq!(back, version);

        let bad: Result<ApiVersion, _> = serde_json::from_str("\"v1gamma1\"");
        assert!(bad.is_err());
    }
}

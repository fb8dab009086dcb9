//! `<group>/<version>` identifiers, as written in a manifest's `apiVersion`.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::GroupVersionError;
use crate::ordering::compare;
use crate::version::ApiVersion;

const MAX_GROUP_LEN: usize = 253;

static GROUP_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?(\.[a-z0-9]([-a-z0-9]*[a-z0-9])?)*$")
        .expect("group pattern is valid")
});

/// An API version qualified by its group. The core group has no name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupVersion {
    group: Option<String>,
    version: ApiVersion,
}

impl GroupVersion {
    /// Build from parts, validating the group name.
    pub fn new(group: Option<&str>, version: ApiVersion) -> Result<Self, GroupVersionError> {
        if let Some(group) = group {
            validate_group(group)?;
        }
        Ok(Self {
            group: group.map(str::to_string),
            version,
        })
    }

    /// Parse `apps/v1`, `batch/v1beta1` or a bare `v1` (core group).
    pub fn parse(input: &str) -> Result<Self, GroupVersionError> {
        match input.split_once('/') {
            None => Ok(Self {
                group: None,
                version: ApiVersion::parse(input)?,
            }),
            Some((_, version)) if version.contains('/') => {
                Err(GroupVersionError::TooManySeparators {
                    input: input.to_string(),
                })
            }
            Some(("", _)) => Err(GroupVersionError::EmptyGroup {
                input: input.to_string(),
            }),
            Some((group, version)) => Self::new(Some(group), ApiVersion::parse(version)?),
        }
    }

    /// Group name; `None` for the core group.
    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    pub fn version(&self) -> &ApiVersion {
        &self.version
    }

    pub fn is_core(&self) -> bool {
        self.group.is_none()
    }

    pub fn same_group(&self, other: &GroupVersion) -> bool {
        self.group == other.group
    }
}

fn validate_group(group: &str) -> Result<(), GroupVersionError> {
    if group.len() > MAX_GROUP_LEN || !GROUP_REGEX.is_match(group) {
        return Err(GroupVersionError::InvalidGroup {
            group: group.to_string(),
        });
    }
    Ok(())
}

impl Ord for GroupVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        // `None` sorts first, which puts the core group ahead of named ones.
        self.group
            .cmp(&other.group)
            .then_with(|| compare(&self.version, &other.version))
    }
}

impl PartialOrd for GroupVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for GroupVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.group {
            Some(group) => write!(f, "{}/{}", group, self.version),
            None => write!(f, "{}", self.version),
        }
    }
}

impl FromStr for GroupVersion {
    type Err = GroupVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for GroupVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for GroupVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

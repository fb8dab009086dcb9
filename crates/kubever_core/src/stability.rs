//! Stability tiers of an API version.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Maturity of an API version, ordered `Alpha < Beta < Stable` by [`rank`](Stability::rank).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Stability {
    Alpha,
    Beta,
    Stable,
}

impl Stability {
    /// Fixed rank used when comparing versions with the same major.
    pub fn rank(&self) -> u8 {
        match self {
            Stability::Alpha => 0,
            Stability::Beta => 1,
            Stability::Stable => 2,
        }
    }

    /// Suffix keyword as written in a version string, if any.
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            Stability::Alpha => Some("alpha"),
            Stability::Beta => Some("beta"),
            Stability::Stable => None,
        }
    }

    pub(crate) fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "alpha" => Some(Stability::Alpha),
            "beta" => Some(Stability::Beta),
            _ => None,
        }
    }
}

impl Ord for Stability {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl PartialOrd for Stability {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Stability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword().unwrap_or("stable"))
    }
}

//! # kubever_core
//!
//! Parsing and ordering of Kubernetes API version identifiers.
//!
//! Kubernetes names API versions `v<major>`, optionally followed by
//! `alpha<n>` or `beta<n>`. This crate turns such strings into a typed
//! [`ApiVersion`] and orders them the way Kubernetes promotes an API.
//!
//! ## Ordering
//!
//! - The major version always dominates: `v1 < v2alpha1`
//! - Within a major: `alpha < beta < stable`
//! - Within a tier: by pre-release number, `v1beta1 < v1beta2`
//!
//! ## Example
//!
//! ```rust
//! use kubever_core::{parse_all, ApiVersion, Stability};
//!
//! let version: ApiVersion = "v2beta1".parse().unwrap();
//! assert_eq!(version.major(), 2);
//! assert_eq!(version.stability(), Stability::Beta);
//! assert_eq!(version.pre_release(), Some(1));
//!
//! let versions = parse_all(["v1", "v1beta1", "v2alpha1"]).unwrap();
//! assert_eq!(versions.last().unwrap().to_string(), "v2alpha1");
//! ```

pub mod error;
pub mod group;
pub mod ordering;
pub mod stability;
pub mod version;

pub use error::{Component, GroupVersionError, ParseError, ParseErrorKind, ParseResult};
pub use group::GroupVersion;
pub use ordering::{
    compare, latest, latest_stable, parse_all, parse_lenient, sort_versions, sorted,
    SortedVersions,
};
pub use stability::Stability;
pub use version::ApiVersion;

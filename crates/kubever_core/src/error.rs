//! Error types for API version parsing.

use std::fmt;

use thiserror::Error;

/// Result type alias for parse operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Numeric part of a version identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Major,
    PreRelease,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Major => f.write_str("major version"),
            Component::PreRelease => f.write_str("pre-release number"),
        }
    }
}

/// Why an input was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("input is empty")]
    Empty,

    #[error("missing leading 'v'")]
    MissingPrefix,

    #[error("missing major version after 'v'")]
    MissingMajor,

    #[error("{component} has a leading zero")]
    LeadingZero { component: Component },

    #[error("{component} is too large")]
    Overflow { component: Component },

    #[error("unknown stability level {found:?}, expected \"alpha\" or \"beta\"")]
    UnknownStability { found: String },

    #[error("missing {stability} number")]
    MissingPreRelease { stability: String },

    #[error("unexpected trailing characters {rest:?}")]
    TrailingCharacters { rest: String },
}

/// An input string that is not a Kubernetes API version.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid API version {input:?}: {kind}")]
pub struct ParseError {
    kind: ParseErrorKind,
    input: String,
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind, input: impl Into<String>) -> Self {
        Self {
            kind,
            input: input.into(),
        }
    }

    /// The reason the input was rejected.
    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    /// The rejected input, verbatim.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Errors for `<group>/<version>` identifiers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GroupVersionError {
    #[error("empty API group in {input:?}")]
    EmptyGroup { input: String },

    #[error("invalid API group {group:?}: must be a lowercase DNS subdomain")]
    InvalidGroup { group: String },

    #[error("too many '/' separators in {input:?}")]
    TooManySeparators { input: String },

    #[error(transparent)]
    Version(#[from] ParseError),
}

//! Error types for route registration.
//!
//! - [`SegmentError`] - A single pattern segment is malformed
//! - [`RouteError`] - A route cannot be added to the trie
//!
//! Lookups never fail with an error; a miss is simply `None`.

use thiserror::Error;

/// Errors from parsing one pattern segment.
#[derive(Error, Debug)]
pub enum SegmentError {
    /// A `#` segment has no regex body.
    #[error("regex is empty")]
    EmptyRegex,

    /// A `#{name}` group has no closing brace.
    #[error("regex name group is missing its closing brace")]
    UnclosedName,

    /// The regex body does not compile.
    #[error("regex failed to compile: {0}")]
    InvalidRegex(#[from] regex::Error),
}

/// Errors from registering a route.
///
/// A registration that returns an error leaves the routing trie unchanged.
#[derive(Error, Debug)]
pub enum RouteError {
    /// The route carries no terminal handler.
    #[error("no handler defined for path {path}")]
    MissingHandler {
        /// The rejected pattern.
        path: String,
    },

    /// The pattern does not start with `/`.
    #[error("path must begin with '/': {path}")]
    MissingLeadingSlash {
        /// The rejected pattern.
        path: String,
    },

    /// One segment of the pattern is malformed.
    #[error("invalid segment `{segment}` in path {path}")]
    InvalidSegment {
        /// The rejected pattern.
        path: String,
        /// The offending segment as written.
        segment: String,
        /// Why the segment was rejected.
        #[source]
        source: SegmentError,
    },

    /// A different non-literal segment already exists at this level.
    #[error("segment `{segment}` conflicts with `{existing}` in path {path}")]
    ConflictingSegment {
        /// The rejected pattern.
        path: String,
        /// The new non-literal segment.
        segment: String,
        /// The non-literal segment already registered at that level.
        existing: String,
    },

    /// A segment follows a wildcard.
    #[error("segment `{segment}` follows a wildcard in path {path}")]
    WildcardNotLast {
        /// The rejected pattern.
        path: String,
        /// The first segment after the wildcard.
        segment: String,
    },

    /// A handler is already registered for this path.
    #[error("handler for path {path} redefined")]
    Redefined {
        /// The rejected pattern.
        path: String,
    },
}

impl RouteError {
    /// The pattern whose registration failed.
    pub fn path(&self) -> &str {
        match self {
            Self::MissingHandler { path }
            | Self::MissingLeadingSlash { path }
            | Self::InvalidSegment { path, .. }
            | Self::ConflictingSegment { path, .. }
            | Self::WildcardNotLast { path, .. }
            | Self::Redefined { path } => path,
        }
    }
}

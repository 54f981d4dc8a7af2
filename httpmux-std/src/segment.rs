//! Route pattern segments.
//!
//! A pattern is split on `/` and each non-empty piece is classified by its
//! first character:
//!
//! | Prefix | Kind | Captures |
//! |--------|------|----------|
//! | *(none)* | [`SegmentKind::Literal`] | nothing, matched case-insensitively |
//! | `:name` | [`SegmentKind::Parameter`] | one segment under `name` |
//! | `*name` | [`SegmentKind::Wildcard`] | the rest of the path under `name` |
//! | `#regex` | [`SegmentKind::Regex`] | one segment, positional only |
//! | `#{name}regex` | [`SegmentKind::Regex`] | one segment under `name` |
//!
//! Regex segments use unanchored matching; write `^...$` to constrain the
//! whole segment.

use crate::error::SegmentError;
use regex::Regex;
use std::fmt;

/// How a segment matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// Exact text, case-insensitive.
    Literal,
    /// Any single segment.
    Parameter,
    /// The current segment and everything after it.
    Wildcard,
    /// A single segment accepted by a regex.
    Regex,
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Literal => "literal",
            Self::Parameter => "parameter",
            Self::Wildcard => "wildcard",
            Self::Regex => "regex",
        };
        f.write_str(name)
    }
}

/// One parsed pattern segment.
#[derive(Debug, Clone)]
pub struct Segment {
    kind: SegmentKind,
    key: String,
    name: String,
    regex: Option<Regex>,
}

impl Segment {
    /// Parse a single segment of a route pattern.
    ///
    /// ```rust
    /// use httpmux_std::{Segment, SegmentKind};
    ///
    /// let id = Segment::parse("#{id}^[0-9]+$").unwrap();
    /// assert_eq!(id.kind(), SegmentKind::Regex);
    /// assert_eq!(id.name(), "id");
    /// assert!(id.matches("123"));
    /// assert!(!id.matches("abc"));
    /// ```
    pub fn parse(raw: &str) -> Result<Self, SegmentError> {
        match raw.as_bytes().first() {
            Some(b':') => Ok(Self::typed(SegmentKind::Parameter, raw, &raw[1..], None)),
            Some(b'*') => Ok(Self::typed(SegmentKind::Wildcard, raw, &raw[1..], None)),
            Some(b'#') => Self::parse_regex(raw),
            _ => Ok(Self {
                kind: SegmentKind::Literal,
                key: fold(raw),
                name: String::new(),
                regex: None,
            }),
        }
    }

    fn parse_regex(raw: &str) -> Result<Self, SegmentError> {
        let body = &raw[1..];
        let (name, pattern) = match body.strip_prefix('{') {
            Some(group) => {
                let end = group.find('}').ok_or(SegmentError::UnclosedName)?;
                (&group[..end], &group[end + 1..])
            }
            None => ("", body),
        };
        if pattern.is_empty() {
            return Err(SegmentError::EmptyRegex);
        }

        let regex = Regex::new(pattern)?;
        Ok(Self::typed(SegmentKind::Regex, raw, name, Some(regex)))
    }

    fn typed(kind: SegmentKind, raw: &str, name: &str, regex: Option<Regex>) -> Self {
        Self {
            kind,
            key: raw.to_string(),
            name: name.to_string(),
            regex,
        }
    }

    /// The root of a trie: a literal with no text.
    pub(crate) fn root() -> Self {
        Self {
            kind: SegmentKind::Literal,
            key: String::new(),
            name: String::new(),
            regex: None,
        }
    }

    /// How this segment matches.
    pub fn kind(&self) -> SegmentKind {
        self.kind
    }

    /// Whether this segment is anything other than a literal.
    pub fn is_typed(&self) -> bool {
        self.kind != SegmentKind::Literal
    }

    /// Identity of the segment within its level of the trie.
    ///
    /// Case-folded text for literals, the segment as written otherwise.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Name captured parameters are stored under; empty for literals and
    /// anonymous captures.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The compiled regex of a [`SegmentKind::Regex`] segment.
    pub fn regex(&self) -> Option<&Regex> {
        self.regex.as_ref()
    }

    /// Whether `value` is accepted as a single path segment.
    pub fn matches(&self, value: &str) -> bool {
        match self.kind {
            SegmentKind::Literal => self.key == fold(value),
            SegmentKind::Parameter | SegmentKind::Wildcard => true,
            SegmentKind::Regex => self.regex.as_ref().is_some_and(|re| re.is_match(value)),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}

/// Case folding applied to literal text at insertion and lookup.
pub(crate) fn fold(text: &str) -> String {
    text.to_lowercase()
}

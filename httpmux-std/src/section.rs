//! Segment trie for one HTTP method.
//!
//! Every node is a [`Section`] holding its own [`Segment`]. Literal children
//! are keyed by case-folded text; at most one typed (non-literal) child lives
//! in a separate slot, so literal and typed children coexist at any level.
//!
//! # Matching
//!
//! At each level the literal child wins over the typed child. The walk never
//! backtracks: once a literal child is taken, a failure further down is a
//! miss even if the typed sibling would have matched.

use crate::{
    error::RouteError,
    segment::{Segment, SegmentKind, fold},
};
use httpmux_core::{Chain, Context};
use std::collections::HashMap;

/// A node in the routing trie.
pub(crate) struct Section<R> {
    segment: Segment,
    literals: HashMap<String, Section<R>>,
    typed: Option<Box<Section<R>>>,
    trailing_slash: bool,
    chain: Option<Chain<R>>,
}

impl<R: 'static> Section<R> {
    pub(crate) fn root() -> Self {
        Self::new(Segment::root())
    }

    fn new(segment: Segment) -> Self {
        Self {
            segment,
            literals: HashMap::new(),
            typed: None,
            trailing_slash: false,
            chain: None,
        }
    }

    pub(crate) fn chain(&self) -> Option<&Chain<R>> {
        self.chain.as_ref()
    }

    pub(crate) fn trailing_slash(&self) -> bool {
        self.trailing_slash
    }

    #[cfg(test)]
    fn has_typed_child(&self) -> bool {
        self.typed.is_some()
    }

    // ========================================================================
    // Registration
    // ========================================================================

    /// Add a route below this node.
    ///
    /// The whole pattern is validated before the trie is touched, so an error
    /// leaves the trie exactly as it was.
    pub(crate) fn add_route(&mut self, path: &str, chain: Chain<R>) -> Result<(), RouteError> {
        if !chain.has_handler() {
            return Err(RouteError::MissingHandler {
                path: path.to_string(),
            });
        }
        if !path.starts_with('/') {
            return Err(RouteError::MissingLeadingSlash {
                path: path.to_string(),
            });
        }

        let segments = split(path)
            .map(|raw| {
                Segment::parse(raw).map_err(|source| RouteError::InvalidSegment {
                    path: path.to_string(),
                    segment: raw.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.check(path, &segments)?;

        let is_root = segments.is_empty();
        let node = self.insert(segments);
        if !is_root {
            node.trailing_slash = path.ends_with('/');
        }
        node.chain.get_or_insert_with(Chain::new).merge(chain);
        Ok(())
    }

    /// Dry run of [`Section::insert`] over the existing nodes.
    fn check(&self, path: &str, segments: &[Segment]) -> Result<(), RouteError> {
        let mut existing = Some(self);
        let mut parent = self.segment.kind();

        for segment in segments {
            if parent == SegmentKind::Wildcard {
                return Err(RouteError::WildcardNotLast {
                    path: path.to_string(),
                    segment: segment.to_string(),
                });
            }

            // Nodes that don't exist yet are created empty, so conflicts can
            // only arise while we are still on existing nodes.
            if let Some(node) = existing {
                existing = node.child_for(segment).map_err(|other| {
                    RouteError::ConflictingSegment {
                        path: path.to_string(),
                        segment: segment.to_string(),
                        existing: other.to_string(),
                    }
                })?;
            }
            parent = segment.kind();
        }

        if existing.is_some_and(|node| node.chain.is_some()) {
            return Err(RouteError::Redefined {
                path: path.to_string(),
            });
        }
        Ok(())
    }

    /// The existing child `segment` would descend into.
    ///
    /// Fails with the conflicting typed segment if another one occupies the
    /// typed slot.
    fn child_for(&self, segment: &Segment) -> Result<Option<&Section<R>>, &Segment> {
        if !segment.is_typed() {
            return Ok(self.literals.get(segment.key()));
        }
        match self.typed.as_deref() {
            Some(child) if child.segment.key() == segment.key() => Ok(Some(child)),
            Some(child) => Err(&child.segment),
            None => Ok(None),
        }
    }

    fn insert(&mut self, segments: Vec<Segment>) -> &mut Section<R> {
        let mut node = self;
        for segment in segments {
            node = if segment.is_typed() {
                &mut **node
                    .typed
                    .get_or_insert_with(|| Box::new(Section::new(segment)))
            } else {
                node.literals
                    .entry(segment.key().to_string())
                    .or_insert_with(|| Section::new(segment))
            };
        }
        node
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Walk `path` from this node, recording captures in `ctx`.
    ///
    /// Returns the node reached only if a route terminates there.
    pub(crate) fn find_route(&self, path: &str, ctx: &mut Context) -> Option<&Section<R>> {
        let segments: Vec<&str> = split(path).collect();
        let mut node = self;
        let mut index = 0;

        while let Some(&value) = segments.get(index) {
            if let Some(child) = node.literals.get(&fold(value)) {
                node = child;
                index += 1;
                continue;
            }

            let child = node.typed.as_deref()?;
            let segment = &child.segment;
            match segment.kind() {
                SegmentKind::Wildcard => {
                    ctx.push_param(segment.name(), segments[index..].join("/"));
                    node = child;
                    break;
                }
                SegmentKind::Parameter | SegmentKind::Regex if segment.matches(value) => {
                    ctx.push_param(segment.name(), value);
                }
                _ => return None,
            }
            node = child;
            index += 1;
        }

        node.chain.is_some().then_some(node)
    }
}

fn split(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

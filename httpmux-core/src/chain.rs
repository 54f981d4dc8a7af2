//! # Middleware Chain
//!
//! A [`Chain`] is the route-level definition: ordered middleware followed by
//! one terminal handler. It holds no execution state and is shared by every
//! request that reaches its route.
//!
//! Execution state lives in [`Next`], which is created fresh for each
//! [`Chain::serve`] call and handed to each handler as its continuation.
//!
//! # Execution
//!
//! ```text
//!   cursor:      0        1        2
//!   slot:     [ m1 ] -> [ m2 ] -> [ terminal ]
//! ```
//!
//! Each [`Next::run`] consumes exactly one slot. A middleware that calls
//! `next.run` more often than there are slots left gets a silent no-op, so
//! no slot can run twice within one invocation.

use crate::{context::Context, handler::Handler};
use std::{cmp::Ordering, fmt, sync::Arc};

/// Ordered middleware plus a terminal handler.
pub struct Chain<R> {
    middlewares: Vec<Arc<dyn Handler<R>>>,
    terminal: Option<Arc<dyn Handler<R>>>,
}

impl<R: 'static> Chain<R> {
    /// Create an empty chain with no middleware and no terminal handler.
    pub fn new() -> Self {
        Self {
            middlewares: Vec::new(),
            terminal: None,
        }
    }

    /// Add a middleware after the existing ones.
    pub fn append<H: Handler<R>>(mut self, middleware: H) -> Self {
        self.middlewares.push(Arc::new(middleware));
        self
    }

    /// Add a middleware before the existing ones.
    pub fn prepend<H: Handler<R>>(mut self, middleware: H) -> Self {
        self.middlewares.insert(0, Arc::new(middleware));
        self
    }

    /// Set the terminal handler, replacing any previous one.
    pub fn handler<H: Handler<R>>(mut self, handler: H) -> Self {
        self.terminal = Some(Arc::new(handler));
        self
    }

    /// Set an already shared terminal handler, replacing any previous one.
    pub fn shared_handler(mut self, handler: Arc<dyn Handler<R>>) -> Self {
        self.terminal = Some(handler);
        self
    }

    /// Fold another chain into this one.
    ///
    /// The other chain's middleware run after this chain's middleware, and its
    /// terminal handler (if any) replaces this chain's terminal handler.
    pub fn merge(&mut self, other: Chain<R>) {
        self.middlewares.extend(other.middlewares);
        if other.terminal.is_some() {
            self.terminal = other.terminal;
        }
    }

    /// Number of middleware before the terminal handler.
    pub fn middlewares_len(&self) -> usize {
        self.middlewares.len()
    }

    /// Whether a terminal handler is set.
    pub fn has_handler(&self) -> bool {
        self.terminal.is_some()
    }

    /// Run the chain once from the first slot.
    pub fn serve(&self, req: &mut R, ctx: &mut Context) {
        let mut next = Next::new(self);
        next.run(req, ctx);
    }
}

impl<R: 'static> Default for Chain<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: 'static> Clone for Chain<R> {
    fn clone(&self) -> Self {
        Self {
            middlewares: self.middlewares.clone(),
            terminal: self.terminal.clone(),
        }
    }
}

impl<R: 'static> fmt::Debug for Chain<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain")
            .field("middlewares", &self.middlewares.len())
            .field("has_handler", &self.terminal.is_some())
            .finish()
    }
}

// ============================================================================
// Continuation
// ============================================================================

/// Where a [`Next`] stands in its chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainState {
    /// No slot has been consumed yet.
    Idle,
    /// Some middleware slots have been consumed; the terminal slot has not.
    Running,
    /// The terminal slot has been consumed; further advances do nothing.
    Exhausted,
}

/// Per-invocation cursor over a [`Chain`].
///
/// Handlers receive `&mut Next` and call [`Next::run`] to continue.
pub struct Next<'a, R> {
    chain: &'a Chain<R>,
    cursor: usize,
}

impl<'a, R: 'static> Next<'a, R> {
    fn new(chain: &'a Chain<R>) -> Self {
        Self { chain, cursor: 0 }
    }

    /// Advance to the next slot and run its handler.
    ///
    /// The slot is consumed before its handler runs. A missing terminal
    /// handler consumes its slot without running anything.
    pub fn run(&mut self, req: &mut R, ctx: &mut Context) {
        let chain = self.chain;
        let slot = match self.cursor.cmp(&chain.middlewares.len()) {
            Ordering::Less => chain.middlewares.get(self.cursor),
            Ordering::Equal => chain.terminal.as_ref(),
            Ordering::Greater => return,
        };
        self.cursor += 1;

        if let Some(handler) = slot {
            let handler: &dyn Handler<R> = &**handler;
            handler.serve(req, ctx, self);
        }
    }

    /// Current execution state.
    pub fn state(&self) -> ChainState {
        if self.cursor == 0 {
            ChainState::Idle
        } else if self.cursor <= self.chain.middlewares.len() {
            ChainState::Running
        } else {
            ChainState::Exhausted
        }
    }

    /// Number of slots (middleware plus terminal) not yet consumed.
    pub fn remaining(&self) -> usize {
        (self.chain.middlewares.len() + 1).saturating_sub(self.cursor)
    }
}

impl<R: 'static> fmt::Debug for Next<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Next")
            .field("cursor", &self.cursor)
            .field("state", &self.state())
            .finish()
    }
}

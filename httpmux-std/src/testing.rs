//! Testing utilities for httpmux.
//!
//! This module provides handlers that make routing and chain behaviour easy to
//! observe in tests.
//!
//! # Features
//!
//! - [`Recorder`]: A shared, ordered log of handler invocations
//! - [`RecordingHandler`]: A handler that appends its label to a [`Recorder`]
//! - [`CountingHandler`]: A handler that counts its invocations

use httpmux_core::{Context, Handler, Next};
use std::sync::{
    Arc, Mutex, PoisonError,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Recorder
// ============================================================================

/// A shared log of handler labels in invocation order.
///
/// # Example
///
/// ```rust
/// use httpmux_core::{Chain, Context};
/// use httpmux_std::testing::Recorder;
///
/// let recorder = Recorder::new();
/// let chain = Chain::new()
///     .append(recorder.middleware("auth"))
///     .handler(recorder.terminal("show"));
///
/// chain.serve(&mut (), &mut Context::new());
/// assert_eq!(recorder.entries(), vec!["auth", "show"]);
/// ```
#[derive(Clone, Default)]
pub struct Recorder {
    entries: Arc<Mutex<Vec<String>>>,
}

impl Recorder {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// A handler that records `label` and continues the chain.
    pub fn middleware(&self, label: impl Into<String>) -> RecordingHandler {
        RecordingHandler {
            label: label.into(),
            recorder: self.clone(),
            continues: true,
        }
    }

    /// A handler that records `label` and ends the chain.
    pub fn terminal(&self, label: impl Into<String>) -> RecordingHandler {
        RecordingHandler {
            label: label.into(),
            recorder: self.clone(),
            continues: false,
        }
    }

    /// Append an entry.
    pub fn record(&self, entry: impl Into<String>) {
        self.lock().push(entry.into());
    }

    /// A copy of the recorded entries.
    pub fn entries(&self) -> Vec<String> {
        self.lock().clone()
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Clear all recorded entries.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// ============================================================================
// Recording Handler
// ============================================================================

/// A handler that records its label, created by [`Recorder`].
#[derive(Clone)]
pub struct RecordingHandler {
    label: String,
    recorder: Recorder,
    continues: bool,
}

impl RecordingHandler {
    /// The label this handler records.
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl<R: 'static> Handler<R> for RecordingHandler {
    fn serve(&self, req: &mut R, ctx: &mut Context, next: &mut Next<'_, R>) {
        self.recorder.record(self.label.clone());
        if self.continues {
            next.run(req, ctx);
        }
    }
}

// ============================================================================
// Counting Handler
// ============================================================================

/// A handler that counts how often it runs.
///
/// Clones share the same counter.
#[derive(Clone, Default)]
pub struct CountingHandler {
    count: Arc<AtomicUsize>,
    continues: bool,
}

impl CountingHandler {
    /// A counting terminal handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// A counting middleware that continues the chain.
    pub fn passing() -> Self {
        Self {
            count: Arc::default(),
            continues: true,
        }
    }

    /// Number of invocations so far.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl<R: 'static> Handler<R> for CountingHandler {
    fn serve(&self, req: &mut R, ctx: &mut Context, next: &mut Next<'_, R>) {
        self.count.fetch_add(1, Ordering::SeqCst);
        if self.continues {
            next.run(req, ctx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmux_core::Chain;

    #[test]
    fn test_recorder_shares_log() {
        let recorder = Recorder::new();
        let other = recorder.clone();
        other.record("x");

        assert_eq!(recorder.entries(), vec!["x"]);
        assert_eq!(recorder.len(), 1);
        recorder.clear();
        assert!(other.is_empty());
    }

    #[test]
    fn test_recording_handler_label() {
        let recorder = Recorder::new();
        let middleware = recorder.middleware("auth");
        let terminal = recorder.terminal("show");
        assert_eq!(middleware.label(), "auth");
        assert_eq!(terminal.label(), "show");

        let chain: Chain<()> = Chain::new().append(terminal).append(middleware);
        chain.serve(&mut (), &mut Context::new());
        // the terminal-style step stops the chain
        assert_eq!(recorder.entries(), vec!["show"]);
    }

    #[test]
    fn test_counting_handler() {
        let middleware = CountingHandler::passing();
        let terminal = CountingHandler::new();
        let chain: Chain<()> = Chain::new()
            .append(middleware.clone())
            .handler(terminal.clone());

        chain.serve(&mut (), &mut Context::new());
        chain.serve(&mut (), &mut Context::new());
        assert_eq!(middleware.count(), 2);
        assert_eq!(terminal.count(), 2);
    }
}

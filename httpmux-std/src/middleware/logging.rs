//! Logging middleware for request observation.

use httpmux_core::{Context, Handler, Next};

/// A middleware that logs entry to and exit from the rest of its chain.
///
/// Events are emitted through `tracing` when the `tracing` feature is enabled;
/// otherwise the middleware only continues the chain.
///
/// # Example
///
/// ```rust
/// use httpmux_core::{Chain, Context};
/// use httpmux_std::{middleware::LoggingMiddleware, testing::Recorder};
///
/// let recorder = Recorder::new();
/// let chain = Chain::new()
///     .append(LoggingMiddleware::named("api"))
///     .handler(recorder.terminal("show"));
///
/// chain.serve(&mut (), &mut Context::new());
/// assert_eq!(recorder.entries(), vec!["show"]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LoggingMiddleware {
    name: &'static str,
}

impl LoggingMiddleware {
    /// Create a new `LoggingMiddleware` with a default name.
    pub fn new() -> Self {
        Self { name: "request" }
    }

    /// Create a new `LoggingMiddleware` with a custom name.
    ///
    /// The name is used in log events to identify the chain.
    pub fn named(name: &'static str) -> Self {
        Self { name }
    }

    /// The name used in log events.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: 'static> Handler<R> for LoggingMiddleware {
    fn serve(&self, req: &mut R, ctx: &mut Context, next: &mut Next<'_, R>) {
        #[cfg(feature = "tracing")]
        {
            tracing::debug!(
                name = %self.name,
                params = ctx.len(),
                remaining = next.remaining(),
                "entering chain"
            );
        }

        next.run(req, ctx);

        #[cfg(feature = "tracing")]
        {
            tracing::debug!(name = %self.name, state = ?next.state(), "leaving chain");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Recorder;
    use httpmux_core::Chain;

    #[test]
    fn test_logging_middleware_continues() {
        let recorder = Recorder::new();
        let chain = Chain::new()
            .append(LoggingMiddleware::new())
            .append(recorder.middleware("m"))
            .handler(recorder.terminal("t"));

        chain.serve(&mut (), &mut Context::new());
        assert_eq!(recorder.entries(), vec!["m", "t"]);
    }

    #[test]
    fn test_logging_middleware_named() {
        let logging = LoggingMiddleware::named("admin");
        assert_eq!(logging.name(), "admin");
        assert_eq!(LoggingMiddleware::default().name(), "request");
    }
}

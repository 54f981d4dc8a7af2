//! # Handler
//!
//! The one trait every route payload is built from. Middleware and terminal
//! handlers are not distinguished by type: a middleware is simply a handler
//! that calls [`Next::run`] to hand control to the rest of its chain, and a
//! terminal handler is one that doesn't.
//!
//! # Usage Patterns
//!
//! 1. **Struct implementation**: `impl<R: 'static> Handler<R> for MyMiddleware`
//! 2. **Closure**: `handler_fn(|req: &mut MyReq, ctx: &mut Context, next: &mut Next<'_, MyReq>| { ... })`
//! 3. **Shared**: an `Arc<H>` is itself a handler, so one instance can back
//!    several routes.

use crate::{chain::Next, context::Context};
use std::{fmt, sync::Arc};

/// A unit of request processing.
///
/// `R` is the host's request type. The router never inspects it; it only
/// threads the same `&mut R` through every handler of a chain.
///
/// Handlers are `Send + Sync + 'static` so a fully built router can be shared
/// across concurrently running requests.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot handle requests of type `{R}`",
    label = "missing `Handler<{R}>` implementation",
    note = "Implement `Handler<{R}>` or wrap a closure with `handler_fn`."
)]
pub trait Handler<R>: Send + Sync + 'static {
    /// Process the request.
    ///
    /// `next` is the continuation over the remaining steps of the chain this
    /// handler was invoked from. Calling [`Next::run`] is optional; a
    /// middleware that doesn't call it ends the chain early.
    fn serve(&self, req: &mut R, ctx: &mut Context, next: &mut Next<'_, R>);
}

impl<R: 'static, H> Handler<R> for Arc<H>
where
    H: Handler<R> + ?Sized,
{
    fn serve(&self, req: &mut R, ctx: &mut Context, next: &mut Next<'_, R>) {
        (**self).serve(req, ctx, next)
    }
}

/// A closure adapted into a [`Handler`].
///
/// Created by [`handler_fn`].
#[derive(Clone, Copy)]
pub struct HandlerFn<F> {
    func: F,
}

/// Wrap a closure as a [`Handler`].
///
/// The bound on `F` lets the compiler infer a closure signature that accepts
/// any borrow lifetime.
///
/// ```rust
/// use httpmux_core::{handler_fn, Chain, Context, Next};
///
/// let hello = handler_fn(|out: &mut String, _ctx: &mut Context, _next: &mut Next<'_, String>| {
///     out.push_str("hello");
/// });
///
/// let mut out = String::new();
/// Chain::new().handler(hello).serve(&mut out, &mut Context::new());
/// assert_eq!(out, "hello");
/// ```
pub fn handler_fn<R, F>(func: F) -> HandlerFn<F>
where
    F: Fn(&mut R, &mut Context, &mut Next<'_, R>) + Send + Sync + 'static,
{
    HandlerFn { func }
}

impl<R: 'static, F> Handler<R> for HandlerFn<F>
where
    F: Fn(&mut R, &mut Context, &mut Next<'_, R>) + Send + Sync + 'static,
{
    fn serve(&self, req: &mut R, ctx: &mut Context, next: &mut Next<'_, R>) {
        (self.func)(req, ctx, next)
    }
}

impl<F> fmt::Debug for HandlerFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerFn").finish_non_exhaustive()
    }
}

//! # httpmux - Segment-Trie HTTP Request Multiplexer
//!
//! `httpmux` routes a request to a chain of handlers by HTTP method and
//! URL path. Each method owns a trie of path segments; a segment is a
//! literal, a `:name` parameter, a `*name` wildcard, or a `#{name}regex`
//! pattern. A matched request runs its chain with a [`Context`] holding
//! the captured parameters.
//!
//! ## Quick Start
//!
//! ```rust
//! use httpmux::prelude::*;
//!
//! let mut mux: Mux<Vec<String>> = Mux::new();
//! mux.get(
//!     "/users/:id",
//!     handler_fn(|out: &mut Vec<String>, ctx: &mut Context, _next: &mut Next<'_, Vec<String>>| {
//!         out.push(format!("user {}", ctx.value_by_name("id")));
//!     }),
//! )
//! .unwrap();
//!
//! let mut out = Vec::new();
//! assert!(mux.serve(&Method::GET, "/users/42", &mut out));
//! assert_eq!(out, vec!["user 42"]);
//! ```
//!
//! ## Middleware
//!
//! A [`Chain`] runs its middleware in order before the terminal handler.
//! Each step decides whether the rest of the chain runs by calling
//! [`Next::run`].
//!
//! ```rust
//! use httpmux::prelude::*;
//! use httpmux::testing::Recorder;
//!
//! let recorder = Recorder::new();
//! let mut mux: Mux<()> = Mux::new();
//! mux.handle_chain(
//!     Method::GET,
//!     "/admin",
//!     Chain::new()
//!         .append(recorder.middleware("auth"))
//!         .handler(recorder.terminal("dashboard")),
//! )
//! .unwrap();
//!
//! mux.serve(&Method::GET, "/admin", &mut ());
//! assert_eq!(recorder.entries(), vec!["auth", "dashboard"]);
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use http::Method;

pub use httpmux_core::{Chain, ChainState, Context, Handler, HandlerFn, Next, handler_fn};

pub use httpmux_std::{Matched, Mux, Route, RouteError, Segment, SegmentError, SegmentKind};

/// Standard middleware.
pub mod middleware {
    pub use httpmux_std::middleware::LoggingMiddleware;
}

/// Testing utilities.
pub mod testing {
    pub use httpmux_std::testing::{CountingHandler, Recorder, RecordingHandler};
}

/// Prelude module - common imports for httpmux.
///
/// # Usage
///
/// ```rust
/// use httpmux::prelude::*;
///
/// let mux: Mux<()> = Mux::new();
/// assert!(mux.lookup(&Method::GET, "/").is_none());
/// ```
pub mod prelude {
    pub use crate::{
        // Routing
        Method,
        Mux,
        Route,
        RouteError,
        // Chains
        Chain,
        Handler,
        Next,
        handler_fn,
        // Request state
        Context,
    };
}

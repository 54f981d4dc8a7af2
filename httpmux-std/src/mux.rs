//! Method multiplexer.
//!
//! [`Mux`] keeps one routing trie per HTTP method. Routes are registered
//! during startup through `&mut Mux`; afterwards the mux is only read, so a
//! fully built `Mux` can be shared across threads behind an `Arc` and looked
//! up concurrently without locking.
//!
//! # Example
//!
//! ```rust
//! use httpmux_core::{Context, Next, handler_fn};
//! use httpmux_std::Mux;
//! use http::Method;
//!
//! let mut mux: Mux<String> = Mux::new();
//! mux.get("/users/:id", handler_fn(|out: &mut String, ctx: &mut Context, _next: &mut Next<'_, String>| {
//!     out.push_str(ctx.value_by_name("id"));
//! }))
//! .unwrap();
//!
//! let mut out = String::new();
//! assert!(mux.serve(&Method::GET, "/users/42", &mut out));
//! assert_eq!(out, "42");
//! assert!(!mux.serve(&Method::POST, "/users/42", &mut out));
//! ```

use crate::{error::RouteError, section::Section};
use http::Method;
use httpmux_core::{Chain, Context, Handler};
use std::{
    collections::{HashMap, hash_map::Entry},
    fmt,
    sync::Arc,
};

// ============================================================================
// Route payload
// ============================================================================

/// What a route is registered with.
///
/// Both forms are resolved into a single [`Chain`] when the route is added.
pub enum Route<R> {
    /// A plain handler; it becomes the route's only step.
    Handler(Arc<dyn Handler<R>>),
    /// Middleware plus a terminal handler.
    Chain(Chain<R>),
}

impl<R: 'static> Route<R> {
    /// A route backed by a single handler.
    pub fn handler<H: Handler<R>>(handler: H) -> Self {
        Self::Handler(Arc::new(handler))
    }

    /// The canonical chain for this route.
    pub fn into_chain(self) -> Chain<R> {
        match self {
            Self::Handler(handler) => Chain::new().shared_handler(handler),
            Self::Chain(chain) => chain,
        }
    }
}

impl<R: 'static> From<Chain<R>> for Route<R> {
    fn from(chain: Chain<R>) -> Self {
        Self::Chain(chain)
    }
}

impl<R: 'static> fmt::Debug for Route<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Handler(_) => f.write_str("Route::Handler"),
            Self::Chain(chain) => f.debug_tuple("Route::Chain").field(chain).finish(),
        }
    }
}

// ============================================================================
// Lookup result
// ============================================================================

/// A successful lookup: the route's chain and the captured parameters.
pub struct Matched<'a, R> {
    chain: &'a Chain<R>,
    context: Context,
    trailing_slash: bool,
}

impl<'a, R: 'static> Matched<'a, R> {
    /// The matched route's chain.
    pub fn chain(&self) -> &'a Chain<R> {
        self.chain
    }

    /// Parameters captured during the lookup.
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Parameters captured during the lookup, mutably.
    pub fn context_mut(&mut self) -> &mut Context {
        &mut self.context
    }

    /// Take the context, dropping the match.
    pub fn into_context(self) -> Context {
        self.context
    }

    /// Whether the matched route was registered with a trailing `/`.
    pub fn trailing_slash(&self) -> bool {
        self.trailing_slash
    }

    /// Run the chain with the captured context, returning the context
    /// afterwards so scratch values set by handlers can be inspected.
    pub fn serve(self, req: &mut R) -> Context {
        let mut context = self.context;
        self.chain.serve(req, &mut context);
        context
    }
}

impl<R: 'static> fmt::Debug for Matched<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matched")
            .field("chain", self.chain)
            .field("context", &self.context)
            .field("trailing_slash", &self.trailing_slash)
            .finish()
    }
}

// ============================================================================
// Mux
// ============================================================================

/// Routes requests to chains by method and path.
pub struct Mux<R> {
    roots: HashMap<Method, Section<R>>,
}

impl<R: 'static> Default for Mux<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: 'static> Mux<R> {
    /// Create a mux with no routes.
    pub fn new() -> Self {
        Self {
            roots: HashMap::new(),
        }
    }

    /// Register a route.
    ///
    /// On error nothing is added, not even an empty trie for `method`.
    pub fn register(
        &mut self,
        method: Method,
        pattern: &str,
        route: Route<R>,
    ) -> Result<(), RouteError> {
        let result = self.insert(&method, pattern, route.into_chain());

        #[cfg(feature = "tracing")]
        {
            match &result {
                Ok(()) => tracing::debug!(%method, pattern, "route registered"),
                Err(error) => tracing::warn!(%method, pattern, %error, "route rejected"),
            }
        }

        result
    }

    fn insert(&mut self, method: &Method, pattern: &str, chain: Chain<R>) -> Result<(), RouteError> {
        match self.roots.entry(method.clone()) {
            Entry::Occupied(mut entry) => entry.get_mut().add_route(pattern, chain),
            Entry::Vacant(entry) => {
                let mut root = Section::root();
                root.add_route(pattern, chain)?;
                entry.insert(root);
                Ok(())
            }
        }
    }

    /// Register a single handler.
    pub fn handle<H: Handler<R>>(
        &mut self,
        method: Method,
        pattern: &str,
        handler: H,
    ) -> Result<(), RouteError> {
        self.register(method, pattern, Route::handler(handler))
    }

    /// Register a middleware chain.
    pub fn handle_chain(
        &mut self,
        method: Method,
        pattern: &str,
        chain: Chain<R>,
    ) -> Result<(), RouteError> {
        self.register(method, pattern, Route::Chain(chain))
    }

    /// Register a `GET` handler.
    pub fn get<H: Handler<R>>(&mut self, pattern: &str, handler: H) -> Result<(), RouteError> {
        self.handle(Method::GET, pattern, handler)
    }

    /// Register a `POST` handler.
    pub fn post<H: Handler<R>>(&mut self, pattern: &str, handler: H) -> Result<(), RouteError> {
        self.handle(Method::POST, pattern, handler)
    }

    /// Register a `PUT` handler.
    pub fn put<H: Handler<R>>(&mut self, pattern: &str, handler: H) -> Result<(), RouteError> {
        self.handle(Method::PUT, pattern, handler)
    }

    /// Register a `PATCH` handler.
    pub fn patch<H: Handler<R>>(&mut self, pattern: &str, handler: H) -> Result<(), RouteError> {
        self.handle(Method::PATCH, pattern, handler)
    }

    /// Register a `DELETE` handler.
    pub fn delete<H: Handler<R>>(&mut self, pattern: &str, handler: H) -> Result<(), RouteError> {
        self.handle(Method::DELETE, pattern, handler)
    }

    /// Register a `HEAD` handler.
    pub fn head<H: Handler<R>>(&mut self, pattern: &str, handler: H) -> Result<(), RouteError> {
        self.handle(Method::HEAD, pattern, handler)
    }

    /// Register an `OPTIONS` handler.
    pub fn options<H: Handler<R>>(&mut self, pattern: &str, handler: H) -> Result<(), RouteError> {
        self.handle(Method::OPTIONS, pattern, handler)
    }

    /// Find the route for `method` and `path`.
    ///
    /// Every kind of miss (unknown method, no structural match, or a match on
    /// a node with no handler) yields `None`.
    pub fn lookup(&self, method: &Method, path: &str) -> Option<Matched<'_, R>> {
        let mut context = Context::new();
        let section = self
            .roots
            .get(method)
            .and_then(|root| root.find_route(path, &mut context));

        #[cfg(feature = "tracing")]
        {
            tracing::trace!(%method, path, matched = section.is_some(), "route lookup");
        }

        let section = section?;
        Some(Matched {
            chain: section.chain()?,
            context,
            trailing_slash: section.trailing_slash(),
        })
    }

    /// Look up and run the route for `method` and `path`.
    ///
    /// Returns `false` when no route matches; what to send back in that case is
    /// up to the caller.
    pub fn serve(&self, method: &Method, path: &str, req: &mut R) -> bool {
        match self.lookup(method, path) {
            Some(matched) => {
                matched.serve(req);
                true
            }
            None => false,
        }
    }

    /// Methods with at least one registered route.
    pub fn methods(&self) -> impl Iterator<Item = &Method> {
        self.roots.keys()
    }
}

impl<R: 'static> fmt::Debug for Mux<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mux")
            .field("methods", &self.roots.keys().collect::<Vec<_>>())
            .finish()
    }
}

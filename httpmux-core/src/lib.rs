//! # httpmux-core
//!
//! Core types for the httpmux router.
//!
//! This crate has no dependencies and is designed to be imported by
//! middleware crates that don't need the routing trie in `httpmux-std`.
//!
//! # Building Blocks
//!
//! ## [`Handler`]
//!
//! The unit of request processing. Middleware and terminal handlers share the
//! same trait: both receive the host's request value, the per-request
//! [`Context`], and a [`Next`] continuation.
//!
//! ## [`Chain`]
//!
//! An ordered list of middleware plus one terminal handler. A chain is an
//! immutable definition; it is shared by every request that hits its route.
//!
//! ## [`Next`]
//!
//! The per-invocation cursor over a [`Chain`]. Each call to [`Chain::serve`]
//! creates a fresh `Next`, so concurrent requests on the same route never
//! share cursor state.
//!
//! ## [`Context`]
//!
//! Captured path parameters (by position and by name) plus a free-form
//! scratch map for cooperating middleware.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod chain;
mod context;
mod handler;

// Re-exports
pub use chain::{Chain, ChainState, Next};
pub use context::Context;
pub use handler::{Handler, HandlerFn, handler_fn};

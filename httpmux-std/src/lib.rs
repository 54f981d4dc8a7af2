//! # httpmux-std
//!
//! Standard implementations for the httpmux router.
//!
//! This crate provides:
//! - **Pattern parsing**: [`Segment`], [`SegmentKind`]
//! - **Method multiplexer**: [`Mux`] with one routing trie per HTTP method
//! - **Route payloads**: [`Route`], resolved into a [`Chain`] at registration
//! - **Errors**: [`RouteError`], [`SegmentError`]
//! - **Standard middleware**: [`middleware::LoggingMiddleware`]
//! - **Testing utilities**: [`testing`]
//!
//! [`Chain`]: httpmux_core::Chain

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core types
pub use httpmux_core;

// Modules
pub mod error;
pub mod middleware;
pub mod mux;
mod section;
pub mod segment;
pub mod testing;

pub use error::{RouteError, SegmentError};
pub use mux::{Matched, Mux, Route};
pub use segment::{Segment, SegmentKind};

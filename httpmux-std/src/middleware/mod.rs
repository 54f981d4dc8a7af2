//! Standard middleware.

mod logging;

pub use logging::LoggingMiddleware;

//! Observability for the bookshelf service.
//!
//! Structured JSON logging only. Logging is read-only with respect to the
//! store: no side effects on request handling, no background threads.

mod logger;

pub use logger::{Logger, Severity};

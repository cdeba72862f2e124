//! Observability module
//!
//! Structured logging for scaffolding and documentation runs.

pub mod logging;

pub use logging::{LogFormat, init_logging};

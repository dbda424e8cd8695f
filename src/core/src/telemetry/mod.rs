//! Logging and instrumentation plumbing.

pub mod logging;

pub use logging::{init_logging, token_preview, LogFormat, LoggingConfig};

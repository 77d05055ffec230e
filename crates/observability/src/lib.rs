//! Tracing and logging (shared setup).

pub use self::tracing::{LogFormat, UnknownLogFormat, init};

/// Tracing configuration (filters, output format).
pub mod tracing;

//! logbound: shape-preserving truncation of JSON values for logs
//!
//! This library provides:
//! - A truncator that bounds sequence lengths and string lengths at every
//!   nesting level while keeping every mapping key
//! - Structured (`bound_*`) and text (`render_*`) outputs
//! - Payload logging helpers, step timings, and logging/config setup

pub mod config;
pub mod logging;
pub mod payload;
pub mod timing;
pub mod truncate;

#[cfg(test)]
mod test_support;

pub use config::Config;
pub use payload::PayloadLogger;
pub use timing::Timings;
pub use truncate::{bound_text, DiagnosticSink, Limits, TracingSink, TruncateError, Truncator};

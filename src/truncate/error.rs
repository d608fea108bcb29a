//! Truncation error types
//!
//! These never reach callers of the infallible entry points; they are
//! handed to the [`DiagnosticSink`](super::DiagnosticSink) instead.

use thiserror::Error;

/// Internal failure while bounding or rendering a value
#[derive(Debug, Error)]
pub enum TruncateError {
    /// Serializing the bounded value to its structured-text form failed
    #[error("Failed to render value: {0}")]
    Render(#[from] serde_json::Error),

    /// Writing into the output buffer failed
    #[error("Failed to format value: {0}")]
    Format(#[from] std::fmt::Error),
}

//! Diagnostic channel for truncation failures

use super::TruncateError;

/// Write-only sink for internal truncation failures
///
/// Implementations must not panic; the truncator calls this from inside its
/// failure boundary and returns a fallback value right after.
pub trait DiagnosticSink: Send + Sync {
    /// Record one failure. `context` names the entry point that failed.
    fn record_error(&self, context: &str, error: &TruncateError);
}

/// Default sink: one `error` event on the `tracing` subscriber
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record_error(&self, context: &str, error: &TruncateError) {
        tracing::error!("Error in {}: {}", context, error);
    }
}

//! Step timings for slow operations
//!
//! Collects `(elapsed, message)` pairs while a multi-step operation runs and
//! logs them together at the end, one `info` line per step.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Default)]
pub struct Timings {
    entries: Vec<(Duration, String)>,
}

impl Timings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the time since `start` under `msg`.
    ///
    /// Returns the current instant so the caller can restart its clock.
    pub fn save(&mut self, start: Instant, msg: impl Into<String>) -> Instant {
        let now = Instant::now();
        self.push(now.saturating_duration_since(start), msg);
        now
    }

    /// Record an already measured step
    pub fn push(&mut self, elapsed: Duration, msg: impl Into<String>) {
        self.entries.push((elapsed, msg.into()));
    }

    /// Log every recorded step
    pub fn log(&self) {
        for line in self.lines() {
            tracing::info!("{}", line);
        }
    }

    /// [`save`](Self::save) followed by [`log`](Self::log)
    pub fn save_and_log(&mut self, start: Instant, msg: impl Into<String>) -> Instant {
        let now = self.save(start, msg);
        self.log();
        now
    }

    /// Formatted steps, e.g. `1.25s: fetched rows`
    pub fn lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|(elapsed, msg)| format!("{:.2}s: {}", elapsed.as_secs_f64(), msg))
            .collect()
    }

    pub fn entries(&self) -> &[(Duration, String)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

//! Request/response body logging
//!
//! Bodies such as base64 images or large API responses are bounded before
//! they reach the log sink.

use crate::truncate::{Limits, Truncator};
use serde_json::Value;

/// Logs JSON payloads through a [`Truncator`]
#[derive(Debug, Clone)]
pub struct PayloadLogger {
    truncator: Truncator,
    limits: Limits,
}

impl Default for PayloadLogger {
    fn default() -> Self {
        Self::new(Truncator::new(), Limits::for_any())
    }
}

impl PayloadLogger {
    pub fn new(truncator: Truncator, limits: Limits) -> Self {
        Self { truncator, limits }
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Log an outgoing body. Skips the rendering entirely unless debug is on.
    pub fn request(&self, target: &str, body: &Value) {
        if !tracing::enabled!(tracing::Level::DEBUG) {
            return;
        }
        tracing::debug!("Making request to: {}", target);
        tracing::debug!("Request body:\n{}", self.render(body));
    }

    /// Log a response body, as an error when `ok` is false.
    ///
    /// Returns the rendered text so callers can attach it to their own errors.
    pub fn response(&self, target: &str, ok: bool, body: &Value) -> String {
        let rendered = self.render(body);
        if ok {
            tracing::debug!("Response from {}:\n{}", target, rendered);
        } else {
            tracing::error!("Error in request to {}:\n{}", target, rendered);
        }
        rendered
    }

    pub fn render(&self, body: &Value) -> String {
        self.truncator.render_any(body, self.limits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::capture;
    use serde_json::json;
    use tracing::Level;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_default_uses_generic_limits() {
        assert_eq!(PayloadLogger::default().limits(), Limits::for_any());
    }

    #[test]
    fn test_response_returns_bounded_rendering() {
        let logger = PayloadLogger::new(Truncator::new(), Limits::new(2, 3));
        let body = json!({"image": "aGVsbG8gd29ybGQ=", "ids": [1, 2, 3, 4]});

        let rendered = logger.response("http://localhost/upload", false, &body);

        assert_eq!(
            rendered,
            "{\n  \"image\": \"aGV...[16 chars]\",\n  \"ids\": [\n    1,\n    2\n  ]\n}"
        );
    }

    #[test]
    fn test_request_logs_nothing_below_debug() {
        let logger = PayloadLogger::default();
        let body = json!({"model": "m", "messages": []});

        let events = capture(LevelFilter::INFO, || {
            logger.request("http://localhost/llm_call", &body)
        });

        assert!(events.is_empty());
    }

    #[test]
    fn test_request_logs_target_and_body_at_debug() {
        let logger = PayloadLogger::new(Truncator::new(), Limits::new(1, 4));
        let body = json!(["abcdefgh", 2, 3]);

        let events = capture(LevelFilter::DEBUG, || {
            logger.request("http://localhost/llm_call", &body)
        });

        let got: Vec<(Level, &str)> = events
            .iter()
            .map(|e| (e.level, e.message.as_str()))
            .collect();
        assert_eq!(
            got,
            [
                (Level::DEBUG, "Making request to: http://localhost/llm_call"),
                (Level::DEBUG, "Request body:\n[abcd...[8 chars]...(3 total elements)]"),
            ]
        );
    }

    #[test]
    fn test_failed_response_logs_error() {
        let logger = PayloadLogger::new(Truncator::new(), Limits::new(5, 5));

        let events = capture(LevelFilter::INFO, || {
            logger.response("http://localhost/x", false, &json!("failure"));
        });

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].level, Level::ERROR);
        assert_eq!(
            events[0].message,
            "Error in request to http://localhost/x:\nfailu...[7 chars]"
        );
    }

    #[test]
    fn test_ok_response_logs_debug_only() {
        let logger = PayloadLogger::new(Truncator::new(), Limits::new(5, 5));
        let body = json!({"ok": true});

        let quiet = capture(LevelFilter::INFO, || {
            logger.response("http://localhost/x", true, &body);
        });
        assert!(quiet.is_empty());

        let events = capture(LevelFilter::DEBUG, || {
            logger.response("http://localhost/x", true, &body);
        });
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].level, Level::DEBUG);
        assert_eq!(
            events[0].message,
            "Response from http://localhost/x:\n{\n  \"ok\": true\n}"
        );
    }
}

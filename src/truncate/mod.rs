//! Shape-preserving truncation of JSON values
//!
//! Bounds a value before it goes into a log line:
//! - sequences keep at most `max_elements` entries
//! - strings keep at most `max_chars` characters, plus a `...[N chars]` note
//! - mappings keep every key; only their values are bounded
//!
//! The same limits apply independently at every nesting level. Two families
//! of operations exist: `bound_*` returns the bounded [`Value`] and
//! `render_*` returns it as text. Rendering never fails from the caller's
//! point of view: an internal error is reported to the [`DiagnosticSink`]
//! and an empty string comes back instead.

mod diagnostics;
mod error;
mod render;

pub use diagnostics::{DiagnosticSink, TracingSink};
pub use error::TruncateError;

use serde_json::{Map, Value};
use std::sync::Arc;

/// Entries kept from each sequence
pub const DEFAULT_MAX_ELEMENTS: usize = 10;

/// Characters kept from each string by the sequence and mapping entry points
pub const DEFAULT_MAX_CHARS: usize = 100;

/// Characters kept from each string when the shape is not known up front
pub const DEFAULT_MAX_CHARS_ANY: usize = 500;

/// Nesting levels kept before a subtree is replaced by a marker
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Per-call truncation limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_elements: usize,
    pub max_chars: usize,
    pub max_depth: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_elements: DEFAULT_MAX_ELEMENTS,
            max_chars: DEFAULT_MAX_CHARS,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Limits {
    pub fn new(max_elements: usize, max_chars: usize) -> Self {
        Self {
            max_elements,
            max_chars,
            ..Self::default()
        }
    }

    /// Limits for values of unknown shape (longer strings survive)
    pub fn for_any() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CHARS_ANY,
            ..Self::default()
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Cut `text` to `max_chars` characters, noting the original length.
///
/// Text of exactly `max_chars` characters is returned unchanged.
pub fn bound_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        None => text.to_string(),
        Some((cut, _)) => format!("{}...[{} chars]", &text[..cut], text.chars().count()),
    }
}

/// Bounds values for logging and reports its own failures
#[derive(Clone)]
pub struct Truncator {
    sink: Arc<dyn DiagnosticSink>,
}

impl Default for Truncator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Truncator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Truncator").finish_non_exhaustive()
    }
}

impl Truncator {
    /// Truncator reporting to the `tracing` subscriber
    pub fn new() -> Self {
        Self::with_sink(Arc::new(TracingSink))
    }

    /// Truncator reporting to a caller-supplied sink
    pub fn with_sink(sink: Arc<dyn DiagnosticSink>) -> Self {
        Self { sink }
    }

    /// Keep the first `max_elements` entries, bounding each one.
    pub fn bound_sequence(&self, seq: &[Value], limits: Limits) -> Vec<Value> {
        bound_items(seq, limits, 0)
    }

    /// Bound every value of `map`. Keys are never dropped.
    pub fn bound_mapping(&self, map: &Map<String, Value>, limits: Limits) -> Map<String, Value> {
        bound_entries(map, limits, 0)
    }

    /// Bound a value of any shape.
    pub fn bound_any(&self, value: &Value, limits: Limits) -> Value {
        match value {
            Value::Array(items) => Value::Array(bound_items(items, limits, 0)),
            Value::Object(map) => Value::Object(bound_entries(map, limits, 0)),
            Value::String(s) => Value::String(bound_text(s, limits.max_chars)),
            Value::Null | Value::Bool(_) | Value::Number(_) => value.clone(),
        }
    }

    /// Render a bounded sequence.
    ///
    /// Sequences that fit render as indented JSON. Sequences that overflowed
    /// render on one line with the original length appended, e.g.
    /// `[0, 1, 2...(10 total elements)]`.
    pub fn render_sequence(&self, seq: &[Value], limits: Limits) -> String {
        self.recover("render_sequence", self.try_render_sequence(seq, limits))
    }

    /// Render a bounded mapping as indented JSON.
    ///
    /// Unlike sequences there is no single-line form, even when a nested
    /// sequence overflowed.
    pub fn render_mapping(&self, map: &Map<String, Value>, limits: Limits) -> String {
        self.recover("render_mapping", self.try_render_mapping(map, limits))
    }

    /// Render a value of any shape. Returns an empty string on failure.
    pub fn render_any(&self, value: &Value, limits: Limits) -> String {
        self.recover("render_any", self.try_render_any(value, limits))
    }

    pub fn try_render_sequence(
        &self,
        seq: &[Value],
        limits: Limits,
    ) -> Result<String, TruncateError> {
        let bounded = self.bound_sequence(seq, limits);
        if seq.len() > limits.max_elements {
            render::overflow_line(&bounded, seq.len())
        } else {
            render::structured(&Value::Array(bounded))
        }
    }

    pub fn try_render_mapping(
        &self,
        map: &Map<String, Value>,
        limits: Limits,
    ) -> Result<String, TruncateError> {
        render::structured(&Value::Object(self.bound_mapping(map, limits)))
    }

    pub fn try_render_any(&self, value: &Value, limits: Limits) -> Result<String, TruncateError> {
        match value {
            Value::Array(items) => self.try_render_sequence(items, limits),
            Value::Object(map) => self.try_render_mapping(map, limits),
            Value::String(s) => Ok(bound_text(s, limits.max_chars)),
            Value::Null | Value::Bool(_) | Value::Number(_) => render::plain(value),
        }
    }

    fn recover(&self, context: &str, result: Result<String, TruncateError>) -> String {
        result.unwrap_or_else(|err| {
            self.sink.record_error(context, &err);
            String::new()
        })
    }
}

fn bound_items(items: &[Value], limits: Limits, depth: usize) -> Vec<Value> {
    items
        .iter()
        .take(limits.max_elements)
        .map(|item| bound_child(item, limits, depth))
        .collect()
}

fn bound_entries(map: &Map<String, Value>, limits: Limits, depth: usize) -> Map<String, Value> {
    map.iter()
        .map(|(key, value)| (key.clone(), bound_child(value, limits, depth)))
        .collect()
}

/// Bound one entry of a container sitting at `depth` (the top level is 0).
fn bound_child(value: &Value, limits: Limits, depth: usize) -> Value {
    match value {
        Value::Array(_) | Value::Object(_) if depth >= limits.max_depth => {
            tracing::debug!("Nesting deeper than {} levels replaced", limits.max_depth);
            Value::String(depth_marker(limits.max_depth))
        }
        Value::Array(items) => Value::Array(bound_items(items, limits, depth + 1)),
        Value::Object(map) => Value::Object(bound_entries(map, limits, depth + 1)),
        Value::String(s) => Value::String(bound_text(s, limits.max_chars)),
        Value::Null | Value::Bool(_) | Value::Number(_) => value.clone(),
    }
}

fn depth_marker(max_depth: usize) -> String {
    format!("...[depth limit {} reached]", max_depth)
}

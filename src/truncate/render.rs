//! Text renderings of bounded values

use super::TruncateError;
use serde_json::Value;
use std::fmt::Write;

/// Canonical multi-line form: 2-space indent, keys in insertion order
pub(super) fn structured(value: &Value) -> Result<String, TruncateError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Single-line form used when a sequence had more entries than were kept.
///
/// `[a, b, c...(N total elements)]` where N is the original length.
/// Strings are written bare and numbers as JSON text, so `[0, 1, x...]`
/// reads the same as the older Python-produced lines. Booleans, null and
/// nested containers are written as compact JSON (`true`, `["a",true]`),
/// not Python reprs, so those lines differ from the older output.
pub(super) fn overflow_line(items: &[Value], total: usize) -> Result<String, TruncateError> {
    let mut out = String::from("[");
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write_plain(&mut out, item)?;
    }
    write!(out, "...({} total elements)]", total)?;
    Ok(out)
}

/// Default textual form of a single value
pub(super) fn plain(value: &Value) -> Result<String, TruncateError> {
    let mut out = String::new();
    write_plain(&mut out, value)?;
    Ok(out)
}

// Strings are written bare; everything else as compact JSON.
fn write_plain(out: &mut String, value: &Value) -> Result<(), TruncateError> {
    match value {
        Value::String(s) => out.push_str(s),
        other => write!(out, "{}", other)?,
    }
    Ok(())
}

//! Process-wide logging setup

use anyhow::{bail, Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Build the filter: `RUST_LOG` wins, then `level`.
pub fn build_filter(level: &str) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    level_filter(level)
}

/// Filter for a configured level, ignoring `RUST_LOG`.
pub fn level_filter(level: &str) -> Result<EnvFilter> {
    let directive = normalize_level(level)?;
    EnvFilter::try_new(&directive).with_context(|| format!("Invalid log level: {}", level))
}

/// Map a level name to a filter directive.
///
/// Accepts tracing level names and the Python-style `WARNING`, `CRITICAL`
/// and `FATAL` (any case). Strings containing `=` or `,` are passed through
/// as `EnvFilter` directives. Any other bare word is rejected, since
/// `EnvFilter` would read it as a target and silence every event.
pub fn normalize_level(level: &str) -> Result<String> {
    let level = level.trim();
    if level.contains('=') || level.contains(',') {
        return Ok(level.to_string());
    }

    let normalized = match level.to_ascii_lowercase().as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "info" => "info",
        "warn" | "warning" => "warn",
        "error" | "critical" | "fatal" => "error",
        "off" => "off",
        _ => bail!("Unknown log level: {}", level),
    };
    Ok(normalized.to_string())
}

/// Install the stderr subscriber.
///
/// Only the first call in a process takes effect; later calls return `Ok`.
pub fn init(level: &str) -> Result<()> {
    let filter = build_filter(level)?;

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_target(false),
        )
        .try_init();

    if installed.is_err() {
        tracing::debug!("Logging already initialized");
    }
    Ok(())
}

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use logbound::{Config, Limits, Timings, Truncator};
use serde_json::Value;
use std::io::Read;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "logbound")]
#[command(author, version, long_about = None)]
#[command(about = "Logbound - bound JSON values for safe logging")]
struct Cli {
    /// JSON file to read (default: stdin)
    file: Option<PathBuf>,

    /// Maximum entries kept from each array
    #[arg(short = 'e', long)]
    max_elements: Option<usize>,

    /// Maximum characters kept from each string
    #[arg(short = 'c', long)]
    max_chars: Option<usize>,

    /// Maximum nesting depth kept
    #[arg(long)]
    max_depth: Option<usize>,

    /// Print the bounded value as JSON instead of the log rendering
    #[arg(short, long)]
    structured: bool,

    /// Expected input shape; `array` and `object` use the tighter string cap
    #[arg(short, long, value_enum, default_value_t = Mode::Any)]
    mode: Mode,

    /// Config file (default: platform config dir)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Any JSON value
    Any,
    /// A top-level array
    Array,
    /// A top-level object
    Object,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::from_path(path)?.apply_env(),
        None => Config::load()?,
    };

    let level = if cli.verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };
    logbound::logging::init(level)?;

    let mut timings = Timings::new();
    let start = Instant::now();

    let input = read_input(cli.file.as_deref())?;
    let value: Value = serde_json::from_str(&input).context("Input is not valid JSON")?;
    let start = timings.save(start, format!("parsed {} bytes", input.len()));

    let mut limits = match cli.mode {
        Mode::Any => config.limits.any(),
        Mode::Array | Mode::Object => config.limits.structured(),
    };
    if let Some(max_elements) = cli.max_elements {
        limits.max_elements = max_elements;
    }
    if let Some(max_chars) = cli.max_chars {
        limits.max_chars = max_chars;
    }
    if let Some(max_depth) = cli.max_depth {
        limits.max_depth = max_depth;
    }
    tracing::debug!("Using limits {:?}", limits);

    let output = bound_output(&Truncator::new(), cli.mode, &value, limits, cli.structured)?;
    println!("{}", output);

    timings.save(start, "bounded value");
    if cli.verbose {
        timings.log();
    }
    Ok(())
}

fn bound_output(
    truncator: &Truncator,
    mode: Mode,
    value: &Value,
    limits: Limits,
    structured: bool,
) -> Result<String> {
    let output = match (mode, value) {
        (Mode::Any, _) if structured => {
            serde_json::to_string_pretty(&truncator.bound_any(value, limits))?
        }
        (Mode::Any, _) => truncator.render_any(value, limits),
        (Mode::Array, Value::Array(items)) if structured => {
            serde_json::to_string_pretty(&truncator.bound_sequence(items, limits))?
        }
        (Mode::Array, Value::Array(items)) => truncator.render_sequence(items, limits),
        (Mode::Object, Value::Object(map)) if structured => {
            serde_json::to_string_pretty(&truncator.bound_mapping(map, limits))?
        }
        (Mode::Object, Value::Object(map)) => truncator.render_mapping(map, limits),
        (Mode::Array, _) => bail!("Expected a JSON array"),
        (Mode::Object, _) => bail!("Expected a JSON object"),
    };
    Ok(output)
}

fn read_input(file: Option<&std::path::Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

//! Notes Guard Entry Point
//!
//! Runs as a PreToolUse hook: initializes logging, loads configuration,
//! evaluates the payload on stdin and prints a deny decision on stdout.
//! Any error exits with status 1.

use anyhow::{Context, Result};
use tracing::{Level, debug};
use tracing_subscriber::{EnvFilter, fmt};

use notes_guard::{Config, HookRunner};

fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env();

    // Initialize logging
    init_logging(&config.logging.level);
    debug!(?config, "Configuration loaded");

    let runner = HookRunner::new(config);
    runner
        .run(std::io::stdin().lock(), std::io::stdout().lock())
        .context("Failed to evaluate hook payload")?;

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Everything goes to stderr; stdout is reserved for the decision payload.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .without_time()
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();
}

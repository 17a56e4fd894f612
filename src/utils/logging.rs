// file: src/utils/logging.rs
// description: Tracing subscriber initialization with optional ANSI coloring

use colored::*;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs the global subscriber. `RUST_LOG` wins over the verbosity flag when set.
/// Returns false if a subscriber was already installed.
pub fn init_logger(colored_output: bool, verbose: bool) -> bool {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .with_ansi(colored_output);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .is_ok()
}

pub fn format_success(msg: &str, colored_output: bool) -> String {
    if colored_output {
        format!("{} {}", "✓".green().bold(), msg.green())
    } else {
        format!("✓ {}", msg)
    }
}

pub fn format_error(msg: &str, colored_output: bool) -> String {
    if colored_output {
        format!("{} {}", "✗".red().bold(), msg.red())
    } else {
        format!("✗ {}", msg)
    }
}

pub fn format_warning(msg: &str, colored_output: bool) -> String {
    if colored_output {
        format!("{} {}", "⚠".yellow().bold(), msg.yellow())
    } else {
        format!("⚠ {}", msg)
    }
}

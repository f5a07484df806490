//! Diagnostic tracing for the viewer.
//!
//! The TUI owns the terminal while it runs, so anything written to stderr
//! lands on top of the canvas. Pass a log file to keep diagnostics out of the
//! way; without one, output goes to stderr and is only visible before the
//! alternate screen opens or after it closes.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG` env var. Defaults to `warn` if unset.
///
/// # Example
/// ```bash
/// RUST_LOG=ecatty=debug ecatty --log-file ecatty.log
/// ```
pub fn init(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    match log_file {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("create log file {}", path.display()))?;
            registry
                .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
                .init();
        }
        None => {
            registry
                .with(fmt::layer().with_writer(std::io::stderr).compact())
                .init();
        }
    }
    Ok(())
}

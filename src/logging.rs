//! Tracing setup.

use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Installs a file-backed `fmt` subscriber.
///
/// Logs go to a file so they do not interfere with the terminal UI.
/// `RUST_LOG` takes precedence over `default_filter`.
pub fn init_file_tracing(log_file: &Path, default_filter: &str) -> anyhow::Result<()> {
    let file = std::fs::File::create(log_file)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

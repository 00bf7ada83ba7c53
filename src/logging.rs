use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

use crate::config::{Config, DEFAULT_LOG_FILTER};

/// Send `tracing` output to a file in the data directory. The TUI owns the
/// terminal, so nothing may be written to stdout or stderr while it runs.
pub(crate) fn init(config: &Config) -> Result<()> {
    std::fs::create_dir_all(&config.data_dir).with_context(|| {
        format!(
            "Failed to create data directory: {}",
            config.data_dir.display()
        )
    })?;

    let path = config.log_path();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| {
        EnvFilter::new(DEFAULT_LOG_FILTER)
    });

    let file_log = fmt::layer()
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(file_log)
        .try_init()
        .context("Failed to install log subscriber")?;
    Ok(())
}

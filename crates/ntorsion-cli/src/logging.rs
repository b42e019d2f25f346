use crate::error::{CliError, Result};
use anyhow::anyhow;
use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing::Subscriber;
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*};

/// Maps `-v`/`-q` to the most verbose level that is still emitted.
pub fn level_filter(verbosity: u8, quiet: bool) -> LevelFilter {
    match (quiet, verbosity) {
        (true, _) => LevelFilter::ERROR,
        (false, 0) => LevelFilter::WARN,
        (false, 1) => LevelFilter::INFO,
        (false, 2) => LevelFilter::DEBUG,
        (false, _) => LevelFilter::TRACE,
    }
}

/// Compact colored events on stderr, plus plain events with thread ids and
/// targets in `log_file` when one is given.
fn build_subscriber(
    verbosity: u8,
    quiet: bool,
    log_file: Option<File>,
) -> impl Subscriber + Send + Sync + 'static {
    let stderr_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .compact();
    let file_layer = log_file.map(|file| {
        fmt::layer()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_thread_ids(true)
    });

    tracing_subscriber::registry()
        .with(level_filter(verbosity, quiet))
        .with(stderr_layer)
        .with(file_layer)
}

/// Installs the global subscriber. Fails if the log file cannot be created or a
/// global subscriber is already set.
pub fn setup_logging(verbosity: u8, quiet: bool, log_file: Option<&Path>) -> Result<()> {
    let file = log_file.map(File::create).transpose()?;
    build_subscriber(verbosity, quiet, file)
        .try_init()
        .map_err(|e| CliError::Other(anyhow!("Failed to install the logger: {e}")))
}

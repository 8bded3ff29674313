//! File-backed `tracing` setup.
//!
//! A full-screen UI owns stdout, so diagnostics only ever go to the file named by
//! `FOLIO_LOG_FILE`. Without it, logging stays disabled.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::EnvConfig;

/// Build a subscriber writing to `log_file`.
///
/// `RUST_LOG` wins when set; otherwise the default level is `info` (`debug` with
/// `FOLIO_DEBUG=1`).
pub fn build_subscriber(log_file: File, debug: bool) -> impl tracing::Subscriber + Send + Sync {
    let default_level = if debug { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let fmt_layer = fmt::layer()
        .with_ansi(false)
        .with_writer(Arc::new(log_file));

    tracing_subscriber::registry().with(fmt_layer).with(env_filter)
}

/// Install the global subscriber if a log file is configured.
///
/// Returns `Ok(false)` when logging is disabled.
pub fn init_file_logging(config: &EnvConfig) -> std::io::Result<bool> {
    let Some(path) = config.log_file.as_deref() else {
        return Ok(false);
    };
    init_global(Path::new(path), config.debug)?;
    Ok(true)
}

fn init_global(path: &Path, debug: bool) -> std::io::Result<()> {
    let log_file = File::create(path)?;
    build_subscriber(log_file, debug)
        .try_init()
        .map_err(std::io::Error::other)
}

use std::{fs, path::Path};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*, registry};

use crate::{
    constants::FILE_NAMES,
    error::{FolioError, Result},
};

const DEFAULT_DIRECTIVES: &str = "info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env("FOLIO_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Sends tracing output to a daily log file under `log_dir`; the terminal UI
/// owns stdout. Keep the returned guard alive until exit so buffered lines
/// are flushed.
pub fn init_tracing(log_dir: &Path) -> Result<WorkerGuard> {
    fs::create_dir_all(log_dir).map_err(|e| FolioError::io(log_dir, e))?;

    let appender = tracing_appender::rolling::daily(log_dir, FILE_NAMES.log_prefix);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let file_layer = fmt::layer()
        .with_target(true)
        .with_ansi(false)
        .with_writer(writer);

    registry()
        .with(env_filter())
        .with(file_layer)
        .try_init()
        .map_err(|e| FolioError::Logging(e.to_string()))?;

    Ok(guard)
}

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

use crate::model::LogConfig;
use crate::tui::AppError;

/// Where logs should go: the command-line path wins over the config file.
pub fn log_path(config: &LogConfig, override_path: Option<&Path>) -> Option<PathBuf> {
    override_path
        .map(Path::to_path_buf)
        .or_else(|| config.file.as_ref().map(PathBuf::from))
}

/// Install a file-backed tracing subscriber. The terminal belongs to the
/// TUI, so with no log file nothing is installed and events are dropped.
pub fn init(config: &LogConfig, override_path: Option<&Path>) -> Result<(), AppError> {
    let Some(path) = log_path(config, override_path) else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| AppError::LogFile {
            path: path.clone(),
            source: e,
        })?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .unwrap_or_else(|_| EnvFilter::new("tasking=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .init();
    Ok(())
}

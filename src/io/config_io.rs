use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::AppConfig;

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE: &str = "tasking.toml";

/// Environment variable naming a config file
pub const CONFIG_ENV: &str = "TASKING_CONFIG";

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(PathBuf),
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("could not serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

/// Pick the config file to load: an explicit path wins, then the
/// environment variable, then `tasking.toml` in `cwd` if present.
/// Returns `Ok(None)` when there is nothing to load.
pub fn resolve_config_path(
    explicit: Option<&Path>,
    env_value: Option<&str>,
    cwd: &Path,
) -> Result<Option<PathBuf>, ConfigError> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        return Ok(Some(path.to_path_buf()));
    }
    if let Some(value) = env_value
        && !value.is_empty()
    {
        let path = PathBuf::from(value);
        if !path.is_file() {
            return Err(ConfigError::NotFound(path));
        }
        return Ok(Some(path));
    }
    let local = cwd.join(CONFIG_FILE);
    Ok(local.is_file().then_some(local))
}

/// Read and parse a config file
pub fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Resolve and load the config, falling back to defaults when no file exists
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let env_value = std::env::var(CONFIG_ENV).ok();
    let cwd = std::env::current_dir().map_err(|e| ConfigError::ReadError {
        path: PathBuf::from("."),
        source: e,
    })?;
    match resolve_config_path(explicit, env_value.as_deref(), &cwd)? {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading config");
            read_config(&path)
        }
        None => Ok(AppConfig::default()),
    }
}

/// The default config rendered as TOML
pub fn default_config_toml() -> Result<String, ConfigError> {
    Ok(toml::to_string_pretty(&AppConfig::default())?)
}

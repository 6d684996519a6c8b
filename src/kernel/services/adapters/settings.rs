use crate::kernel::services::ports::NavigatorConfig;
use std::path::{Path, PathBuf};

use super::dirs::get_config_dir;

const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join(SETTINGS_FILE))
}

/// Writes a default settings file if none exists yet.
pub fn ensure_config_file_at(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    if !path.exists() {
        let content = serde_json::to_string_pretty(&NavigatorConfig::default())
            .unwrap_or_else(|_| "{}".to_string());
        std::fs::write(path, content)?;
    }
    Ok(())
}

pub fn ensure_config_file() -> std::io::Result<PathBuf> {
    let path = get_config_path().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Cannot determine settings directory",
        )
    })?;
    ensure_config_file_at(&path)?;
    Ok(path)
}

pub fn load_config(path: &Path) -> Result<NavigatorConfig, ConfigError> {
    let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads `path`, or the per-user settings file, falling back to defaults.
pub fn load_config_or_default(path: Option<&Path>) -> NavigatorConfig {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => match ensure_config_file() {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!(error = %e, "no settings file, using defaults");
                return NavigatorConfig::default();
            }
        },
    };

    match load_config(&path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "failed to load settings, using defaults");
            NavigatorConfig::default()
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/settings.rs"]
mod tests;

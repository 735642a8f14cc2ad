//! User configuration
//!
//! Loaded from `$BRAIN_SYSTEM_CONFIG` or `<config dir>/brain-system/config.toml`.
//! A missing file means defaults; a malformed one is an error naming the path.
//!
//! ```toml
//! default_target = "gemini"
//! default_secretary = "claude"
//! archive_file = "/home/me/brain/archives.json"
//! status_success_ms = 3000
//! status_error_ms = 5000
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::AiSource;
use crate::utils::get_config_path;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Failed to locate config file: {0}")]
    Locate(String),

    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// AI the composed prompt is handed off to
    pub default_target: AiSource,
    /// AI opened from the secretary panel
    pub default_secretary: AiSource,
    /// JSON file with daily archive entries; the built-in sample is used when unset
    pub archive_file: Option<PathBuf>,
    /// Lifetime of success status messages
    pub status_success_ms: u64,
    /// Lifetime of error status messages
    pub status_error_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_target: AiSource::Gemini,
            default_secretary: AiSource::Claude,
            archive_file: None,
            status_success_ms: 3000,
            status_error_ms: 5000,
        }
    }
}

impl AppConfig {
    /// Load from the resolved config location
    pub fn load() -> Result<Self, ConfigError> {
        let path = get_config_path().map_err(|e| ConfigError::Locate(e.to_string()))?;
        Self::load_from(&path)
    }

    /// Load from an explicit path; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        let config: AppConfig = toml::from_str(&raw)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;

        debug!(path = %path.display(), ?config, "config loaded");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = AppConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.default_target, AiSource::Gemini);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_target = \"grok\"\n").unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.default_target, AiSource::Grok);
        assert_eq!(config.default_secretary, AiSource::Claude);
        assert_eq!(config.status_success_ms, 3000);
        assert!(config.archive_file.is_none());
    }

    #[test]
    fn test_full_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
default_target = "gpt"
default_secretary = "gemini"
archive_file = "/data/archives.json"
status_success_ms = 1000
status_error_ms = 2000
"#,
        )
        .unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.default_target, AiSource::Gpt);
        assert_eq!(config.default_secretary, AiSource::Gemini);
        assert_eq!(config.archive_file, Some(PathBuf::from("/data/archives.json")));
        assert_eq!(config.status_success_ms, 1000);
        assert_eq!(config.status_error_ms, 2000);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_target = \"bard\"\n").unwrap();

        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("config.toml"));
    }
}

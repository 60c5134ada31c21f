//! File-based configuration (YAML)
//!
//! User-level config lives at `~/.config/tracelog/config.yaml`:
//!
//! ```yaml
//! enabled: true
//! sink: console   # auto | console | platform
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigResult;
use crate::sink::SinkKind;

/// Configuration file structure
///
/// Every key is optional; absent keys fall through to the next source.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FileConfig {
    /// Force tracing output on or off
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Sink to build the global registry with
    #[serde(default)]
    pub sink: Option<SinkKind>,
}

impl FileConfig {
    /// Path of the user-level config file
    pub fn user_path() -> PathBuf {
        // Use XDG config directory (~/.config on Linux, ~/Library/Application Support on macOS)
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
        config_dir.join("tracelog").join("config.yaml")
    }

    /// Load a config file, returning the empty config if it doesn't exist
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Load the user-level config file
    pub fn load_user() -> ConfigResult<Self> {
        Self::load(Self::user_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_empty_config() {
        let dir = tempdir().unwrap();
        let config = FileConfig::load(dir.path().join("config.yaml")).unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_load_yaml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "enabled: true\nsink: platform\n").unwrap();

        let config = FileConfig::load(&path).unwrap();
        assert_eq!(config.enabled, Some(true));
        assert_eq!(config.sink, Some(SinkKind::Platform));
    }

    #[test]
    fn test_partial_yaml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "sink: console\n").unwrap();

        let config = FileConfig::load(&path).unwrap();
        assert_eq!(config.enabled, None);
        assert_eq!(config.sink, Some(SinkKind::Console));
    }

    #[test]
    fn test_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "").unwrap();
        assert_eq!(FileConfig::load(&path).unwrap(), FileConfig::default());
    }

    #[test]
    fn test_malformed_yaml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "enabled: [not, a, bool").unwrap();

        assert!(matches!(FileConfig::load(&path), Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_user_path() {
        let path = FileConfig::user_path();
        assert!(path.ends_with("tracelog/config.yaml"));
    }
}

//! Configuration describing where copied assets are placed.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

/// File name searched for by [`AssetsConfig::discover`].
pub const DEFAULT_CONFIG_FILE: &str = "css-assets.config.json";

/// User supplied options controlling asset relocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AssetsConfig {
    /// Directory receiving copied assets. When unset, references are left untouched.
    pub assets_path: Option<PathBuf>,
    /// Interpret `assets_path` relative to the destination stylesheet directory instead of as an
    /// absolute filesystem path.
    pub relative: bool,
}

impl AssetsConfig {
    /// Configuration copying assets into `assets_path`.
    pub fn new(assets_path: impl Into<PathBuf>, relative: bool) -> Self {
        Self {
            assets_path: Some(assets_path.into()),
            relative,
        }
    }

    /// Attempt to load configuration from the provided directory.
    ///
    /// A missing or malformed file falls back to the default, which disables copying.
    pub fn discover(dir: &Path) -> Self {
        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        if !candidate.is_file() {
            return Self::default();
        }

        Self::from_path(&candidate).unwrap_or_else(|err| {
            tracing::warn!("{err}, using defaults");
            Self::default()
        })
    }

    /// Read configuration from a specific JSON file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Whether assets should be copied at all.
    pub fn is_enabled(&self) -> bool {
        self.assets_path.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults_disable_copying() {
        let config = AssetsConfig::default();
        assert!(!config.is_enabled());
        assert!(!config.relative);
    }

    #[test]
    fn reads_camel_case_keys() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, r#"{"assetsPath": "assets", "relative": true}"#)?;

        let config = AssetsConfig::from_path(&path)?;
        assert_eq!(config, AssetsConfig::new("assets", true));
        assert!(config.is_enabled());
        Ok(())
    }

    #[test]
    fn relative_defaults_to_false() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, r#"{"assetsPath": "/srv/static"}"#)?;

        let config = AssetsConfig::from_path(&path)?;
        assert_eq!(config, AssetsConfig::new("/srv/static", false));
        Ok(())
    }

    #[test]
    fn from_path_reports_parse_errors() -> std::io::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "{ not json")?;

        let err = AssetsConfig::from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        Ok(())
    }

    #[test]
    fn discover_falls_back_to_defaults() -> std::io::Result<()> {
        let dir = tempdir()?;
        assert_eq!(AssetsConfig::discover(dir.path()), AssetsConfig::default());

        fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "{ not json")?;
        assert_eq!(AssetsConfig::discover(dir.path()), AssetsConfig::default());
        Ok(())
    }

    #[test]
    fn discover_reads_config_file() -> std::io::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, r#"{"assetsPath": "static"}"#)?;

        let config = AssetsConfig::discover(dir.path());
        assert_eq!(config, AssetsConfig::new("static", false));
        Ok(())
    }
}

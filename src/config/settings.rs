//! User settings for the ledger
//!
//! Settings are optional. A missing config file means every field takes
//! its default.

use std::path::PathBuf;

use log::warn;
use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::error::LedgerError;
use crate::models::UNCATEGORIZED;

/// User settings for the ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Ledger file used when `--file` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,

    /// Category assigned when a record is added with a blank category
    #[serde(default = "default_category")]
    pub default_category: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_category() -> String {
    UNCATEGORIZED.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            data_file: None,
            default_category: default_category(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_default(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| LedgerError::Io(format!("Failed to read settings file: {}", e)))?;

        Ok(serde_json::from_str(&contents)?)
    }

    /// Load settings, falling back to defaults when the file is unusable
    ///
    /// Settings are optional, so a broken settings file never stops a command.
    pub fn load_or_warn(paths: &LedgerPaths) -> Self {
        Self::load_or_default(paths).unwrap_or_else(|e| {
            warn!(
                "Ignoring settings file {}: {}",
                paths.settings_file().display(),
                e
            );
            Settings::default()
        })
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| LedgerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.data_file, None);
        assert_eq!(settings.default_category, "Uncategorized");
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_config_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_default(&paths).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_config_dir(temp_dir.path().join("cfg"));

        let mut settings = Settings::default();
        settings.data_file = Some(PathBuf::from("/tmp/books.csv"));
        settings.default_category = "Misc".to_string();

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_default(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_config_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"data_file": "x.csv"}"#).unwrap();

        let loaded = Settings::load_or_default(&paths).unwrap();
        assert_eq!(loaded.data_file, Some(PathBuf::from("x.csv")));
        assert_eq!(loaded.default_category, "Uncategorized");
        assert_eq!(loaded.schema_version, 1);
    }

    #[test]
    fn test_malformed_file_is_json_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_config_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_default(&paths).unwrap_err();
        assert!(matches!(err, LedgerError::Json(_)));
    }

    #[test]
    fn test_load_or_warn_falls_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_config_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{oops").unwrap();

        assert_eq!(Settings::load_or_warn(&paths), Settings::default());
    }
}

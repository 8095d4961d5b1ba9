//! Path management for the ledger
//!
//! The ledger itself lives in a single CSV file, `data.csv` in the working
//! directory by default. The optional settings file lives in a per-user
//! config directory.
//!
//! ## Config Directory Resolution Order
//!
//! 1. `LEDGER_CLI_CONFIG_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/ledger-cli` or `~/.config/ledger-cli`
//! 3. Windows: `%APPDATA%\ledger-cli`

use std::path::{Path, PathBuf};

use super::settings::Settings;
use crate::error::LedgerError;

/// File name used when neither the command line nor the settings name one
pub const DEFAULT_DATA_FILE: &str = "data.csv";

/// Manages the paths used by the ledger
#[derive(Debug, Clone)]
pub struct LedgerPaths {
    config_dir: PathBuf,
}

impl LedgerPaths {
    /// Create a new LedgerPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, LedgerError> {
        let config_dir = if let Ok(custom) = std::env::var("LEDGER_CLI_CONFIG_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { config_dir })
    }

    /// Create LedgerPaths with a custom config directory (useful for testing)
    pub fn with_config_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    /// Get the config directory (~/.config/ledger-cli/ or equivalent)
    pub fn config_dir(&self) -> &PathBuf {
        &self.config_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("config.json")
    }

    /// Ensure the config directory exists
    pub fn ensure_directories(&self) -> Result<(), LedgerError> {
        std::fs::create_dir_all(&self.config_dir)
            .map_err(|e| LedgerError::Io(format!("Failed to create config directory: {}", e)))
    }
}

/// Pick the data file: explicit override, then settings, then `data.csv`
pub fn resolve_data_file(override_path: Option<&Path>, settings: &Settings) -> PathBuf {
    if let Some(path) = override_path {
        return path.to_path_buf();
    }

    settings
        .data_file
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
}

/// Resolve the default config directory based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, LedgerError> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg).join("ledger-cli"));
    }

    let home = std::env::var("HOME")
        .map_err(|_| LedgerError::Config("HOME environment variable not set".into()))?;
    Ok(PathBuf::from(home).join(".config").join("ledger-cli"))
}

/// Resolve the default config directory based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, LedgerError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| LedgerError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("ledger-cli"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_config_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_config_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.config_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var("LEDGER_CLI_CONFIG_DIR", custom_path);

        let paths = LedgerPaths::new().unwrap();
        assert_eq!(paths.config_dir(), temp_dir.path());

        env::remove_var("LEDGER_CLI_CONFIG_DIR");
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_config_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(temp_dir.path().join("nested").exists());
    }

    #[test]
    fn test_resolve_data_file_priority() {
        let mut settings = Settings::default();
        assert_eq!(
            resolve_data_file(None, &settings),
            PathBuf::from(DEFAULT_DATA_FILE)
        );

        settings.data_file = Some(PathBuf::from("books/ledger.csv"));
        assert_eq!(
            resolve_data_file(None, &settings),
            PathBuf::from("books/ledger.csv")
        );

        let cli = PathBuf::from("other.csv");
        assert_eq!(resolve_data_file(Some(&cli), &settings), cli);
    }
}

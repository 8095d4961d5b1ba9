//! Configuration module for the ledger
//!
//! This module provides configuration management including:
//! - Config directory and data file resolution
//! - Optional user settings persistence

pub mod paths;
pub mod settings;

pub use paths::{resolve_data_file, LedgerPaths, DEFAULT_DATA_FILE};
pub use settings::Settings;

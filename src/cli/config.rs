//! CLI command for showing and initialising configuration

use std::path::Path;

use crate::config::{LedgerPaths, Settings};
use crate::error::LedgerResult;

/// Handle `config`
pub fn handle_config_command(
    paths: &LedgerPaths,
    settings: &Settings,
    data_file: &Path,
    init: bool,
) -> LedgerResult<()> {
    if init {
        if paths.settings_file().exists() {
            println!(
                "Settings file already exists: {}",
                paths.settings_file().display()
            );
        } else {
            settings.save(paths)?;
            println!("Wrote settings to {}", paths.settings_file().display());
        }
        println!();
    }

    println!("Ledger Configuration");
    println!("====================");
    println!("Config directory: {}", paths.config_dir().display());
    println!("Settings file:    {}", paths.settings_file().display());
    println!("Data file:        {}", data_file.display());
    println!();
    println!("Settings:");
    println!("  Default category: {}", settings.default_category);

    Ok(())
}

//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod config;
pub mod export;
pub mod record;
pub mod report;

pub use config::handle_config_command;
pub use export::handle_export_command;
pub use record::{handle_add_command, handle_list_command, AddArgs, FilterArgs, ListArgs};
pub use report::{handle_monthly_command, handle_summary_command};

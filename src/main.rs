use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::warn;

use ledger::cli::{
    handle_add_command, handle_config_command, handle_export_command, handle_list_command,
    handle_monthly_command, handle_summary_command, AddArgs, FilterArgs, ListArgs,
};
use ledger::config::{resolve_data_file, LedgerPaths, Settings};
use ledger::shell::Shell;
use ledger::storage::RecordStore;

#[derive(Parser)]
#[command(
    name = "ledger",
    version,
    about = "Personal finance ledger backed by a local CSV file",
    long_about = "Records income (positive amounts) and expenses (negative amounts) \
                  in a CSV file, lists and filters them, and prints overall and \
                  monthly totals. Run without a subcommand for the interactive menu."
)]
struct Cli {
    /// Ledger file (default: data.csv in the current directory)
    #[arg(short, long, global = true, env = "LEDGER_DATA_FILE")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive menu
    #[command(alias = "menu")]
    Shell,

    /// Add a record
    Add(AddArgs),

    /// List records, optionally filtered
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show total income, expense and net balance
    Summary(FilterArgs),

    /// Show income, expense and net per month
    Monthly(FilterArgs),

    /// Export all records to a CSV file
    Export {
        /// Output file path
        output: String,
    },

    /// Show current configuration and paths
    Config {
        /// Write a default settings file if none exists
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let paths = LedgerPaths::new();
    let settings = match &paths {
        Ok(paths) => Settings::load_or_warn(paths),
        Err(e) => {
            warn!("{}; using default settings", e);
            Settings::default()
        }
    };
    let data_file = resolve_data_file(cli.file.as_deref(), &settings);

    let open_store = || RecordStore::open(&data_file);

    match cli.command {
        Some(Commands::Add(args)) => handle_add_command(&mut open_store(), &settings, args)?,
        Some(Commands::List(args)) => handle_list_command(&open_store(), args)?,
        Some(Commands::Summary(filter)) => handle_summary_command(&open_store(), filter)?,
        Some(Commands::Monthly(filter)) => handle_monthly_command(&open_store(), filter)?,
        Some(Commands::Export { output }) => handle_export_command(&open_store(), &output)?,
        Some(Commands::Config { init }) => {
            let paths = paths?;
            handle_config_command(&paths, &settings, &data_file, init)?
        }
        Some(Commands::Shell) | None => {
            let mut store = open_store();
            let stdin = io::stdin();
            let stdout = io::stdout();
            Shell::new(&mut store, &settings.default_category, stdin.lock(), stdout.lock())
                .run()
                .context("interactive session failed")?;
        }
    }

    Ok(())
}

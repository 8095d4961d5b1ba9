//! Ledger - command-line personal finance ledger
//!
//! Records income and expense entries in a local CSV file, lists and
//! filters them, and computes overall and monthly totals.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Config directory, data file resolution, and settings
//! - `error`: Custom error types
//! - `models`: The ledger record and amount parsing
//! - `storage`: Line codec, whole-file writes, and the record store
//! - `services`: Adding records and filtering them
//! - `reports`: Aggregate and monthly totals
//! - `display`: Terminal table formatting
//! - `export`: Export of the full record set
//! - `cli`: Subcommand handlers
//! - `shell`: The interactive menu
//!
//! # Example
//!
//! ```rust,no_run
//! use ledger::reports::aggregate_totals;
//! use ledger::storage::RecordStore;
//!
//! let store = RecordStore::open("data.csv");
//! let totals = aggregate_totals(store.records());
//! println!("{}", totals.format_terminal());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod shell;
pub mod storage;

pub use error::{LedgerError, LedgerResult};

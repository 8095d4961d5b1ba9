//! Core data models for the ledger

pub mod record;

pub use record::{parse_amount, Record, MONTH_KEY_LEN, UNCATEGORIZED};

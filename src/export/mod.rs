//! Export module for the ledger
//!
//! Writes the full record set to a user-named CSV file.

pub mod csv;

pub use self::csv::{export_records_csv, export_to_file};

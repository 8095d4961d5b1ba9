//! Display formatting for terminal output

pub mod record;

pub use record::{format_record_row, format_record_table};

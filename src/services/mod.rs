//! Business logic layer
//!
//! Services sit between the command surfaces (CLI and interactive shell)
//! and the record store.

pub mod filter;
pub mod record;

pub use filter::{filter_by_category, filter_by_date, RecordFilter};
pub use record::{today, CreateRecordInput, RecordService, DATE_FORMAT};

//! Record service
//!
//! The only way new records enter the ledger. Fills in defaults for blank
//! fields and hands the finished record to the store.

use chrono::Local;
use log::info;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Record;
use crate::storage::RecordStore;

/// Date format used for records and the "today" default
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Input for creating a new record
///
/// The amount is already parsed: callers decide how to react to bad
/// amount text before a record is ever built.
#[derive(Debug, Clone, Default)]
pub struct CreateRecordInput {
    /// Blank or missing means today
    pub date: Option<String>,
    pub amount: f64,
    /// Blank or missing means the default category
    pub category: Option<String>,
    pub note: Option<String>,
}

impl CreateRecordInput {
    pub fn new(amount: f64) -> Self {
        Self {
            amount,
            ..Self::default()
        }
    }

    /// Build the record, filling blank fields from the given defaults
    ///
    /// Non-blank fields are kept exactly as given. A line break in any text
    /// field is rejected, since the ledger stores one record per line.
    pub fn into_record(self, today: &str, default_category: &str) -> LedgerResult<Record> {
        let date = non_blank(self.date).unwrap_or_else(|| today.to_string());
        let category = non_blank(self.category).unwrap_or_else(|| default_category.to_string());
        let note = self.note.unwrap_or_default();

        single_line("date", &date)?;
        single_line("category", &category)?;
        single_line("note", &note)?;

        Ok(Record {
            date,
            amount: self.amount,
            category,
            note,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn single_line(field: &'static str, value: &str) -> LedgerResult<()> {
    if value.contains(['\n', '\r']) {
        return Err(LedgerError::LineBreak(field));
    }
    Ok(())
}

/// Current local date as `YYYY-MM-DD`
pub fn today() -> String {
    Local::now().date_naive().format(DATE_FORMAT).to_string()
}

/// Service for adding records
pub struct RecordService<'a> {
    store: &'a mut RecordStore,
    default_category: &'a str,
}

impl<'a> RecordService<'a> {
    /// Create a new record service
    pub fn new(store: &'a mut RecordStore, default_category: &'a str) -> Self {
        Self {
            store,
            default_category,
        }
    }

    /// Add a record dated today unless the input says otherwise
    pub fn add(&mut self, input: CreateRecordInput) -> LedgerResult<Record> {
        self.add_on(input, &today())
    }

    /// Add a record, using `today` for a blank date
    pub fn add_on(&mut self, input: CreateRecordInput, today: &str) -> LedgerResult<Record> {
        let record = input.into_record(today, self.default_category)?;
        self.store.append_and_persist(record.clone())?;
        info!(
            "Added record {} {} {}",
            record.date, record.amount, record.category
        );
        Ok(record)
    }
}

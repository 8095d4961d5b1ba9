//! Ledger record model
//!
//! A record is one ledger entry. Dates are kept as text in `YYYY-MM-DD`
//! form and are never validated as calendar dates: range filters and month
//! bucketing compare them as strings, which sorts correctly only because
//! the format is fixed-width and big-endian.

use crate::error::{LedgerError, LedgerResult};

/// Category assigned to records entered without one
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Number of leading date characters that form the month key (`YYYY-MM`)
pub const MONTH_KEY_LEN: usize = 7;

/// One ledger entry
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Entry date, expected as `YYYY-MM-DD`
    pub date: String,
    /// Signed amount: income when non-negative, expense when negative
    pub amount: f64,
    pub category: String,
    /// Free text, may be empty
    pub note: String,
}

impl Record {
    pub fn new(
        date: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
        note: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            amount,
            category: category.into(),
            note: note.into(),
        }
    }

    /// Non-negative amounts count as income (zero included)
    pub fn is_income(&self) -> bool {
        self.amount >= 0.0
    }

    pub fn is_expense(&self) -> bool {
        self.amount < 0.0
    }

    /// The `YYYY-MM` bucket for this record, or `None` if the date is too short
    pub fn month_key(&self) -> Option<&str> {
        match self.date.char_indices().nth(MONTH_KEY_LEN) {
            Some((end, _)) => Some(&self.date[..end]),
            None if self.date.chars().count() == MONTH_KEY_LEN => Some(&self.date),
            None => None,
        }
    }
}

/// Parse user- or file-supplied amount text
///
/// Surrounding whitespace is ignored. Anything that is not a finite decimal
/// number is rejected; callers decide whether that aborts or defaults.
pub fn parse_amount(input: &str) -> LedgerResult<f64> {
    let trimmed = input.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(LedgerError::InvalidAmount(trimmed.to_string())),
    }
}

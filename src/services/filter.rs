//! Record filtering
//!
//! Date bounds are compared as strings. That orders `YYYY-MM-DD` dates
//! chronologically; anything else sorts however its text sorts.

use crate::models::Record;

/// Keep records with `from <= date <= to`; an empty bound is open
pub fn filter_by_date(records: &[Record], from: &str, to: &str) -> Vec<Record> {
    records
        .iter()
        .filter(|r| from.is_empty() || r.date.as_str() >= from)
        .filter(|r| to.is_empty() || r.date.as_str() <= to)
        .cloned()
        .collect()
}

/// Keep records whose category matches exactly (case-sensitive)
pub fn filter_by_category(records: &[Record], category: &str) -> Vec<Record> {
    records
        .iter()
        .filter(|r| r.category == category)
        .cloned()
        .collect()
}

/// Combined list filter: date range first, then category
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    /// Inclusive lower date bound
    pub from: Option<String>,
    /// Inclusive upper date bound
    pub to: Option<String>,
    /// Exact category
    pub category: Option<String>,
}

impl RecordFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the inclusive lower date bound
    pub fn from_date(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    pub fn to_date(mut self, to: impl Into<String>) -> Self {
        self.to = Some(to.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Apply the filter, preserving record order
    ///
    /// An empty category means no category filter.
    pub fn apply(&self, records: &[Record]) -> Vec<Record> {
        let from = self.from.as_deref().unwrap_or_default();
        let to = self.to.as_deref().unwrap_or_default();
        let dated = filter_by_date(records, from, to);

        match self.category.as_deref() {
            Some(category) if !category.is_empty() => filter_by_category(&dated, category),
            _ => dated,
        }
    }
}

//! Reports module
//!
//! Aggregations over an in-memory record set:
//! - Summary: income, expense and net balance
//! - Monthly: the same totals bucketed by `YYYY-MM`

pub mod monthly;
pub mod summary;

pub use monthly::{monthly_totals, MonthlyReport};
pub use summary::{aggregate_totals, SummaryReport, Totals};

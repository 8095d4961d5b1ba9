//! Aggregate summary
//!
//! Income is the sum of non-negative amounts, expense the sum of the
//! absolute values of negative amounts, net their difference.

use crate::models::Record;

/// Income, expense and net over some set of records
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    pub income: f64,
    /// Always reported as a positive magnitude
    pub expense: f64,
    pub net: f64,
}

impl Totals {
    /// Fold one amount into the totals
    pub fn add(&mut self, amount: f64) {
        if amount >= 0.0 {
            self.income += amount;
        } else {
            self.expense += -amount;
        }
        self.net = self.income - self.expense;
    }

    /// `(income, expense, net)`
    pub fn as_tuple(&self) -> (f64, f64, f64) {
        (self.income, self.expense, self.net)
    }

    /// Format the totals for terminal display
    pub fn format_terminal(&self) -> String {
        format!(
            "Total income : {:.2}\nTotal expense: {:.2}\nNet balance  : {:.2}\n",
            self.income, self.expense, self.net
        )
    }
}

/// Compute income, expense and net over `records`
pub fn aggregate_totals(records: &[Record]) -> Totals {
    let mut totals = Totals::default();
    for record in records {
        totals.add(record.amount);
    }
    totals
}

/// Overall income, expense and net for a record set
#[derive(Debug, Clone)]
pub struct SummaryReport {
    pub record_count: usize,
    pub totals: Totals,
}

impl SummaryReport {
    /// Generate the summary over `records`
    pub fn generate(records: &[Record]) -> Self {
        Self {
            record_count: records.len(),
            totals: aggregate_totals(records),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        self.totals.format_terminal()
    }
}

//! Monthly Report
//!
//! Buckets records by month key (the first seven characters of the date)
//! and totals each bucket. Keys come out in ascending string order, which
//! for `YYYY-MM` keys is chronological.

use std::collections::BTreeMap;

use crate::models::Record;

use super::summary::Totals;

/// Per-month totals keyed by `YYYY-MM`
///
/// Records whose date is shorter than a month key are left out.
pub fn monthly_totals(records: &[Record]) -> BTreeMap<String, Totals> {
    let mut months: BTreeMap<String, Totals> = BTreeMap::new();

    for record in records {
        if let Some(key) = record.month_key() {
            months.entry(key.to_string()).or_default().add(record.amount);
        }
    }

    months
}

/// Monthly income/expense/net breakdown
#[derive(Debug, Clone, Default)]
pub struct MonthlyReport {
    pub months: BTreeMap<String, Totals>,
}

impl MonthlyReport {
    /// Generate the report over a record set
    pub fn generate(records: &[Record]) -> Self {
        Self {
            months: monthly_totals(records),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{:<10}{:<12}{:<12}{}\n",
            "Month", "Income", "Expense", "Net"
        ));
        output.push_str(&"-".repeat(50));
        output.push('\n');

        for (month, totals) in &self.months {
            output.push_str(&format!(
                "{:<10}{:<12.2}{:<12.2}{:.2}\n",
                month, totals.income, totals.expense, totals.net
            ));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_bucketing() {
        let records = vec![
            Record::new("2024-02-01", 10.0, "Gift", ""),
            Record::new("2024-01-15", 200.0, "Salary", ""),
            Record::new("2024-01-20", -50.0, "Food", ""),
        ];

        let months = monthly_totals(&records);
        let keys: Vec<&str> = months.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["2024-01", "2024-02"]);
        assert_eq!(months["2024-01"].as_tuple(), (200.0, 50.0, 150.0));
        assert_eq!(months["2024-02"].as_tuple(), (10.0, 0.0, 10.0));
    }

    #[test]
    fn test_short_dates_are_excluded() {
        let records = vec![
            Record::new("2024-1", 5.0, "X", ""),
            Record::new("", 5.0, "X", ""),
            Record::new("2024-03", -1.0, "X", ""),
        ];

        let months = monthly_totals(&records);
        assert_eq!(months.len(), 1);
        assert_eq!(months["2024-03"].as_tuple(), (0.0, 1.0, -1.0));
    }

    #[test]
    fn test_format_terminal() {
        let records = vec![
            Record::new("2024-01-15", 200.0, "Salary", ""),
            Record::new("2024-01-20", -50.0, "Food", ""),
        ];

        let output = MonthlyReport::generate(&records).format_terminal();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "Month     Income      Expense     Net");
        assert_eq!(lines[1], "-".repeat(50));
        assert_eq!(lines[2], "2024-01   200.00      50.00       150.00");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_empty_report_has_header_only() {
        let output = MonthlyReport::generate(&[]).format_terminal();
        assert_eq!(output.lines().count(), 2);
    }
}

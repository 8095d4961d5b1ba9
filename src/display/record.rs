//! Record display formatting
//!
//! Left-aligned fixed-width columns: date 12, amount 12, category 15, and
//! the note takes the rest. Wider values push the following columns right.

use crate::models::Record;

const DATE_WIDTH: usize = 12;
const AMOUNT_WIDTH: usize = 12;
const CATEGORY_WIDTH: usize = 15;
const SEPARATOR_WIDTH: usize = 60;

/// Format a single record as a table row
pub fn format_record_row(record: &Record) -> String {
    format!(
        "{:<dw$}{:<aw$.2}{:<cw$}{}",
        record.date,
        record.amount,
        record.category,
        record.note,
        dw = DATE_WIDTH,
        aw = AMOUNT_WIDTH,
        cw = CATEGORY_WIDTH,
    )
}

/// Format a list of records as a table
pub fn format_record_table(records: &[Record]) -> String {
    if records.is_empty() {
        return "No records found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<dw$}{:<aw$}{:<cw$}{}\n",
        "Date",
        "Amount",
        "Category",
        "Note",
        dw = DATE_WIDTH,
        aw = AMOUNT_WIDTH,
        cw = CATEGORY_WIDTH,
    ));
    output.push_str(&"-".repeat(SEPARATOR_WIDTH));
    output.push('\n');

    for record in records {
        output.push_str(&format_record_row(record));
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_record_row() {
        let record = Record::new("2024-01-05", -42.5, "Food", "groceries, weekly");
        assert_eq!(
            format_record_row(&record),
            "2024-01-05  -42.50      Food           groceries, weekly"
        );
    }

    #[test]
    fn test_amount_has_two_decimals() {
        let record = Record::new("2024-01-07", 1500.0, "Salary", "");
        assert!(format_record_row(&record).contains("1500.00"));
    }

    #[test]
    fn test_format_empty_table() {
        assert_eq!(format_record_table(&[]), "No records found.\n");
    }

    #[test]
    fn test_format_table_header() {
        let records = vec![Record::new("2024-01-07", 1500.0, "Salary", "")];
        let table = format_record_table(&records);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "Date        Amount      Category       Note");
        assert_eq!(lines[1], "-".repeat(60));
        assert_eq!(lines[2].trim_end(), "2024-01-07  1500.00     Salary");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_long_category_overflows() {
        let record = Record::new("2024-01-07", 1.0, "A very long category", "n");
        assert!(format_record_row(&record).ends_with("A very long categoryn"));
    }
}

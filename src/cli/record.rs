//! Record CLI commands
//!
//! Implements CLI commands for adding and listing records.

use clap::Args;

use crate::config::Settings;
use crate::display::format_record_table;
use crate::error::LedgerResult;
use crate::models::parse_amount;
use crate::reports::SummaryReport;
use crate::services::{CreateRecordInput, RecordFilter, RecordService};
use crate::storage::RecordStore;

/// Arguments for `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Amount (positive for income, negative for expense)
    #[arg(allow_hyphen_values = true)]
    pub amount: String,

    /// Record date (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    pub date: Option<String>,

    /// Category, defaults to the configured default category
    #[arg(short, long)]
    pub category: Option<String>,

    /// Free-text note
    #[arg(short, long)]
    pub note: Option<String>,
}

/// Date range and category filters shared by list and report commands
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Earliest date to include (YYYY-MM-DD, inclusive)
    #[arg(long)]
    pub from: Option<String>,

    /// Latest date to include (YYYY-MM-DD, inclusive)
    #[arg(long)]
    pub to: Option<String>,

    /// Only records in exactly this category (case-sensitive)
    #[arg(short, long)]
    pub category: Option<String>,
}

impl From<FilterArgs> for RecordFilter {
    fn from(args: FilterArgs) -> Self {
        RecordFilter {
            from: args.from,
            to: args.to,
            category: args.category,
        }
    }
}

/// Arguments for `list`
#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Print income/expense totals for the listed records
    #[arg(short, long)]
    pub summary: bool,
}

/// Handle `add`
///
/// A bad amount is returned as an error before anything is written.
pub fn handle_add_command(
    store: &mut RecordStore,
    settings: &Settings,
    args: AddArgs,
) -> LedgerResult<()> {
    let amount = parse_amount(&args.amount)?;

    let input = CreateRecordInput {
        date: args.date,
        amount,
        category: args.category,
        note: args.note,
    };

    let record = RecordService::new(store, &settings.default_category).add(input)?;
    println!(
        "Record added: {} {:.2} {}",
        record.date, record.amount, record.category
    );

    Ok(())
}

/// Handle `list`
pub fn handle_list_command(store: &RecordStore, args: ListArgs) -> LedgerResult<()> {
    let filter = RecordFilter::from(args.filter);
    let records = filter.apply(store.records());

    print!("{}", format_record_table(&records));

    if args.summary {
        println!();
        print!("{}", SummaryReport::generate(&records).format_terminal());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;

    #[test]
    fn test_filter_args_convert_to_record_filter() {
        let args = FilterArgs {
            from: Some("2024-01-06".into()),
            to: None,
            category: Some("Food".into()),
        };

        let records = vec![
            Record::new("2024-01-05", -10.0, "Food", ""),
            Record::new("2024-01-20", -5.0, "Food", ""),
            Record::new("2024-01-21", 50.0, "Gift", ""),
        ];

        let filtered = RecordFilter::from(args).apply(&records);
        assert_eq!(filtered, vec![Record::new("2024-01-20", -5.0, "Food", "")]);
    }
}

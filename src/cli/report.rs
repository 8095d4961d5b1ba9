//! CLI commands for reports

use crate::error::LedgerResult;
use crate::reports::{MonthlyReport, SummaryReport};
use crate::services::RecordFilter;
use crate::storage::RecordStore;

use super::record::FilterArgs;

/// Handle `summary`
pub fn handle_summary_command(store: &RecordStore, filter: FilterArgs) -> LedgerResult<()> {
    let records = RecordFilter::from(filter).apply(store.records());
    print!("{}", SummaryReport::generate(&records).format_terminal());
    Ok(())
}

/// Handle `monthly`
pub fn handle_monthly_command(store: &RecordStore, filter: FilterArgs) -> LedgerResult<()> {
    let records = RecordFilter::from(filter).apply(store.records());
    print!("{}", MonthlyReport::generate(&records).format_terminal());
    Ok(())
}

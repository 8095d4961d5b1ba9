//! CLI command for data export

use crate::error::LedgerResult;
use crate::export::export_to_file;
use crate::storage::RecordStore;

/// Handle `export`: write every record, not a filtered view
pub fn handle_export_command(store: &RecordStore, output: &str) -> LedgerResult<()> {
    let count = export_to_file(store.records(), output)?;
    println!("Exported {} records to {}", count, output.trim());
    Ok(())
}

//! CSV Export functionality
//!
//! Exports use exactly the ledger file encoding, so an export can be used
//! as a ledger file itself.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use log::info;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Record;
use crate::storage::{encode_record, HEADER};

/// Write the header and every record to `writer`
pub fn export_records_csv<W: Write>(records: &[Record], writer: &mut W) -> LedgerResult<()> {
    writeln!(writer, "{}", HEADER).map_err(|e| LedgerError::Export(e.to_string()))?;

    for record in records {
        writeln!(writer, "{}", encode_record(record))
            .map_err(|e| LedgerError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Export every record to the named file, returning how many were written
///
/// A blank name is rejected before any file is created.
pub fn export_to_file(records: &[Record], name: &str) -> LedgerResult<usize> {
    let name = name.trim();
    if name.is_empty() {
        return Err(LedgerError::EmptyFilename);
    }

    let path = PathBuf::from(name);
    let file = File::create(&path).map_err(|e| {
        LedgerError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;

    let mut writer = BufWriter::new(file);
    export_records_csv(records, &mut writer)?;
    writer
        .flush()
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    info!("Exported {} records to {}", records.len(), path.display());
    Ok(records.len())
}

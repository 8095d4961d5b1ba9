//! Record store backed by the ledger CSV file
//!
//! The whole record set is held in memory. Every mutation rewrites the
//! entire file: header first, then one line per record in store order.
//! Loading never fails; unreadable input degrades to fewer records.

use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::LedgerResult;
use crate::models::{parse_amount, Record};

use super::codec::{self, FIELD_COUNT, HEADER};
use super::file_io::{read_text_if_exists, write_lines_atomic};

/// Owns the in-memory record sequence and its backing file
#[derive(Debug)]
pub struct RecordStore {
    path: PathBuf,
    records: Vec<Record>,
}

impl RecordStore {
    /// Create an empty store for the given file without touching disk
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            records: Vec::new(),
        }
    }

    /// Create a store and load whatever the file currently holds
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let mut store = Self::new(path);
        store.load();
        store
    }

    /// Replace the in-memory records with the file's contents
    pub fn load(&mut self) -> &[Record] {
        self.records = load_records(&self.path);
        &self.records
    }

    /// Rewrite the backing file from the in-memory records
    pub fn save(&self) -> LedgerResult<()> {
        save_records(&self.path, &self.records)?;
        debug!(
            "Saved {} records to {}",
            self.records.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Append a record and persist the full set
    ///
    /// If the rewrite fails the record is dropped again, so memory and
    /// file stay in step.
    pub fn append_and_persist(&mut self, record: Record) -> LedgerResult<()> {
        self.records.push(record);

        if let Err(e) = self.save() {
            self.records.pop();
            return Err(e);
        }

        debug!("Appended record #{}", self.records.len());
        Ok(())
    }

    /// Get all loaded records in file order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Get the number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get the backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Load all records from a file
///
/// An absent or unreadable file yields an empty set.
pub fn load_records<P: AsRef<Path>>(path: P) -> Vec<Record> {
    let path = path.as_ref();

    match read_text_if_exists(path) {
        Ok(Some(text)) => parse_records(&text),
        Ok(None) => {
            debug!("Ledger file {} not found, starting empty", path.display());
            Vec::new()
        }
        Err(e) => {
            warn!("{}; treating ledger as empty", e);
            Vec::new()
        }
    }
}

/// Parse ledger text into records
///
/// The first line is dropped if it contains the header, otherwise it is
/// data (older files have no header). Blank lines and lines with fewer
/// than four fields are skipped. A bad amount becomes `0.0` for that
/// record only.
pub fn parse_records(text: &str) -> Vec<Record> {
    let mut records = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;

        if index == 0 && codec::is_header(line) {
            debug!("Skipping header line");
            continue;
        }

        if line.is_empty() {
            continue;
        }

        match parse_line(line, line_number) {
            Some(record) => records.push(record),
            None => warn!("Skipping malformed line {}: {:?}", line_number, line),
        }
    }

    records
}

fn parse_line(line: &str, line_number: usize) -> Option<Record> {
    let mut fields = codec::decode_line(line);
    if fields.len() < FIELD_COUNT {
        return None;
    }
    fields.truncate(FIELD_COUNT);

    let note = fields.pop()?;
    let category = fields.pop()?;
    let raw_amount = fields.pop()?;
    let date = fields.pop()?;

    let amount = parse_amount(&raw_amount).unwrap_or_else(|_| {
        warn!(
            "Line {}: amount {:?} is not a number, using 0.0",
            line_number, raw_amount
        );
        0.0
    });

    Some(Record {
        date,
        amount,
        category,
        note,
    })
}

/// Write the header and every record, replacing the file
pub fn save_records<P: AsRef<Path>>(path: P, records: &[Record]) -> LedgerResult<()> {
    let lines = std::iter::once(HEADER.to_string()).chain(records.iter().map(codec::encode_record));
    write_lines_atomic(path, lines)
}

//! Storage layer for the ledger
//!
//! Provides the line codec, whole-file replacement helpers, and the record
//! store that owns the in-memory ledger.

pub mod codec;
pub mod file_io;
pub mod records;

pub use codec::{decode_line, encode_field, encode_record, HEADER};
pub use file_io::{read_text_if_exists, write_lines_atomic};
pub use records::{load_records, parse_records, save_records, RecordStore};

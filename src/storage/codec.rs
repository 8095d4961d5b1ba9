//! Line codec for the ledger file
//!
//! One record per line, four comma-separated fields in the order
//! `date,amount,category,note`. Text fields containing a comma or a double
//! quote are wrapped in quotes with embedded quotes doubled.

use crate::models::Record;

/// Field separator
pub const DELIMITER: char = ',';

/// Quote character used to protect fields containing the delimiter
pub const QUOTE: char = '"';

/// Canonical header written at the top of every saved file
pub const HEADER: &str = "date,amount,category,note";

/// Number of fields a data line must carry
pub const FIELD_COUNT: usize = 4;

/// Whether a first line is a header rather than data
///
/// Matching is by substring so headers with trailing junk (or a BOM) are
/// still recognised.
pub fn is_header(line: &str) -> bool {
    line.contains(HEADER)
}

/// Split a line into fields
///
/// A quote toggles the quoted-span state and is never part of the field,
/// except for a doubled quote inside a quoted span, which yields one literal
/// quote. Delimiters inside a quoted span are kept as text. The result always
/// has at least one field.
pub fn decode_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            QUOTE if in_quotes && chars.peek() == Some(&QUOTE) => {
                current.push(QUOTE);
                chars.next();
            }
            QUOTE => in_quotes = !in_quotes,
            DELIMITER if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }

    fields.push(current);
    fields
}

/// Quote a field if it contains the delimiter or a quote
pub fn encode_field(s: &str) -> String {
    if s.contains(DELIMITER) || s.contains(QUOTE) {
        format!("\"{}\"", s.replace(QUOTE, "\"\""))
    } else {
        s.to_string()
    }
}

/// Encode a record as one line (without the trailing newline)
///
/// The amount uses shortest round-trip formatting (`1500`, `-42.5`), not the
/// two-decimal display form.
pub fn encode_record(record: &Record) -> String {
    format!(
        "{}{DELIMITER}{}{DELIMITER}{}{DELIMITER}{}",
        encode_field(&record.date),
        record.amount,
        encode_field(&record.category),
        encode_field(&record.note),
    )
}

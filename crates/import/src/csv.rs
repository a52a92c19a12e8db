use crate::decode::{decode_rows, Statement};
use crate::ImportError;

/// Parse a delimited-text statement.
///
/// Quote handling (commas inside quoted fields, stripped quotes) comes from
/// the csv crate's RFC4180 reader; `flexible` tolerates the ragged label
/// rows banks put above the real header.
pub fn parse_csv(text: &str) -> Result<Statement, ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows: Vec<Vec<String>> = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(record.iter().map(|s| s.to_string()).collect());
    }

    decode_rows(&rows)
}

use calamine::{open_workbook_auto_from_rs, Data, Reader};
use std::io::Cursor;

use crate::decode::{decode_rows, Statement};
use crate::ImportError;

/// Parse an XLSX/XLS statement from its raw bytes.
///
/// Only the first sheet is read; cells are stringified and pushed through
/// the same row decoder as CSV input. Excel date cells surface as serial
/// numbers, which the date normalizer understands.
pub fn parse_workbook(bytes: &[u8]) -> Result<Statement, ImportError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;

    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(ImportError::EmptyFile)?;
    let range = workbook.worksheet_range(&sheet)?;

    let rows: Vec<Vec<String>> = range
        .rows()
        .map(|row| row.iter().map(cell_text).collect())
        .collect();

    decode_rows(&rows)
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => float_text(*f),
        Data::Bool(b) => b.to_string(),
        // Serial days; the time fraction is irrelevant for statement dates.
        Data::DateTime(dt) => (dt.as_f64().trunc() as i64).to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
    }
}

fn float_text(f: f64) -> String {
    if f.fract() == 0.0 && f.abs() < 1e15 {
        (f as i64).to_string()
    } else {
        f.to_string()
    }
}

pub mod csv;
pub mod xlsx;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fmt;
use thiserror::Error;

use munim_core::JournalRow;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV write error: {0}")]
    Csv(#[from] ::csv::Error),
    #[error("workbook write error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
    #[error("export buffer error: {0}")]
    Io(#[from] std::io::Error),
}

/// One output cell. Numbers stay numeric so the workbook writer can emit
/// real number cells instead of text.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(Decimal),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => write!(f, "{s}"),
            Cell::Number(n) => write!(f, "{n}"),
        }
    }
}

pub const JOURNAL_HEADERS: [&str; 5] =
    ["Date", "Amount", "Debit Account", "Credit Account", "Narration"];

/// Flatten journal rows into the tabular shape both serializers take.
pub fn journal_sheet(rows: &[JournalRow]) -> Vec<Vec<Cell>> {
    rows.iter()
        .map(|row| {
            vec![
                Cell::Text(row.date.to_string()),
                Cell::Number(row.amount),
                Cell::Text(row.debit_account.clone()),
                Cell::Text(row.credit_account.clone()),
                Cell::Text(row.narration.clone()),
            ]
        })
        .collect()
}

/// `<base>[_YYYY-MM-DD].<ext>` download filename.
pub fn export_filename(base: &str, date: Option<NaiveDate>, ext: &str) -> String {
    match date {
        Some(d) => format!("{base}_{d}.{ext}"),
        None => format!("{base}.{ext}"),
    }
}

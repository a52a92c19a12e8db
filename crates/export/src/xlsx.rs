use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{Format, Workbook, Worksheet};

use munim_core::JournalRow;

use crate::{journal_sheet, Cell, ExportError, JOURNAL_HEADERS};

const MAX_COLUMN_WIDTH: usize = 50;

const INSTRUCTIONS: &[(&str, &str)] = &[
    ("Date", "Transaction date in YYYY-MM-DD format. Do not change."),
    ("Amount", "Movement amount taken from the bank statement."),
    (
        "Debit Account",
        "Pre-filled with the bank ledger for deposits; fill in the expense or party ledger for payments.",
    ),
    (
        "Credit Account",
        "Pre-filled with the bank ledger for payments; fill in the income or party ledger for receipts.",
    ),
    (
        "Narration",
        "Statement description, with the bank reference appended when available.",
    ),
];

/// Serialize one sheet of headers + rows into XLSX bytes. Columns are sized
/// to their longest content, capped so a runaway narration cannot produce
/// an unusable sheet.
pub fn write_workbook(
    sheet_name: &str,
    headers: &[&str],
    rows: &[Vec<Cell>],
) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(sheet_name)?;
    write_sheet(sheet, headers, rows)?;
    Ok(workbook.save_to_buffer()?)
}

/// Journal template download: "Journal Entries" plus an "Instructions"
/// sheet explaining the fill-in-the-blank counter leg.
pub fn journal_workbook(rows: &[JournalRow]) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();

    let entries = workbook.add_worksheet();
    entries.set_name("Journal Entries")?;
    write_sheet(entries, &JOURNAL_HEADERS, &journal_sheet(rows))?;

    let bold = Format::new().set_bold();
    let instructions = workbook.add_worksheet();
    instructions.set_name("Instructions")?;
    instructions.write_string_with_format(0, 0, "Journal template columns", &bold)?;
    for (i, (column, meaning)) in INSTRUCTIONS.iter().enumerate() {
        let row = i as u32 + 2;
        instructions.write_string_with_format(row, 0, *column, &bold)?;
        instructions.write_string(row, 1, *meaning)?;
    }
    instructions.write_string(
        INSTRUCTIONS.len() as u32 + 4,
        0,
        "Every entry must balance: complete the empty account cell on each row before importing.",
    )?;
    instructions.set_column_width(0, 20)?;
    instructions.set_column_width(1, 90)?;

    Ok(workbook.save_to_buffer()?)
}

fn write_sheet(
    sheet: &mut Worksheet,
    headers: &[&str],
    rows: &[Vec<Cell>],
) -> Result<(), ExportError> {
    let bold = Format::new().set_bold();

    for (col, header) in headers.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *header, &bold)?;
    }
    for (r, row) in rows.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            let (r, c) = (r as u32 + 1, c as u16);
            match cell {
                Cell::Text(s) => sheet.write_string(r, c, s.as_str())?,
                Cell::Number(n) => sheet.write_number(r, c, n.to_f64().unwrap_or(0.0))?,
            };
        }
    }

    for (col, width) in column_widths(headers, rows).into_iter().enumerate() {
        sheet.set_column_width(col as u16, width as f64)?;
    }
    Ok(())
}

/// Width per column: the longer of the header and the longest cell,
/// capped at [`MAX_COLUMN_WIDTH`] characters.
fn column_widths(headers: &[&str], rows: &[Vec<Cell>]) -> Vec<usize> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (c, cell) in row.iter().enumerate() {
            if c >= widths.len() {
                widths.push(0);
            }
            widths[c] = widths[c].max(cell.to_string().chars().count());
        }
    }
    widths.into_iter().map(|w| w.min(MAX_COLUMN_WIDTH)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{open_workbook_auto_from_rs, Data, Reader};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::io::Cursor;

    fn sample_rows() -> Vec<JournalRow> {
        vec![
            JournalRow {
                date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
                amount: Decimal::from(50_000),
                debit_account: "HDFC Bank".into(),
                credit_account: String::new(),
                narration: "Salary Credit".into(),
            },
            JournalRow {
                date: NaiveDate::from_ymd_opt(2024, 2, 3).unwrap(),
                amount: Decimal::from(15_000),
                debit_account: String::new(),
                credit_account: "HDFC Bank".into(),
                narration: "Rent Payment".into(),
            },
        ]
    }

    #[test]
    fn journal_workbook_has_both_sheets() {
        let bytes = journal_workbook(&sample_rows()).unwrap();
        let workbook = open_workbook_auto_from_rs(Cursor::new(bytes)).unwrap();
        assert_eq!(
            workbook.sheet_names(),
            vec!["Journal Entries".to_string(), "Instructions".to_string()]
        );
    }

    #[test]
    fn journal_sheet_contents_round_trip() {
        let bytes = journal_workbook(&sample_rows()).unwrap();
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes)).unwrap();
        let range = workbook.worksheet_range("Journal Entries").unwrap();
        let rows: Vec<Vec<Data>> = range.rows().map(|r| r.to_vec()).collect();

        assert_eq!(rows[0][0], Data::String("Date".into()));
        assert_eq!(rows[1][0], Data::String("2024-02-01".into()));
        assert_eq!(rows[1][1], Data::Float(50_000.0));
        assert_eq!(rows[1][2], Data::String("HDFC Bank".into()));
        assert_eq!(rows[2][3], Data::String("HDFC Bank".into()));
        assert_eq!(rows[2][4], Data::String("Rent Payment".into()));
    }

    #[test]
    fn generic_workbook_writes_named_sheet() {
        let bytes = write_workbook(
            "Computation",
            &["Head", "Amount"],
            &[vec![
                Cell::Text("Gross Total Income".into()),
                Cell::Number(Decimal::from(1_250_000)),
            ]],
        )
        .unwrap();
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes)).unwrap();
        let range = workbook.worksheet_range("Computation").unwrap();
        assert_eq!(range.get_value((1, 1)), Some(&Data::Float(1_250_000.0)));
    }

    #[test]
    fn widths_track_longest_cell_and_cap() {
        let rows = vec![vec![
            Cell::Text("x".repeat(80)),
            Cell::Text("short".into()),
        ]];
        let widths = column_widths(&["a", "a much longer header"], &rows);
        assert_eq!(widths[0], MAX_COLUMN_WIDTH);
        assert_eq!(widths[1], 20);
    }
}

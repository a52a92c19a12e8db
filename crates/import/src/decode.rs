use munim_core::{parse_amount, parse_date, ParsedTransaction};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info};

use crate::columns::{detect_columns, has_header_row};
use crate::ImportError;

/// Decoded statement: the surviving transactions plus everything we know
/// about what was dropped and any summary metadata found in label rows.
#[derive(Debug, Clone, Serialize, Default)]
pub struct Statement {
    pub transactions: Vec<ParsedTransaction>,
    pub skipped: Vec<SkippedRow>,
    pub account_number: Option<String>,
    pub account_name: Option<String>,
    pub statement_period: Option<String>,
    pub opening_balance: Option<Decimal>,
    pub closing_balance: Option<Decimal>,
}

/// A data row that did not survive decoding. Kept so callers can surface
/// dropped rows instead of losing them silently.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedRow {
    pub index: usize,
    pub raw: Vec<String>,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    MissingDate,
    MissingDescription,
    NoAmount,
}

/// Decode a grid of string cells into a [`Statement`].
///
/// Shared by the CSV and workbook entry points; the format layers only
/// differ in how they produce the grid. A file with fewer than two rows is
/// the single hard failure; malformed rows are recorded and dropped.
pub fn decode_rows(rows: &[Vec<String>]) -> Result<Statement, ImportError> {
    if rows.len() < 2 {
        return Err(ImportError::EmptyFile);
    }

    let layout = detect_columns(&rows[0]);
    let start = usize::from(has_header_row(&rows[0]));

    let mut statement = scan_metadata(rows);

    for (index, row) in rows.iter().enumerate().skip(start) {
        let cell = |i: usize| row.get(i).map(|s| s.trim()).unwrap_or("");

        let mut skip = |reason: SkipReason| {
            debug!(index, ?reason, "dropping statement row");
            statement.skipped.push(SkippedRow {
                index,
                raw: row.clone(),
                reason,
            });
        };

        let date_raw = cell(layout.date);
        if date_raw.is_empty() {
            skip(SkipReason::MissingDate);
            continue;
        }
        let description = cell(layout.description);
        if description.is_empty() {
            skip(SkipReason::MissingDescription);
            continue;
        }

        let withdrawal = parse_amount(cell(layout.withdrawal));
        let deposit = parse_amount(cell(layout.deposit));
        if withdrawal.is_none() && deposit.is_none() {
            skip(SkipReason::NoAmount);
            continue;
        }

        // Zero and negative movements collapse to null; a row that keeps
        // neither side carries no usable entry.
        let mut withdrawal = withdrawal.filter(|v| *v > Decimal::ZERO);
        let deposit = deposit.filter(|v| *v > Decimal::ZERO);
        if withdrawal.is_none() && deposit.is_none() {
            skip(SkipReason::NoAmount);
            continue;
        }
        // A statement row is credit xor debit; when a malformed row fills
        // both sides the deposit wins.
        if deposit.is_some() {
            withdrawal = None;
        }

        let balance = layout.balance.and_then(|i| parse_amount(cell(i)));
        let reference = layout
            .reference
            .map(|i| cell(i).to_string())
            .filter(|r| !r.is_empty());

        statement.transactions.push(ParsedTransaction::new(
            parse_date(date_raw),
            description.to_string(),
            withdrawal,
            deposit,
            balance,
            reference,
        ));
    }

    info!(
        transactions = statement.transactions.len(),
        skipped = statement.skipped.len(),
        "decoded statement"
    );
    Ok(statement)
}

/// Harvest summary fields from label rows ("Account Number: 1234", or the
/// label and value in adjacent cells). Label rows never decode as
/// transactions, so this pass is purely additive.
fn scan_metadata(rows: &[Vec<String>]) -> Statement {
    let mut statement = Statement::default();

    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            let lower = cell.to_lowercase();
            let value = || label_value(row, i, cell);

            if statement.account_number.is_none()
                && (lower.contains("account number") || lower.contains("account no"))
            {
                statement.account_number = value();
            } else if statement.account_name.is_none() && lower.contains("account name") {
                statement.account_name = value();
            } else if statement.statement_period.is_none() && lower.contains("statement period") {
                statement.statement_period = value();
            } else if statement.opening_balance.is_none() && lower.contains("opening balance") {
                statement.opening_balance = value().as_deref().and_then(parse_amount);
            } else if statement.closing_balance.is_none() && lower.contains("closing balance") {
                statement.closing_balance = value().as_deref().and_then(parse_amount);
            }
        }
    }

    statement
}

/// Value for a label cell: the text after ":" in the same cell, else the
/// next non-empty cell in the row.
fn label_value(row: &[String], index: usize, cell: &str) -> Option<String> {
    if let Some((_, after)) = cell.split_once(':') {
        let after = after.trim();
        if !after.is_empty() {
            return Some(after.to_string());
        }
    }
    row.iter()
        .skip(index + 1)
        .map(|s| s.trim())
        .find(|s| !s.is_empty())
        .map(|s| s.to_string())
}

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::transaction::ParsedTransaction;

/// One row of the generated journal template.
///
/// The bank leg is pre-filled; the counter leg is the empty string and is
/// completed by the operator. Exactly one of the two account fields is
/// non-empty on every row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalRow {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Amount")]
    pub amount: Decimal,
    #[serde(rename = "DebitAccount")]
    pub debit_account: String,
    #[serde(rename = "CreditAccount")]
    pub credit_account: String,
    #[serde(rename = "Narration")]
    pub narration: String,
}

/// Build journal template rows from decoded transactions.
///
/// Deposits debit the bank's own ledger account (asset increase); withdrawals
/// credit it. Rows where neither side is positive should not exist after
/// decoding but are skipped rather than trusted. Input order is preserved.
pub fn journal_rows(transactions: &[ParsedTransaction], bank_account: &str) -> Vec<JournalRow> {
    transactions
        .iter()
        .filter_map(|tx| journal_row(tx, bank_account))
        .collect()
}

fn journal_row(tx: &ParsedTransaction, bank_account: &str) -> Option<JournalRow> {
    let narration = match tx.reference.as_deref().filter(|r| !r.trim().is_empty()) {
        Some(r) => format!("{} (Ref: {})", tx.description, r),
        None => tx.description.clone(),
    };

    if let Some(deposit) = tx.deposit.filter(|d| *d > Decimal::ZERO) {
        return Some(JournalRow {
            date: tx.date,
            amount: deposit,
            debit_account: bank_account.to_string(),
            credit_account: String::new(),
            narration,
        });
    }
    if let Some(withdrawal) = tx.withdrawal.filter(|w| *w > Decimal::ZERO) {
        return Some(JournalRow {
            date: tx.date,
            amount: withdrawal,
            debit_account: String::new(),
            credit_account: bank_account.to_string(),
            narration,
        });
    }
    None
}

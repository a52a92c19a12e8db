use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether money entered or left the account, from the bank's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Credit,
    Debit,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Credit => write!(f, "credit"),
            EntryKind::Debit => write!(f, "debit"),
        }
    }
}

/// One decoded statement row.
///
/// Exactly one of `withdrawal`/`deposit` is `Some`, and that value is
/// strictly positive — the decoder drops rows that cannot satisfy this.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedTransaction {
    pub date: NaiveDate,
    pub description: String,
    pub withdrawal: Option<Decimal>,
    pub deposit: Option<Decimal>,
    pub balance: Option<Decimal>,
    pub reference: Option<String>,
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

impl ParsedTransaction {
    pub fn new(
        date: NaiveDate,
        description: String,
        withdrawal: Option<Decimal>,
        deposit: Option<Decimal>,
        balance: Option<Decimal>,
        reference: Option<String>,
    ) -> Self {
        let kind = if deposit.is_some() {
            EntryKind::Credit
        } else {
            EntryKind::Debit
        };
        ParsedTransaction {
            date,
            description,
            withdrawal,
            deposit,
            balance,
            reference,
            kind,
        }
    }

    /// The single movement magnitude on this row.
    pub fn amount(&self) -> Decimal {
        self.deposit.or(self.withdrawal).unwrap_or(Decimal::ZERO)
    }
}

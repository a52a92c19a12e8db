/// Column roles a statement header can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Date,
    Description,
    Withdrawal,
    Deposit,
    Balance,
    Reference,
}

/// Keyword table driving header detection. Evaluated by one generic loop so
/// the matching contract stays data, not branching.
const KEYWORDS: &[(&[&str], Field)] = &[
    (&["date"], Field::Date),
    (
        &["description", "particulars", "narration", "details"],
        Field::Description,
    ),
    (&["debit", "withdrawal", "dr"], Field::Withdrawal),
    (&["credit", "deposit", "cr"], Field::Deposit),
    (&["balance"], Field::Balance),
    (&["ref", "cheque", "chq"], Field::Reference),
];

/// Resolved column indices for one statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    pub date: usize,
    pub description: usize,
    pub withdrawal: usize,
    pub deposit: usize,
    pub balance: Option<usize>,
    pub reference: Option<usize>,
}

/// Fuzzy header detection: each lower-cased header cell is tested for
/// substring membership against the keyword sets, and the LAST matching
/// column wins a tie. Anything still unresolved falls back to the
/// positional defaults date=0, description=1, withdrawal=2, deposit=3.
pub fn detect_columns(headers: &[String]) -> ColumnLayout {
    let mut date: i64 = -1;
    let mut description: i64 = -1;
    let mut withdrawal: i64 = -1;
    let mut deposit: i64 = -1;
    let mut balance: i64 = -1;
    let mut reference: i64 = -1;

    for (idx, cell) in headers.iter().enumerate() {
        let cell = cell.to_lowercase();
        for (keywords, field) in KEYWORDS {
            if keywords.iter().any(|k| cell.contains(k)) {
                let slot = match field {
                    Field::Date => &mut date,
                    Field::Description => &mut description,
                    Field::Withdrawal => &mut withdrawal,
                    Field::Deposit => &mut deposit,
                    Field::Balance => &mut balance,
                    Field::Reference => &mut reference,
                };
                *slot = idx as i64;
            }
        }
    }

    ColumnLayout {
        date: if date >= 0 { date as usize } else { 0 },
        description: if description >= 0 { description as usize } else { 1 },
        withdrawal: if withdrawal >= 0 { withdrawal as usize } else { 2 },
        deposit: if deposit >= 0 { deposit as usize } else { 3 },
        balance: (balance >= 0).then(|| balance as usize),
        reference: (reference >= 0).then(|| reference as usize),
    }
}

/// Row 0 counts as a header when any of its cells mentions "date".
pub fn has_header_row(first_row: &[String]) -> bool {
    first_row
        .iter()
        .any(|cell| cell.to_lowercase().contains("date"))
}

pub mod amount;
pub mod date;
pub mod journal;
pub mod transaction;

pub use amount::{amount_from_f64, parse_amount};
pub use date::{parse_date, parse_date_or};
pub use journal::{journal_rows, JournalRow};
pub use transaction::{EntryKind, ParsedTransaction};

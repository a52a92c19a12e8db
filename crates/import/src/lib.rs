pub mod classify;
pub mod columns;
pub mod csv;
pub mod decode;
pub mod xlsx;

use thiserror::Error;

pub use classify::{Classification, Classifier, ClassifierRule, Direction};
pub use columns::{detect_columns, ColumnLayout};
pub use decode::{SkipReason, SkippedRow, Statement};

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("statement file is empty or invalid: include a header row and at least one data row")]
    EmptyFile,
    #[error("PDF statements are not supported; convert the statement to CSV or Excel and retry")]
    PdfUnsupported,
    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),
    #[error("workbook error: {0}")]
    Workbook(#[from] calamine::Error),
    #[error("statement is not valid UTF-8 text")]
    Utf8(#[from] std::str::Utf8Error),
}

const PDF_MAGIC: &[u8] = b"%PDF";
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";
const OLE2_MAGIC: &[u8] = &[0xd0, 0xcf, 0x11, 0xe0];

/// Parse an uploaded statement from its raw bytes, sniffing the container.
///
/// PDF uploads are rejected outright — text extraction from PDF statements
/// is unreliable enough that asking for a CSV/Excel export is the better
/// answer. ZIP and OLE2 magic route to the workbook reader; anything else
/// is treated as delimited text.
pub fn parse_statement(bytes: &[u8]) -> Result<Statement, ImportError> {
    if bytes.starts_with(PDF_MAGIC) {
        return Err(ImportError::PdfUnsupported);
    }
    if bytes.starts_with(ZIP_MAGIC) || bytes.starts_with(OLE2_MAGIC) {
        return xlsx::parse_workbook(bytes);
    }
    csv::parse_csv(std::str::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use munim_core::{journal_rows, EntryKind};
    use rust_decimal::Decimal;

    const SAMPLE: &str = "Date,Description,Debit,Credit,Balance\n\
                          01/02/2024,Salary Credit,,50000,50000\n\
                          03/02/2024,Rent Payment,15000,,35000\n";

    #[test]
    fn pdf_bytes_are_rejected_with_guidance() {
        let err = parse_statement(b"%PDF-1.7 ...").unwrap_err();
        assert!(matches!(err, ImportError::PdfUnsupported));
        assert!(err.to_string().contains("convert the statement to CSV or Excel"));
    }

    #[test]
    fn text_bytes_route_to_csv() {
        let statement = parse_statement(SAMPLE.as_bytes()).unwrap();
        assert_eq!(statement.transactions.len(), 2);
    }

    #[test]
    fn non_utf8_text_is_an_error() {
        assert!(matches!(
            parse_statement(&[0xff, 0xfe, 0x00, 0x41]),
            Err(ImportError::Utf8(_))
        ));
    }

    // Full pipeline: decode → classify → journal template.
    #[test]
    fn statement_to_journal_template() {
        let statement = parse_statement(SAMPLE.as_bytes()).unwrap();

        let salary = &statement.transactions[0];
        assert_eq!(salary.date.to_string(), "2024-02-01");
        assert_eq!(salary.description, "Salary Credit");
        assert_eq!(salary.deposit, Some(Decimal::from(50_000)));
        assert_eq!(salary.withdrawal, None);
        assert_eq!(salary.kind, EntryKind::Credit);

        let rent = &statement.transactions[1];
        assert_eq!(rent.date.to_string(), "2024-02-03");
        assert_eq!(rent.withdrawal, Some(Decimal::from(15_000)));
        assert_eq!(rent.deposit, None);
        assert_eq!(rent.kind, EntryKind::Debit);

        let rows = journal_rows(&statement.transactions, "HDFC Bank");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].amount, Decimal::from(50_000));
        assert_eq!(rows[0].debit_account, "HDFC Bank");
        assert_eq!(rows[0].credit_account, "");
        assert_eq!(rows[0].narration, "Salary Credit");
        assert_eq!(rows[1].amount, Decimal::from(15_000));
        assert_eq!(rows[1].debit_account, "");
        assert_eq!(rows[1].credit_account, "HDFC Bank");

        let classification = Classifier::default().categorize(&salary.description);
        assert_eq!(classification.direction, Direction::Receipt);
        assert_eq!(classification.account.as_deref(), Some("4010"));
        assert_eq!(classification.category.as_deref(), Some("Revenue"));
    }
}

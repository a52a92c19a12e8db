use crate::{Cell, ExportError};

/// Serialize headers + rows as UTF-8 CSV bytes.
///
/// Quoting is the csv crate's RFC4180 default: fields containing a comma,
/// quote or newline are quoted, embedded quotes are doubled.
pub fn write_csv(headers: &[&str], rows: &[Vec<Cell>]) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(row.iter().map(|c| c.to_string()))?;
    }

    writer
        .into_inner()
        .map_err(|e| ExportError::Io(e.into_error()))
}

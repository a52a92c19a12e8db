use chrono::{Duration, Local, NaiveDate};

/// Spreadsheet serial for 1970-01-01 (serial epoch is 1899-12-30).
const UNIX_EPOCH_SERIAL: i64 = 25569;

const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Normalize a statement date cell into a calendar date.
///
/// Total function: anything unrecognizable resolves to today rather than an
/// error, keeping the decode pipeline from failing on a single bad cell.
/// Callers that need stricter validation must range-check the result.
pub fn parse_date(raw: &str) -> NaiveDate {
    parse_date_or(raw, Local::now().date_naive())
}

/// Same as [`parse_date`] with an explicit fallback date, for deterministic use.
pub fn parse_date_or(raw: &str, fallback: NaiveDate) -> NaiveDate {
    let s = raw.trim();

    // Already canonical.
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return d;
    }

    // Bare integers are spreadsheet serials (days since 1899-12-30). Values
    // at or below the Unix-epoch serial are never statement dates.
    if let Ok(serial) = s.parse::<i64>() {
        if serial > UNIX_EPOCH_SERIAL {
            let from_epoch = NaiveDate::from_ymd_opt(1970, 1, 1)
                .and_then(|epoch| epoch.checked_add_signed(Duration::days(serial - UNIX_EPOCH_SERIAL)));
            if let Some(d) = from_epoch {
                return d;
            }
        }
    }

    for fmt in ["%d-%m-%Y", "%d/%m/%Y", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d;
        }
    }

    if let Some(d) = parse_day_month_name_year(s) {
        return d;
    }

    // Generic last-resort formats seen in the wild before giving up.
    for fmt in ["%d-%b-%Y", "%d.%m.%Y", "%m/%d/%Y", "%Y-%m-%dT%H:%M:%S", "%d-%m-%y"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d;
        }
    }

    fallback
}

/// `DD <Monthname> YYYY`, month matched on its 3-letter prefix, any case.
fn parse_day_month_name_year(s: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = s.split_whitespace().collect();
    if parts.len() != 3 {
        return None;
    }
    let day: u32 = parts[0].parse().ok()?;
    let year: i32 = parts[2].parse().ok()?;
    let prefix = parts[1].to_lowercase();
    let prefix = prefix.get(..3)?;
    let month = MONTHS.iter().position(|m| *m == prefix)? as u32 + 1;
    NaiveDate::from_ymd_opt(year, month, day)
}

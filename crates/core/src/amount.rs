use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a bank-statement amount cell into a decimal.
///
/// Statements arrive with currency symbols, thousands separators,
/// non-breaking-space padding and accounting parentheses for contra values.
/// Returns `None` for empty or unparseable input; never panics.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    if raw.trim().is_empty() {
        return None;
    }

    let parenthesized = raw.contains('(') && raw.contains(')');

    // One pass: drop whitespace (including U+00A0) and anything that is not
    // a digit, comma, period or minus. This strips currency symbols and
    // stray letters like "Cr"/"Dr" suffixes.
    let mut cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, ',' | '.' | '-'))
        .collect();

    if parenthesized && !cleaned.starts_with('-') {
        cleaned.insert(0, '-');
    }

    let cleaned = cleaned.replace(',', "");
    Decimal::from_str(&cleaned).ok()
}

/// Numeric passthrough for spreadsheet cells that arrive as floats.
pub fn amount_from_f64(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    Decimal::from_f64(value).map(|d| d.round_dp(2))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn plain_number() {
        assert_eq!(parse_amount("1234.50"), Some(d("1234.50")));
    }

    #[test]
    fn thousands_commas_stripped() {
        assert_eq!(parse_amount("1,23,456.78"), Some(d("123456.78")));
        assert_eq!(parse_amount("1,234.56"), Some(d("1234.56")));
    }

    #[test]
    fn currency_symbols_stripped() {
        assert_eq!(parse_amount("₹1,234.50"), Some(d("1234.50")));
        assert_eq!(parse_amount("$ 99.99"), Some(d("99.99")));
        assert_eq!(parse_amount("INR 500"), Some(d("500")));
    }

    #[test]
    fn non_breaking_space_stripped() {
        assert_eq!(parse_amount("1\u{a0}234.00"), Some(d("1234.00")));
    }

    #[test]
    fn parenthesized_is_negative() {
        assert_eq!(parse_amount("(1,234.50)"), Some(d("-1234.50")));
        assert_eq!(parse_amount("(500)"), Some(d("-500")));
    }

    #[test]
    fn parenthesized_already_negative_keeps_single_sign() {
        assert_eq!(parse_amount("(-75.25)"), Some(d("-75.25")));
    }

    #[test]
    fn explicit_negative() {
        assert_eq!(parse_amount("-50.00"), Some(d("-50.00")));
    }

    #[test]
    fn trailing_cr_marker_stripped() {
        assert_eq!(parse_amount("2,500.00 Cr"), Some(d("2500.00")));
    }

    #[test]
    fn empty_and_garbage_are_none() {
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("   "), None);
        assert_eq!(parse_amount("N/A"), None);
        assert_eq!(parse_amount("--"), None);
    }

    #[test]
    fn idempotent_through_display() {
        for raw in ["1,234.56", "₹99", "(42.10)"] {
            let once = parse_amount(raw).unwrap();
            let twice = parse_amount(&once.to_string()).unwrap();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn f64_passthrough() {
        assert_eq!(amount_from_f64(5000.0), Some(d("5000.00")));
        assert_eq!(amount_from_f64(f64::NAN), None);
        assert_eq!(amount_from_f64(f64::INFINITY), None);
    }
}

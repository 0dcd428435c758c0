//! # ingest::coerce
//!
//! Cell-string → typed-value coercion.
//!
//! Numbers are deliberately forgiving: sheet exports wrap values in currency
//! symbols, thousands separators and percent signs, and a cell like `"n/a"`
//! coerces to 0 rather than failing the row.  Dates are the opposite — an
//! unparsable date yields `None` and downstream consumers must exclude the
//! row.

use chrono::NaiveDate;

/// Strip `$`, `,`, `%` and whitespace, then parse the longest leading
/// numeric prefix as f64 — `"150.00USD"` → 150, matching the front-parse
/// the sheets have always received.  No leading number → 0.
pub fn parse_number(raw: &str) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | '%') && !c.is_whitespace())
        .collect();

    let mut end = cleaned.len();
    while end > 0 {
        if cleaned.is_char_boundary(end) {
            if let Ok(value) = cleaned[..end].parse::<f64>() {
                if !value.is_nan() {
                    return value;
                }
            }
        }
        end -= 1;
    }
    0.0
}

/// Generic formats (ISO datetime/date, US slash date) tried first, then an
/// explicit day/month/year fallback — day-first dates only reach it when the
/// day is > 12, same as the original's parser.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
];

/// Parse a calendar date.  Unparsable input yields `None`.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return Some(date);
        }
    }
    None
}

// ─── Tests ────────────────────────────────────────────────────────────────────

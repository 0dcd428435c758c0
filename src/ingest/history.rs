//! # ingest::history
//!
//! History-sheet normalizer.
//!
//! Rows with an unparsable date or a value of exactly 0 are dropped, then
//! the remainder is sorted ascending by date.  The drop-on-zero rule means a
//! genuinely zero-valued account can never appear in history — a documented
//! simplification, preserved as-is.

use crate::error::AppError;
use crate::ingest::coerce::{parse_date, parse_number};
use crate::ingest::columns::ColumnSpec;
use crate::ingest::parser::ParsedCsv;
use crate::models::HistoryEntry;

const DATE: ColumnSpec = ColumnSpec::new("date", &["date", "datetime"]);
const VALUE: ColumnSpec = ColumnSpec::new(
    "portfoliovalue",
    &["portfoliovalue", "total", "value", "equity"],
);

/// Normalize a parsed history sheet into sorted [`HistoryEntry`] rows.
pub fn parse_history(parsed: &ParsedCsv) -> Result<Vec<HistoryEntry>, AppError> {
    let date_h = DATE.resolve(&parsed.headers);
    let value_h = VALUE.resolve(&parsed.headers);

    let missing: Vec<&str> = [(DATE.label, date_h), (VALUE.label, value_h)]
        .iter()
        .filter(|(_, resolved)| resolved.is_none())
        .map(|(label, _)| *label)
        .collect();

    if !missing.is_empty() {
        return Err(AppError::missing_columns(&missing, &parsed.headers));
    }

    let (date_h, value_h) = (date_h.unwrap(), value_h.unwrap());

    let mut history: Vec<HistoryEntry> = parsed
        .rows
        .iter()
        .filter_map(|row| {
            let date = parse_date(row.get(date_h).map(String::as_str).unwrap_or(""))?;
            let portfolio_value = parse_number(row.get(value_h).map(String::as_str).unwrap_or(""));

            if portfolio_value == 0.0 {
                return None;
            }
            Some(HistoryEntry { date, portfolio_value })
        })
        .collect();

    history.sort_by_key(|entry| entry.date);
    Ok(history)
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::parser::parse_csv;
    use chrono::NaiveDate;

    #[test]
    fn test_drops_zero_and_unparsable_rows_and_sorts() {
        let parsed = parse_csv(
            "Date,Total\n\
             2025-03-03,110\n\
             2025-03-01,100\n\
             2025-03-02,0\n\
             not-a-date,120\n",
        );
        let history = parse_history(&parsed).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].date, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
        assert_eq!(history[1].date, NaiveDate::from_ymd_opt(2025, 3, 3).unwrap());
        assert!(history.windows(2).all(|w| w[0].date <= w[1].date));
    }

    #[test]
    fn test_value_alias_equity() {
        let parsed = parse_csv("datetime,Equity\n2025-03-01,$1,\n");
        // Mismatched row (extra comma from unquoted "$1,") is dropped by the
        // parser leniency policy — nothing survives.
        let history = parse_history(&parsed).unwrap();
        assert!(history.is_empty());

        let parsed = parse_csv("datetime,Equity\n2025-03-01,\"$1,000\"\n");
        let history = parse_history(&parsed).unwrap();
        assert_eq!(history[0].portfolio_value, 1000.0);
    }

    #[test]
    fn test_missing_columns() {
        let parsed = parse_csv("Day,Amount\n2025-03-01,100\n");
        let err = parse_history(&parsed).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("date"));
        assert!(msg.contains("portfoliovalue"));
    }
}

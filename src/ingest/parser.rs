//! # ingest::parser
//!
//! Tokenizes raw CSV text into an ordered header list plus row maps.
//!
//! ## Leniency policy
//! Rows whose field count does not match the header count are **silently
//! dropped** — no error is surfaced.  This mirrors the sheet-export quirks
//! the dashboard has always tolerated; do not "fix" it without flagging the
//! behaviour change to users.

use std::collections::HashMap;

/// Output of [`parse_csv`]: headers in sheet order, rows as header→cell maps.
#[derive(Debug, Clone, Default)]
pub struct ParsedCsv {
    pub headers: Vec<String>,
    pub rows: Vec<HashMap<String, String>>,
}

/// Parse CSV text: strip a leading BOM, split on any line ending, skip blank
/// lines, tokenize with double-quote escaping.
pub fn parse_csv(text: &str) -> ParsedCsv {
    let clean = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut lines = clean
        .split(['\r', '\n'])
        .filter(|line| !line.trim().is_empty());

    let headers = match lines.next() {
        Some(line) => parse_line(line),
        None => return ParsedCsv::default(),
    };

    let rows = lines
        .map(parse_line)
        .filter(|fields| fields.len() == headers.len())
        .map(|fields| headers.iter().cloned().zip(fields).collect())
        .collect();

    ParsedCsv { headers, rows }
}

/// Tokenize one line.  `""` inside a quoted field is a literal quote;
/// commas inside quotes are not separators.  Fields are trimmed.
fn parse_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    let mut chars = line.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }

    fields.push(current.trim().to_string());
    fields
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_field_with_comma() {
        let parsed = parse_csv("ticker,name,shares,price\nAAPL,\"Apple, Inc.\",10,150.00\n");
        assert_eq!(parsed.headers, vec!["ticker", "name", "shares", "price"]);
        assert_eq!(parsed.rows.len(), 1);
        let row = &parsed.rows[0];
        assert_eq!(row["ticker"], "AAPL");
        assert_eq!(row["name"], "Apple, Inc.");
        assert_eq!(row["shares"], "10");
        assert_eq!(row["price"], "150.00");
    }

    #[test]
    fn test_escaped_quote() {
        let parsed = parse_csv("name\n\"say \"\"hi\"\"\"\n");
        assert_eq!(parsed.rows[0]["name"], "say \"hi\"");
    }

    #[test]
    fn test_bom_and_crlf() {
        let parsed = parse_csv("\u{feff}a,b\r\n1,2\r\n\r\n3,4\r\n");
        assert_eq!(parsed.headers, vec!["a", "b"]);
        assert_eq!(parsed.rows.len(), 2);
        assert_eq!(parsed.rows[1]["b"], "4");
    }

    #[test]
    fn test_mismatched_row_silently_dropped() {
        let parsed = parse_csv("a,b\n1,2,3\n4,5\n");
        assert_eq!(parsed.rows.len(), 1);
        assert_eq!(parsed.rows[0]["a"], "4");
    }

    #[test]
    fn test_empty_input() {
        let parsed = parse_csv("");
        assert!(parsed.headers.is_empty());
        assert!(parsed.rows.is_empty());
    }

    #[test]
    fn test_fields_are_trimmed() {
        let parsed = parse_csv("a, b\n 1 ,  2 \n");
        assert_eq!(parsed.headers, vec!["a", "b"]);
        assert_eq!(parsed.rows[0]["a"], "1");
        assert_eq!(parsed.rows[0]["b"], "2");
    }
}

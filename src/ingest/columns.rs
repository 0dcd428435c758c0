//! # ingest::columns
//!
//! Header alias resolution — decouples the pipeline from exact spreadsheet
//! column naming.  A semantic field like "ticker" matches whichever of its
//! aliases appears in the sheet, case-insensitively, in alias priority
//! order.

/// Returns the first header matching any alias (case-insensitive), in alias
/// priority order.  The original header spelling is returned so it can be
/// used as a row-map key.
pub fn find_header<'a>(headers: &'a [String], aliases: &[&str]) -> Option<&'a str> {
    for alias in aliases {
        if let Some(header) = headers
            .iter()
            .find(|h| h.eq_ignore_ascii_case(alias))
        {
            return Some(header.as_str());
        }
    }
    None
}

/// One semantic column: a label for error messages plus its accepted aliases.
#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    pub label: &'static str,
    pub aliases: &'static [&'static str],
}

impl ColumnSpec {
    pub const fn new(label: &'static str, aliases: &'static [&'static str]) -> Self {
        Self { label, aliases }
    }

    pub fn resolve<'a>(&self, headers: &'a [String]) -> Option<&'a str> {
        find_header(headers, self.aliases)
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_case_insensitive_resolution() {
        let hs = headers(&["Symbol", "Company", "Quantity", "Last"]);
        assert_eq!(find_header(&hs, &["ticker", "symbol"]), Some("Symbol"));
        assert_eq!(find_header(&hs, &["name", "company"]), Some("Company"));
        assert_eq!(find_header(&hs, &["shares", "quantity"]), Some("Quantity"));
        assert_eq!(find_header(&hs, &["price", "last"]), Some("Last"));
    }

    #[test]
    fn test_alias_priority_order() {
        // Both aliases present — the first alias wins, not sheet order.
        let hs = headers(&["value", "marketvalue"]);
        assert_eq!(find_header(&hs, &["marketvalue", "value"]), Some("marketvalue"));
    }

    #[test]
    fn test_not_found() {
        let hs = headers(&["Symbol", "Last"]);
        assert_eq!(find_header(&hs, &["date", "datetime"]), None);
    }
}

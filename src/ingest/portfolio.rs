//! # ingest::portfolio
//!
//! Positions-sheet normalizer.
//!
//! ## Weight invariant
//! Weights are recomputed for every row as `marketValue / Σ(marketValue) ×
//! 100`, ignoring any weight column in the sheet.  They therefore always sum
//! to ~100% when total value is positive, and to 0 when it is not.

use crate::error::AppError;
use crate::ingest::coerce::parse_number;
use crate::ingest::columns::ColumnSpec;
use crate::ingest::parser::ParsedCsv;
use crate::models::Position;

const TICKER: ColumnSpec = ColumnSpec::new("ticker", &["ticker", "symbol"]);
const NAME: ColumnSpec = ColumnSpec::new("name", &["name", "company"]);
const SHARES: ColumnSpec = ColumnSpec::new("shares", &["shares", "quantity"]);
const PRICE: ColumnSpec = ColumnSpec::new("price", &["price", "last"]);
const MARKET_VALUE: ColumnSpec = ColumnSpec::new("marketvalue", &["marketvalue", "value"]);
// Resolved but never read — weights are always recomputed.
const WEIGHT: ColumnSpec = ColumnSpec::new("weight", &["weight", "alloc"]);

/// Normalize a parsed positions sheet into [`Position`] rows.
///
/// Fails with [`AppError::MissingColumns`] naming every unresolved required
/// column when ticker, name, shares or price cannot be found.
pub fn parse_positions(parsed: &ParsedCsv) -> Result<Vec<Position>, AppError> {
    let ticker_h = TICKER.resolve(&parsed.headers);
    let name_h = NAME.resolve(&parsed.headers);
    let shares_h = SHARES.resolve(&parsed.headers);
    let price_h = PRICE.resolve(&parsed.headers);
    let market_value_h = MARKET_VALUE.resolve(&parsed.headers);
    let _ = WEIGHT.resolve(&parsed.headers);

    let missing: Vec<&str> = [
        (TICKER.label, ticker_h),
        (NAME.label, name_h),
        (SHARES.label, shares_h),
        (PRICE.label, price_h),
    ]
    .iter()
    .filter(|(_, resolved)| resolved.is_none())
    .map(|(label, _)| *label)
    .collect();

    if !missing.is_empty() {
        return Err(AppError::missing_columns(&missing, &parsed.headers));
    }

    // Required columns are all Some past this point.
    let (ticker_h, name_h, shares_h, price_h) = (
        ticker_h.unwrap(),
        name_h.unwrap(),
        shares_h.unwrap(),
        price_h.unwrap(),
    );

    let cell = |row: &std::collections::HashMap<String, String>, h: &str| {
        row.get(h).cloned().unwrap_or_default()
    };

    let mut positions: Vec<Position> = parsed
        .rows
        .iter()
        .map(|row| {
            let shares = parse_number(&cell(row, shares_h));
            let price = parse_number(&cell(row, price_h));
            let market_value = match market_value_h {
                Some(h) => parse_number(&cell(row, h)),
                None => shares * price,
            };

            Position {
                ticker: cell(row, ticker_h),
                name: cell(row, name_h),
                shares,
                price,
                market_value,
                weight: 0.0,
            }
        })
        .collect();

    let total: f64 = positions.iter().map(|p| p.market_value).sum();
    for pos in &mut positions {
        pos.weight = if total > 0.0 {
            pos.market_value / total * 100.0
        } else {
            0.0
        };
    }

    Ok(positions)
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::parser::parse_csv;

    #[test]
    fn test_weights_sum_to_hundred() {
        let parsed = parse_csv(
            "ticker,name,shares,price\n\
             AAPL,Apple,10,150\n\
             NVDA,Nvidia,2,500\n",
        );
        let positions = parse_positions(&parsed).unwrap();
        assert_eq!(positions.len(), 2);

        let total_weight: f64 = positions.iter().map(|p| p.weight).sum();
        assert!((total_weight - 100.0).abs() < 1e-9);
        assert!((positions[0].weight - 60.0).abs() < 1e-9); // 1500 / 2500
        assert!((positions[1].weight - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_source_weight_column_ignored() {
        let parsed = parse_csv(
            "Symbol,Company,Quantity,Last,Weight\n\
             AAPL,Apple,1,100,95\n\
             NVDA,Nvidia,1,100,5\n",
        );
        let positions = parse_positions(&parsed).unwrap();
        assert!((positions[0].weight - 50.0).abs() < 1e-9);
        assert!((positions[1].weight - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_market_value_column_preferred_over_product() {
        let parsed = parse_csv(
            "ticker,name,shares,price,value\n\
             AAPL,Apple,10,150,\"$2,000.00\"\n",
        );
        let positions = parse_positions(&parsed).unwrap();
        assert_eq!(positions[0].market_value, 2000.0);
    }

    #[test]
    fn test_zero_total_value_gives_zero_weights() {
        let parsed = parse_csv("ticker,name,shares,price\nAAPL,Apple,0,0\n");
        let positions = parse_positions(&parsed).unwrap();
        assert_eq!(positions[0].weight, 0.0);
    }

    #[test]
    fn test_missing_columns_error_names_them() {
        let parsed = parse_csv("Symbol,Last\nAAPL,150\n");
        let err = parse_positions(&parsed).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("name"));
        assert!(msg.contains("shares"));
        assert!(!msg.contains("ticker,")); // ticker resolved via Symbol
        assert!(msg.contains("Symbol")); // available headers listed
    }
}

//! # ingest::kpi
//!
//! Pure derivation of the headline figures from (positions, history,
//! starting value).  Nothing here is stored — the caller recomputes on every
//! refresh.

use chrono::Duration;

use crate::models::{HistoryEntry, KpiData, Position};

/// Compute the dashboard KPIs.
///
/// Portfolio value preference order: latest history entry, else sum of
/// position market values, else 0.
///
/// Weekly change uses a "closest at-or-before" policy: the most recent
/// history entry dated at or before seven days prior to the latest entry —
/// not necessarily exactly seven days back.  `None` when fewer than two
/// entries exist, no qualifying prior entry exists, or its value is not
/// positive.
pub fn compute_kpis(
    positions: &[Position],
    history: &[HistoryEntry],
    starting_value: f64,
) -> KpiData {
    let portfolio_value = match history.last() {
        Some(latest) => latest.portfolio_value,
        None => positions.iter().map(|p| p.market_value).sum(),
    };

    let total_pnl = portfolio_value - starting_value;
    let total_pnl_percent = if starting_value > 0.0 {
        total_pnl / starting_value * 100.0
    } else {
        0.0
    };

    let weekly_change = weekly_change(history);

    KpiData {
        portfolio_value,
        total_pnl,
        total_pnl_percent,
        weekly_change,
    }
}

fn weekly_change(history: &[HistoryEntry]) -> Option<f64> {
    if history.len() < 2 {
        return None;
    }

    // History is sorted ascending, so the last qualifying entry is the
    // closest at-or-before the cutoff.
    let latest = history.last()?;
    let cutoff = latest.date - Duration::days(7);
    let prior = history.iter().rev().find(|entry| entry.date <= cutoff)?;

    if prior.portfolio_value <= 0.0 {
        return None;
    }

    Some((latest.portfolio_value - prior.portfolio_value) / prior.portfolio_value * 100.0)
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(offset: i64) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 30).unwrap() + Duration::days(offset)
    }

    fn entry(offset: i64, value: f64) -> HistoryEntry {
        HistoryEntry { date: day(offset), portfolio_value: value }
    }

    fn make_position(market_value: f64) -> Position {
        Position {
            ticker: "AAPL".into(),
            name: "Apple".into(),
            shares: 1.0,
            price: market_value,
            market_value,
            weight: 0.0,
        }
    }

    #[test]
    fn test_weekly_change_closest_at_or_before() {
        let history = vec![
            entry(-10, 100.0),
            entry(-8, 110.0),
            entry(-1, 120.0),
            entry(0, 130.0),
        ];
        let kpis = compute_kpis(&[], &history, 100.0);

        // The d-8 entry is the closest ≤ d-7: (130-110)/110×100
        let expected = (130.0 - 110.0) / 110.0 * 100.0;
        assert!((kpis.weekly_change.unwrap() - expected).abs() < 1e-9);
        assert!((kpis.weekly_change.unwrap() - 18.18).abs() < 0.01);
    }

    #[test]
    fn test_weekly_change_none_without_qualifying_entry() {
        // All entries within the last week.
        let history = vec![entry(-3, 100.0), entry(0, 110.0)];
        assert_eq!(compute_kpis(&[], &history, 0.0).weekly_change, None);
    }

    #[test]
    fn test_weekly_change_none_with_single_entry() {
        let history = vec![entry(0, 130.0)];
        assert_eq!(compute_kpis(&[], &history, 0.0).weekly_change, None);
    }

    #[test]
    fn test_portfolio_value_prefers_history() {
        let history = vec![entry(0, 500.0)];
        let positions = vec![make_position(900.0)];
        let kpis = compute_kpis(&positions, &history, 0.0);
        assert_eq!(kpis.portfolio_value, 500.0);
    }

    #[test]
    fn test_portfolio_value_falls_back_to_positions_then_zero() {
        let positions = vec![make_position(900.0), make_position(100.0)];
        assert_eq!(compute_kpis(&positions, &[], 0.0).portfolio_value, 1000.0);
        assert_eq!(compute_kpis(&[], &[], 0.0).portfolio_value, 0.0);
    }

    #[test]
    fn test_total_pnl_vs_starting_value() {
        let history = vec![entry(0, 150.0)];
        let kpis = compute_kpis(&[], &history, 100.0);
        assert_eq!(kpis.total_pnl, 50.0);
        assert!((kpis.total_pnl_percent - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_pnl_percent_zero_when_starting_value_unset() {
        let history = vec![entry(0, 150.0)];
        let kpis = compute_kpis(&[], &history, 0.0);
        assert_eq!(kpis.total_pnl_percent, 0.0);
    }
}

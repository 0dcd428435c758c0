//! # models::portfolio
//!
//! Domain types produced by the CSV ingestion pipeline.
//!
//! All three are rebuilt wholesale on every successful refresh — there are
//! no partial updates, so none of them carries an identity beyond its
//! natural key (ticker / date).  Wire names are camelCase to match the
//! payloads the dashboard frontend already consumes.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ─── Position ─────────────────────────────────────────────────────────────────

/// One holding row from the positions sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub ticker: String,
    pub name: String,
    pub shares: f64,
    pub price: f64,
    /// Sourced from the sheet when a marketvalue/value column exists,
    /// otherwise `shares × price`.
    pub market_value: f64,
    /// Percent of total portfolio market value.  Always recomputed by the
    /// normalizer — never trusted from the sheet.
    pub weight: f64,
}

// ─── HistoryEntry ─────────────────────────────────────────────────────────────

/// One daily valuation row from the history sheet.
///
/// The normalizer drops rows with an unparsable date or a zero value and
/// keeps the collection sorted ascending by date.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub date: NaiveDate,
    pub portfolio_value: f64,
}

// ─── KpiData ──────────────────────────────────────────────────────────────────

/// Headline figures derived from positions + history.  Never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiData {
    /// Latest history value, else sum of position market values, else 0.
    pub portfolio_value: f64,
    pub total_pnl: f64,
    pub total_pnl_percent: f64,
    /// Percent change vs the closest history entry at or before seven days
    /// prior to the latest one.  `None` when no qualifying entry exists.
    pub weekly_change: Option<f64>,
}

// ─── DashboardSnapshot ────────────────────────────────────────────────────────

/// Everything the dashboard needs, assembled by one refresh cycle and
/// swapped into shared state atomically.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub positions: Vec<Position>,
    pub history: Vec<HistoryEntry>,
    pub kpis: KpiData,
    pub last_updated: DateTime<Utc>,
}

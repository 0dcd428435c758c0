//! # ingest::fetch
//!
//! The refresh cycle: fetch the configured CSV sources concurrently, run
//! each through the pipeline, derive KPIs, assemble a snapshot.
//!
//! Unlike feed fetches, a failure here is **fatal to the whole cycle** —
//! the dashboard would rather show the previous snapshot plus an error than
//! silently mix fresh positions with stale history.

use chrono::Utc;
use tracing::{debug, info};

use crate::config::Settings;
use crate::error::AppError;
use crate::ingest::{history::parse_history, kpi::compute_kpis, parser::parse_csv,
                    portfolio::parse_positions};
use crate::models::{DashboardSnapshot, HistoryEntry, Position};

/// GET one CSV source and return its raw text.
async fn fetch_csv(client: &reqwest::Client, url: &str) -> Result<String, AppError> {
    let response = client
        .get(url)
        .header(reqwest::header::CACHE_CONTROL, "no-store")
        .send()
        .await
        .map_err(|e| AppError::Fetch(format!("{url}: {e}")))?;

    if !response.status().is_success() {
        let status = response.status();
        return Err(AppError::Fetch(format!("{url}: HTTP {status}")));
    }

    response
        .text()
        .await
        .map_err(|e| AppError::Fetch(format!("{url}: {e}")))
}

async fn fetch_positions(
    client: &reqwest::Client,
    url: Option<&str>,
) -> Result<Vec<Position>, AppError> {
    match url {
        Some(url) => {
            let text = fetch_csv(client, url).await?;
            parse_positions(&parse_csv(&text))
        }
        None => Ok(Vec::new()),
    }
}

async fn fetch_history(
    client: &reqwest::Client,
    url: Option<&str>,
) -> Result<Vec<HistoryEntry>, AppError> {
    match url {
        Some(url) => {
            let text = fetch_csv(client, url).await?;
            parse_history(&parse_csv(&text))
        }
        None => Ok(Vec::new()),
    }
}

/// Run one full refresh cycle against the given settings.
///
/// Both sources are fetched concurrently; each branch writes only its own
/// result slot and the merge happens after both complete.
pub async fn refresh_snapshot(
    client: &reqwest::Client,
    settings: &Settings,
) -> Result<DashboardSnapshot, AppError> {
    if !settings.has_sources() {
        return Err(AppError::BadRequest(
            "No CSV sources configured — set positions/history URLs first".into(),
        ));
    }

    debug!(
        positions_url = ?settings.positions_url,
        history_url   = ?settings.history_url,
        "Starting refresh cycle"
    );

    let (positions, history) = tokio::join!(
        fetch_positions(client, settings.positions_url.as_deref()),
        fetch_history(client, settings.history_url.as_deref()),
    );
    let (positions, history) = (positions?, history?);

    let kpis = compute_kpis(&positions, &history, settings.starting_value);

    info!(
        positions = positions.len(),
        history_entries = history.len(),
        portfolio_value = kpis.portfolio_value,
        "📈 Refresh cycle complete"
    );

    Ok(DashboardSnapshot {
        positions,
        history,
        kpis,
        last_updated: Utc::now(),
    })
}

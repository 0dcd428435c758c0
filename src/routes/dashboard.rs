//! # routes::dashboard
//!
//! Portfolio endpoints for the dashboard frontend.
//!
//! ## Endpoints
//!
//! | Method | Path                      | Description                             |
//! |--------|---------------------------|-----------------------------------------|
//! | GET    | `/api/dashboard`          | Latest snapshot (null until refreshed)  |
//! | POST   | `/api/dashboard/refresh`  | Run a refresh cycle, store + return it  |
//! | GET    | `/api/health`             | Counters & liveness                     |

use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;
use std::sync::atomic::Ordering;
use tracing::error;

use crate::error::AppError;
use crate::ingest::fetch::refresh_snapshot;
use crate::state::SharedState;

/// GET /api/dashboard — the latest stored snapshot.
pub async fn get_dashboard(State(state): State<SharedState>) -> impl IntoResponse {
    let snapshot = state.snapshot.read().await;
    Json(json!({
        "ok":       true,
        "snapshot": *snapshot,
    }))
}

/// POST /api/dashboard/refresh — run the CSV fetch cycle now.
///
/// Concurrent calls are not serialized; each builds its own snapshot and
/// the last writer wins.
pub async fn refresh_dashboard(
    State(state): State<SharedState>,
) -> Result<impl IntoResponse, AppError> {
    let settings = state.settings.read().await.clone();

    let snapshot = refresh_snapshot(&state.http_client, &settings)
        .await
        .map_err(|e| {
            error!(error = %e, "Refresh cycle failed");
            e
        })?;

    state.refresh_count.fetch_add(1, Ordering::Relaxed);
    state.store_snapshot(snapshot.clone()).await;

    Ok(Json(json!({
        "ok":       true,
        "snapshot": snapshot,
    })))
}

/// GET /api/health
pub async fn health_check(State(state): State<SharedState>) -> impl IntoResponse {
    let refresh_count = state.refresh_count.load(Ordering::Relaxed);
    let news_count = state.news_count.load(Ordering::Relaxed);
    let has_snapshot = state.snapshot.read().await.is_some();
    let has_sources = state.settings.read().await.has_sources();

    Json(json!({
        "ok":            true,
        "refresh_count": refresh_count,
        "news_count":    news_count,
        "has_snapshot":  has_snapshot,
        "has_sources":   has_sources,
    }))
}

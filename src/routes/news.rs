//! # routes::news
//!
//! `GET /api/news` — run the aggregation pipeline and serve the merged
//! payload with tiered cache-control: a 6-hour fresh window (plus 12-hour
//! stale-while-revalidate) on success, a short 5/10-minute window on
//! failure so a broken aggregation run is retried soon.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde_json::json;
use std::sync::atomic::Ordering;
use tracing::error;

use crate::models::NewsPayload;
use crate::news::aggregate::aggregate_feeds;
use crate::state::SharedState;

/// Keep only the most recent items after the merge.
const MAX_ITEMS: usize = 100;

const CACHE_SUCCESS: &str = "public, s-maxage=21600, stale-while-revalidate=43200";
const CACHE_FAILURE: &str = "public, s-maxage=300, stale-while-revalidate=600";

/// GET /api/news
pub async fn get_news(State(state): State<SharedState>) -> Response {
    state.news_count.fetch_add(1, Ordering::Relaxed);

    match aggregate_feeds(&state.http_client).await {
        Ok(mut items) => {
            items.truncate(MAX_ITEMS);
            let payload = NewsPayload { updated_at: Utc::now(), items };

            ([(header::CACHE_CONTROL, CACHE_SUCCESS)], Json(payload)).into_response()
        }

        Err(err) => {
            error!(error = %err, "News aggregation failed");

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(header::CACHE_CONTROL, CACHE_FAILURE)],
                Json(json!({
                    "error":     "Failed to fetch news",
                    "updatedAt": Utc::now(),
                    "items":     [],
                })),
            )
                .into_response()
        }
    }
}

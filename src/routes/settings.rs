//! # routes::settings
//!
//! Read / replace the runtime [`Settings`].  Changes live in memory only —
//! a restart reverts to the environment values.

use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;
use tracing::info;

use crate::config::Settings;
use crate::state::SharedState;

/// GET /api/settings
pub async fn get_settings(State(state): State<SharedState>) -> impl IntoResponse {
    let settings = state.settings.read().await;
    Json(json!({
        "ok":       true,
        "settings": *settings,
    }))
}

/// PUT /api/settings — replace the whole struct.
pub async fn put_settings(
    State(state): State<SharedState>,
    Json(new_settings): Json<Settings>,
) -> impl IntoResponse {
    info!(
        positions_url  = ?new_settings.positions_url,
        history_url    = ?new_settings.history_url,
        starting_value = new_settings.starting_value,
        "⚙️ Settings updated"
    );

    let mut settings = state.settings.write().await;
    *settings = new_settings;

    Json(json!({
        "ok":       true,
        "settings": *settings,
    }))
}

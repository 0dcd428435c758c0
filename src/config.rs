//! # config — Dashboard Settings
//!
//! The original dashboard kept these three values in browser localStorage.
//! Server-side they become an explicit struct: loaded once from the
//! environment at startup, replaceable at runtime via `PUT /api/settings`.
//! The load/save boundary lives here, outside the pipelines — the pipelines
//! only ever see a `Settings` value.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Published-to-web CSV export URL for the positions sheet.
    #[serde(default)]
    pub positions_url: Option<String>,

    /// Published-to-web CSV export URL for the history sheet.
    #[serde(default)]
    pub history_url: Option<String>,

    /// Cost basis the total P&L is measured against.
    #[serde(default)]
    pub starting_value: f64,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            positions_url:  env_url("POSITIONS_CSV_URL"),
            history_url:    env_url("HISTORY_CSV_URL"),
            starting_value: env_f64("STARTING_VALUE", 0.0),
        }
    }

    /// True when at least one CSV source is configured.
    pub fn has_sources(&self) -> bool {
        self.positions_url.is_some() || self.history_url.is_some()
    }
}

fn env_url(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_f64(key: &str, default: f64) -> f64 {
    std::env::var(key).ok().and_then(|v| v.parse().ok()).unwrap_or(default)
}

//! # state
//!
//! Shared application state: runtime settings, the latest dashboard
//! snapshot, one pooled HTTP client and a couple of health counters.
//!
//! Snapshots are replaced wholesale — a refresh cycle builds the new value
//! off to the side and swaps it in under the write lock.  Two overlapping
//! refresh cycles therefore race benignly: last writer wins, matching the
//! unguarded poll loop the dashboard has always run.

use std::sync::atomic::AtomicU64;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::Settings;
use crate::models::DashboardSnapshot;

pub const USER_AGENT: &str = "AI Fund Dashboard/1.0";

/// Top-level shared state injected into every Axum handler.
pub struct AppState {
    /// Runtime settings — env-seeded, replaceable via `PUT /api/settings`.
    pub settings: RwLock<Settings>,

    /// Latest successful refresh result.  `None` until the first refresh.
    pub snapshot: RwLock<Option<DashboardSnapshot>>,

    /// Shared reqwest client (connection pooling, descriptive UA,
    /// redirects followed).  Built once, reused for CSVs and feeds.
    pub http_client: reqwest::Client,

    // ── Health counters ───────────────────────────────────────────────────────
    pub refresh_count: AtomicU64,
    pub news_count: AtomicU64,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_default();

        Self {
            settings:      RwLock::new(settings),
            snapshot:      RwLock::new(None),
            http_client,
            refresh_count: AtomicU64::new(0),
            news_count:    AtomicU64::new(0),
        }
    }

    /// Swap in a freshly-built snapshot.
    pub async fn store_snapshot(&self, snapshot: DashboardSnapshot) {
        let mut guard = self.snapshot.write().await;
        *guard = Some(snapshot);
    }
}

/// Convenience type alias
pub type SharedState = Arc<AppState>;

pub fn build_state() -> SharedState {
    Arc::new(AppState::new(Settings::from_env()))
}

//! # Fundboard — AI Fund Dashboard Backend
//!
//! ```text
//!  ┌──────────────┐  GET /api/dashboard          ┌────────────────────────────┐
//!  │  Dashboard   │  POST /api/dashboard/refresh │ AppState                   │
//!  │  Frontend    │ ───────────────────────────▶ │ ├─ settings                │
//!  └──────────────┘  GET/PUT /api/settings       │ ├─ snapshot (positions,    │
//!                                                │ │    history, KPIs)        │
//!  ┌──────────────┐  GET /api/news               │ └─ http_client ──────────┐ │
//!  │  News Page   │ ───────────────────────────▶ └──────────────────────────┼─┘
//!  └──────────────┘                                                         │
//!                       positions.csv / history.csv / RSS+Atom feeds  ◀─────┘
//! ```

use std::net::SocketAddr;

use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod error;
mod ingest;
mod models;
mod news;
mod routes;
mod state;

use routes::{
    dashboard::{get_dashboard, health_check, refresh_dashboard},
    news::get_news,
    settings::{get_settings, put_settings},
};
use state::build_state;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ── 1. Load .env ──────────────────────────────────────────────────────────
    dotenvy::dotenv().ok();

    // ── 2. Structured logging ─────────────────────────────────────────────────
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::from_default_env()
                .add_directive("fundboard=debug".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .init();

    info!(r#"

  ╔═══════════════════════════════════════════════════════╗
  ║            FUNDBOARD — Dashboard Backend              ║
  ║       CSV Ingestion · KPIs · News Aggregation         ║
  ╚═══════════════════════════════════════════════════════╝"#);

    // ── 3. Shared state ───────────────────────────────────────────────────────
    let state = build_state();

    // ── 4. CORS ───────────────────────────────────────────────────────────────
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // ── 5. Router ─────────────────────────────────────────────────────────────
    let app = Router::new()
        // ── Portfolio ─────────────────────────────────────────────────────────
        .route("/api/dashboard",          get(get_dashboard))
        .route("/api/dashboard/refresh",  post(refresh_dashboard))
        // ── News ──────────────────────────────────────────────────────────────
        .route("/api/news",               get(get_news))
        // ── Settings ──────────────────────────────────────────────────────────
        .route("/api/settings",           get(get_settings))
        .route("/api/settings",           put(put_settings))
        // ── Health ────────────────────────────────────────────────────────────
        .route("/api/health",             get(health_check))
        // ── Middleware ────────────────────────────────────────────────────────
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    // ── 6. Bind & Serve ───────────────────────────────────────────────────────
    let addr: SocketAddr = std::env::var("BIND_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
        .parse()?;

    info!(?addr, "🚀 Fundboard server starting");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

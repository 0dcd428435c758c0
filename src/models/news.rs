//! # models::news
//!
//! The common item shape every feed is normalized into, and the payload
//! served by `GET /api/news`.  Both are entirely ephemeral — rebuilt on each
//! aggregation call, never persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One normalized article, regardless of whether it came from an RSS
/// `<item>` or an Atom `<entry>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub title: String,
    /// Deduplication key across all feeds — first occurrence wins.
    pub link: String,
    /// Human-readable feed label, e.g. `"OpenAI"`.
    pub source: String,
    pub pub_date: DateTime<Utc>,
    /// Markup-stripped, capped at 300 chars.
    pub summary: String,
}

/// Response body of `GET /api/news`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsPayload {
    pub updated_at: DateTime<Utc>,
    pub items: Vec<NewsItem>,
}

//! # news::aggregate
//!
//! Fan-out / fan-in merge over the feed catalog.
//!
//! ## Invariants
//! - No two output items share a link (first occurrence wins).
//! - Output is sorted non-increasing by publish timestamp.
//! - A feed that fails still lets every other feed's items through.

use std::collections::HashSet;

use futures_util::future::join_all;
use tracing::info;

use crate::models::NewsItem;
use crate::news::feeds::{FeedConfig, FEEDS};
use crate::news::fetch::fetch_single_feed;

/// Fetch every configured feed concurrently and merge the results.
///
/// The only error case is a panicked feed task; ordinary feed failures are
/// already absorbed per-feed as empty lists.
pub async fn aggregate_feeds(client: &reqwest::Client) -> anyhow::Result<Vec<NewsItem>> {
    aggregate_from(client, FEEDS).await
}

async fn aggregate_from(
    client: &reqwest::Client,
    feeds: &'static [FeedConfig],
) -> anyhow::Result<Vec<NewsItem>> {
    // Each task owns its result slot; merging happens only after all join.
    let handles: Vec<_> = feeds
        .iter()
        .map(|feed| {
            let client = client.clone();
            tokio::spawn(async move { fetch_single_feed(&client, feed).await })
        })
        .collect();

    let mut all_items = Vec::new();
    for joined in join_all(handles).await {
        all_items.extend(joined?);
    }

    let merged = merge_items(all_items);
    info!(items = merged.len(), feeds = feeds.len(), "📰 Feed aggregation complete");
    Ok(merged)
}

/// Dedupe by link (first occurrence wins), then sort newest-first.
fn merge_items(items: Vec<NewsItem>) -> Vec<NewsItem> {
    let mut seen = HashSet::new();
    let mut unique: Vec<NewsItem> = items
        .into_iter()
        .filter(|item| seen.insert(item.link.clone()))
        .collect();

    unique.sort_by(|a, b| b.pub_date.cmp(&a.pub_date));
    unique
}

// ─── Tests ────────────────────────────────────────────────────────────────────

//! # news::fetch
//!
//! Per-feed fetch with failure isolation: any failure — network, timeout,
//! non-2xx — degrades to an empty item list for that feed so one broken
//! source never blocks the others.

use std::time::Duration;

use tracing::{debug, warn};

use crate::models::NewsItem;
use crate::news::feeds::FeedConfig;
use crate::news::parse::{normalize_item, parse_feed, strip_markup};

/// Hard per-feed timeout.  Slow sources are treated the same as dead ones.
const FEED_TIMEOUT: Duration = Duration::from_secs(10);

const FEED_ACCEPT: &str = "application/rss+xml, application/xml, text/xml";

/// Fetch, parse, filter and normalize one feed.
///
/// Never returns an error — failures log a warning and yield `vec![]`.
pub async fn fetch_single_feed(client: &reqwest::Client, feed: &FeedConfig) -> Vec<NewsItem> {
    let xml = match fetch_feed_body(client, feed.url).await {
        Ok(xml) => xml,
        Err(reason) => {
            warn!(source = feed.source, url = feed.url, %reason, "⚠️ Feed fetch failed");
            return Vec::new();
        }
    };

    let mut raw_items = parse_feed(&xml);

    if let Some(filter) = &feed.filter {
        raw_items.retain(|item| filter.matches(&item.title, &strip_markup(&item.summary)));
    }

    let items: Vec<NewsItem> = raw_items
        .iter()
        .map(|raw| normalize_item(raw, feed.source))
        .collect();

    debug!(source = feed.source, count = items.len(), "Feed fetched");
    items
}

async fn fetch_feed_body(client: &reqwest::Client, url: &str) -> Result<String, anyhow::Error> {
    let response = client
        .get(url)
        .header(reqwest::header::ACCEPT, FEED_ACCEPT)
        .timeout(FEED_TIMEOUT)
        .send()
        .await?;

    if !response.status().is_success() {
        anyhow::bail!("HTTP {}", response.status());
    }

    Ok(response.text().await?)
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // Port 1 is never listening — connection refused immediately, no
    // external network involved.
    const DEAD_FEED: FeedConfig = FeedConfig {
        url: "http://127.0.0.1:1/feed.xml",
        source: "Dead Feed",
        filter: None,
    };

    #[tokio::test]
    async fn test_unreachable_feed_yields_empty_not_error() {
        let client = reqwest::Client::new();
        let items = fetch_single_feed(&client, &DEAD_FEED).await;
        assert!(items.is_empty());
    }
}

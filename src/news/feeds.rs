//! # news::feeds
//!
//! The fixed feed catalog.  Broad tech feeds carry a keyword filter so only
//! AI coverage makes it through; dedicated AI feeds pass everything.
//!
//! Keyword matching is raw case-insensitive substring matching — `"ai"`
//! matches `"email"`.  That is how the dashboard has always filtered and it
//! is preserved deliberately.

/// Per-feed keyword filter, checked against the item before normalization.
/// An item passes when any title keyword occurs in the title, or any summary
/// keyword occurs in the summary.
#[derive(Debug, Clone, Copy)]
pub struct KeywordFilter {
    pub title_keywords: &'static [&'static str],
    pub summary_keywords: &'static [&'static str],
}

impl KeywordFilter {
    pub fn matches(&self, title: &str, summary: &str) -> bool {
        let title = title.to_lowercase();
        let summary = summary.to_lowercase();

        self.title_keywords.iter().any(|kw| title.contains(kw))
            || self.summary_keywords.iter().any(|kw| summary.contains(kw))
    }
}

/// One configured feed source.
#[derive(Debug, Clone, Copy)]
pub struct FeedConfig {
    pub url: &'static str,
    /// Feed label attached to every item, e.g. `"OpenAI"`.
    pub source: &'static str,
    pub filter: Option<KeywordFilter>,
}

pub const FEEDS: &[FeedConfig] = &[
    FeedConfig {
        url: "https://openai.com/news/rss.xml",
        source: "OpenAI",
        filter: None,
    },
    FeedConfig {
        url: "https://blogs.nvidia.com/feed/",
        source: "NVIDIA",
        filter: None,
    },
    FeedConfig {
        url: "https://blog.google/technology/ai/rss/",
        source: "Google AI",
        filter: None,
    },
    FeedConfig {
        url: "https://engineering.fb.com/feed/",
        source: "Meta",
        filter: Some(KeywordFilter {
            title_keywords: &["ai", "ml", "machine learning"],
            summary_keywords: &["ai", "machine learning"],
        }),
    },
    FeedConfig {
        url: "https://techcrunch.com/tag/artificial-intelligence/feed/",
        source: "TechCrunch",
        filter: None,
    },
    FeedConfig {
        url: "https://www.theverge.com/rss/index.xml",
        source: "The Verge",
        filter: Some(KeywordFilter {
            title_keywords: &["ai", "artificial intelligence"],
            summary_keywords: &[],
        }),
    },
    FeedConfig {
        url: "https://www.technologyreview.com/feed/",
        source: "MIT Technology Review",
        filter: Some(KeywordFilter {
            title_keywords: &["ai", "artificial intelligence"],
            summary_keywords: &["ai", "artificial intelligence"],
        }),
    },
];

// ─── Tests ────────────────────────────────────────────────────────────────────

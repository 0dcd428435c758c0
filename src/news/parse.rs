//! # news::parse
//!
//! Pull-parses feed markup with `quick-xml`, treating RSS `<item>` and Atom
//! `<entry>` elements uniformly, then normalizes raw items into [`NewsItem`].
//!
//! Field variants accepted:
//! - link: element text, falling back to the `href` attribute (Atom)
//! - timestamp: `pubDate` / `published` / `updated`, RFC 2822 then RFC 3339
//! - summary: `description` / `summary` / `content`, markup stripped and
//!   truncated to 300 chars
//!
//! First occurrence wins for every field, matching document order.

use chrono::{DateTime, Utc};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::models::NewsItem;

const SUMMARY_MAX_CHARS: usize = 300;

/// A feed item as extracted from the markup, before normalization and
/// filtering.  All fields are raw strings; empty means absent.
#[derive(Debug, Clone, Default)]
pub struct RawFeedItem {
    pub title: String,
    pub link: String,
    pub pub_date: String,
    pub summary: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Field {
    Title,
    Link,
    Date,
    Summary,
}

fn classify(name: &[u8]) -> Option<Field> {
    match name {
        b"title" => Some(Field::Title),
        b"link" => Some(Field::Link),
        b"pubDate" | b"published" | b"updated" => Some(Field::Date),
        b"description" | b"summary" | b"content" => Some(Field::Summary),
        _ => None,
    }
}

fn href_attribute(element: &BytesStart<'_>) -> Option<String> {
    element
        .try_get_attribute("href")
        .ok()
        .flatten()
        .and_then(|attr| attr.unescape_value().ok())
        .map(|value| value.into_owned())
}

/// Extract all `<item>`/`<entry>` elements from feed markup.
///
/// A field element may itself contain child elements — an xhtml-type Atom
/// summary wraps its text in a `<div>` tree.  All descendant text is
/// collected, like the DOM's `textContent`: child starts inside an active
/// field only bump a depth counter, and the field commits when its own end
/// tag closes it.
///
/// A malformed document yields whatever items were complete before the
/// error — a truncated feed still contributes its good items.
pub fn parse_feed(xml: &str) -> Vec<RawFeedItem> {
    let mut reader = Reader::from_str(xml);

    let mut items = Vec::new();
    let mut current: Option<RawFeedItem> = None;
    let mut field: Option<Field> = None;
    // Nesting depth of child elements inside the active field.
    let mut depth = 0usize;
    let mut text_buf = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = e.local_name();
                match name.as_ref() {
                    b"item" | b"entry" => {
                        current = Some(RawFeedItem::default());
                        field = None;
                        depth = 0;
                        text_buf.clear();
                    }
                    other => {
                        if let Some(item) = current.as_mut() {
                            if field.is_some() {
                                // Child element inside the active field —
                                // keep accumulating descendant text.
                                depth += 1;
                            } else {
                                field = classify(other);
                                text_buf.clear();
                                // Atom puts the link in an attribute.
                                if field == Some(Field::Link) && item.link.is_empty() {
                                    if let Some(href) = href_attribute(&e) {
                                        item.link = href;
                                    }
                                }
                            }
                        }
                    }
                }
            }

            // Self-closing elements, e.g. Atom `<link href="..."/>`.  Only
            // item-level ones count — a self-closing child inside an active
            // field (say `<br/>`) is not the item's link.
            Ok(Event::Empty(e)) => {
                if field.is_none() {
                    if let Some(item) = current.as_mut() {
                        if e.local_name().as_ref() == b"link" && item.link.is_empty() {
                            if let Some(href) = href_attribute(&e) {
                                item.link = href;
                            }
                        }
                    }
                }
            }

            Ok(Event::Text(t)) => {
                if current.is_some() && field.is_some() {
                    if let Ok(text) = t.unescape() {
                        text_buf.push_str(&text);
                    }
                }
            }

            Ok(Event::CData(t)) => {
                if current.is_some() && field.is_some() {
                    text_buf.push_str(&String::from_utf8_lossy(t.into_inner().as_ref()));
                }
            }

            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"item" | b"entry" => {
                    if let Some(item) = current.take() {
                        items.push(item);
                    }
                    field = None;
                    depth = 0;
                    text_buf.clear();
                }
                _ => {
                    if depth > 0 {
                        depth -= 1;
                    } else if let (Some(item), Some(active)) = (current.as_mut(), field.take()) {
                        let slot = match active {
                            Field::Title => &mut item.title,
                            Field::Link => &mut item.link,
                            Field::Date => &mut item.pub_date,
                            Field::Summary => &mut item.summary,
                        };
                        if slot.is_empty() {
                            *slot = text_buf.trim().to_string();
                        }
                        text_buf.clear();
                    } else {
                        text_buf.clear();
                    }
                }
            },

            Ok(Event::Eof) => break,
            Err(_) => break,
            _ => {}
        }
    }

    items
}

// ─── Normalization ────────────────────────────────────────────────────────────

/// Parse a feed timestamp: RFC 2822 (RSS) first, then RFC 3339 (Atom).
pub fn parse_feed_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    DateTime::parse_from_rfc2822(raw)
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Drop everything between `<` and `>` — summaries often embed HTML.
pub fn strip_markup(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_tag = false;
    for ch in raw.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out.trim().to_string()
}

/// Convert a raw item into the common shape under a feed's source label.
///
/// An unparsable or absent timestamp normalizes to `Utc::now()` — such
/// items float to the top of the recency sort, as they always have.
pub fn normalize_item(raw: &RawFeedItem, source: &str) -> NewsItem {
    let title = raw.title.trim();
    let summary: String = strip_markup(&raw.summary)
        .chars()
        .take(SUMMARY_MAX_CHARS)
        .collect();

    NewsItem {
        title: if title.is_empty() { "Untitled".to_string() } else { title.to_string() },
        link: raw.link.trim().to_string(),
        source: source.to_string(),
        pub_date: parse_feed_date(&raw.pub_date).unwrap_or_else(Utc::now),
        summary,
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const RSS_SAMPLE: &str = r#"<?xml version="1.0"?>
<rss version="2.0">
  <channel>
    <title>Example Blog</title>
    <link>https://example.com</link>
    <item>
      <title>First post</title>
      <link>https://example.com/first</link>
      <pubDate>Mon, 02 Jun 2025 10:00:00 GMT</pubDate>
      <description><![CDATA[<p>Hello <b>world</b></p>]]></description>
    </item>
    <item>
      <title>Second post</title>
      <link>https://example.com/second</link>
      <pubDate>Tue, 03 Jun 2025 10:00:00 GMT</pubDate>
      <description>Plain text body</description>
    </item>
  </channel>
</rss>"#;

    const ATOM_SAMPLE: &str = r#"<?xml version="1.0"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Example Feed</title>
  <entry>
    <title>Atom entry</title>
    <link href="https://example.com/atom-entry"/>
    <published>2025-06-04T12:00:00+00:00</published>
    <updated>2025-06-05T12:00:00+00:00</updated>
    <summary>Atom summary text</summary>
  </entry>
</feed>"#;

    #[test]
    fn test_rss_items_extracted() {
        let items = parse_feed(RSS_SAMPLE);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "First post");
        assert_eq!(items[0].link, "https://example.com/first");
        assert_eq!(items[1].summary, "Plain text body");
        // Channel-level title/link never leak into items.
        assert_ne!(items[0].title, "Example Blog");
    }

    #[test]
    fn test_atom_link_href_fallback() {
        let items = parse_feed(ATOM_SAMPLE);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].link, "https://example.com/atom-entry");
        // First timestamp variant in document order wins.
        assert_eq!(items[0].pub_date, "2025-06-04T12:00:00+00:00");
        assert_eq!(items[0].summary, "Atom summary text");
    }

    const ATOM_XHTML_SAMPLE: &str = r#"<?xml version="1.0"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <entry>
    <title>Xhtml entry</title>
    <link href="https://example.com/xhtml"/>
    <published>2025-06-06T12:00:00+00:00</published>
    <summary type="xhtml"><div xmlns="http://www.w3.org/1999/xhtml">Hello <b>world</b></div></summary>
  </entry>
</feed>"#;

    #[test]
    fn test_nested_markup_summary_keeps_descendant_text() {
        let items = parse_feed(ATOM_XHTML_SAMPLE);
        assert_eq!(items.len(), 1);
        // Text before, inside and after child elements is all collected,
        // spacing included.
        assert_eq!(items[0].summary, "Hello world");
        assert_eq!(items[0].title, "Xhtml entry");
        assert_eq!(items[0].link, "https://example.com/xhtml");

        let normalized = normalize_item(&items[0], "Example");
        assert_eq!(normalized.summary, "Hello world");
    }

    #[test]
    fn test_cdata_summary_markup_stripped_on_normalize() {
        let items = parse_feed(RSS_SAMPLE);
        let normalized = normalize_item(&items[0], "Example");
        assert_eq!(normalized.summary, "Hello world");
        assert_eq!(normalized.source, "Example");
    }

    #[test]
    fn test_feed_date_variants() {
        assert!(parse_feed_date("Mon, 02 Jun 2025 10:00:00 GMT").is_some());
        assert!(parse_feed_date("2025-06-04T12:00:00Z").is_some());
        assert!(parse_feed_date("yesterday").is_none());
    }

    #[test]
    fn test_untitled_fallback_and_truncation() {
        let raw = RawFeedItem {
            title: "  ".into(),
            link: "https://example.com/x".into(),
            pub_date: String::new(),
            summary: "y".repeat(1000),
        };
        let item = normalize_item(&raw, "Example");
        assert_eq!(item.title, "Untitled");
        assert_eq!(item.summary.chars().count(), 300);
    }

    #[test]
    fn test_truncated_document_keeps_complete_items() {
        let cut = &RSS_SAMPLE[..RSS_SAMPLE.find("Second post").unwrap()];
        let items = parse_feed(cut);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "First post");
    }

    #[test]
    fn test_strip_markup() {
        assert_eq!(strip_markup("<p>a <a href=\"x\">b</a></p>"), "a b");
        assert_eq!(strip_markup("no markup"), "no markup");
    }
}

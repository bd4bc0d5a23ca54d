//! Description markup
//!
//! Descriptions are plain text with a single inline link syntax,
//! `[label](http(s)://url)`. Everything else is text and gets escaped when
//! written into HTML.

use regex::Regex;
use std::sync::LazyLock;

static LINK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\[\]]+)\]\((https?://[^\s()]+)\)").expect("link pattern is valid")
});

/// A run of description text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Plain text, shown as-is
    Text(String),
    /// An inline link
    Link { label: String, url: String },
}

/// Split `text` into plain runs and links
#[must_use]
pub fn parse_links(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut last = 0;

    for caps in LINK_PATTERN.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        if whole.start() > last {
            segments.push(Segment::Text(text[last..whole.start()].to_string()));
        }
        segments.push(Segment::Link {
            label: caps[1].to_string(),
            url: caps[2].to_string(),
        });
        last = whole.end();
    }

    if last < text.len() {
        segments.push(Segment::Text(text[last..].to_string()));
    }

    segments
}

/// First link URL in `text`, if any
#[must_use]
pub fn first_link(text: &str) -> Option<String> {
    LINK_PATTERN.captures(text).map(|caps| caps[2].to_string())
}

/// Escape text for HTML content and attribute values (`& < > " '`)
#[must_use]
pub fn escape(text: &str) -> String {
    let escaped = html_escape::encode_quoted_attribute(text);
    if escaped.contains('\'') {
        escaped.replace('\'', "&#039;")
    } else {
        escaped.into_owned()
    }
}

/// Render a description as HTML: escaped text with links rewritten to anchors
/// that open in a new browsing context
#[must_use]
pub fn render_links(text: &str) -> String {
    segments_to_html(&parse_links(text))
}

/// HTML for already-parsed segments
#[must_use]
pub fn segments_to_html(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|segment| match segment {
            Segment::Text(t) => escape(t),
            Segment::Link { label, url } => format!(
                r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
                escape(url),
                escape(label)
            ),
        })
        .collect()
}

/// Plain-text rendering for terminals: links become `label <url>`
#[must_use]
pub fn plain_text(text: &str) -> String {
    parse_links(text)
        .into_iter()
        .map(|segment| match segment {
            Segment::Text(t) => t,
            Segment::Link { label, url } => format!("{label} <{url}>"),
        })
        .collect()
}

//! Reading statistics derived from rendered text.
//!
//! The author dashboard shows a live word count and read time while an
//! article is drafted, and article cards show a short excerpt. All of these
//! work on the visible text of the rendered nodes: inline tags stripped,
//! common entities decoded.

use crate::document::{Document, ListItem};
use crate::render::RenderedNode;

/// Reading speed used for read-time estimates.
pub const WORDS_PER_MINUTE: usize = 200;

/// Visible text of a document, one line per block (list items one per line).
pub fn plain_text(doc: &Document) -> String {
    let mut lines: Vec<String> = Vec::new();

    for node in doc.nodes() {
        match node {
            RenderedNode::Paragraph { html } | RenderedNode::Heading { html, .. } => {
                lines.push(strip_tags(&html));
            }
            RenderedNode::List { items, .. } => collect_items(&items, &mut lines),
            RenderedNode::Code { code } => lines.push(code),
        }
    }

    lines.join("\n")
}

fn collect_items(items: &[ListItem], lines: &mut Vec<String>) {
    for item in items {
        lines.push(strip_tags(&item.html));
        collect_items(&item.children, lines);
    }
}

/// Number of whitespace-separated words in the visible text.
pub fn word_count(doc: &Document) -> usize {
    plain_text(doc).split_whitespace().count()
}

/// Estimated read time in whole minutes, never less than one.
pub fn read_time_minutes(doc: &Document) -> usize {
    word_count(doc).div_ceil(WORDS_PER_MINUTE).max(1)
}

/// Text of the first paragraph with whitespace collapsed, cut to
/// `max_chars` characters with a trailing ellipsis when longer.
///
/// Returns `None` when the document has no non-empty paragraph.
pub fn excerpt(doc: &Document, max_chars: usize) -> Option<String> {
    let text = doc.nodes().find_map(|node| match node {
        RenderedNode::Paragraph { html } => {
            let text = strip_tags(&html)
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ");
            (!text.is_empty()).then_some(text)
        }
        _ => None,
    })?;

    if text.chars().count() <= max_chars {
        return Some(text);
    }

    let mut cut: String = text.chars().take(max_chars).collect();
    cut.truncate(cut.trim_end().len());
    cut.push('…');
    Some(cut)
}

/// Remove markup tags and decode the handful of entities the editor emits.
pub fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    let mut rest = html;

    while let Some(c) = rest.chars().next() {
        if in_tag {
            if c == '>' {
                in_tag = false;
            }
            rest = &rest[c.len_utf8()..];
            continue;
        }

        match c {
            '<' => in_tag = true,
            '&' => {
                if let Some((decoded, len)) = decode_entity(rest) {
                    out.push(decoded);
                    rest = &rest[len..];
                    continue;
                }
                out.push('&');
            }
            _ => out.push(c),
        }
        rest = &rest[c.len_utf8()..];
    }

    out
}

fn decode_entity(s: &str) -> Option<(char, usize)> {
    const ENTITIES: &[(&str, char)] = &[
        ("&amp;", '&'),
        ("&lt;", '<'),
        ("&gt;", '>'),
        ("&quot;", '"'),
        ("&#39;", '\''),
        ("&apos;", '\''),
        ("&nbsp;", ' '),
    ];

    ENTITIES
        .iter()
        .find(|(entity, _)| s.starts_with(entity))
        .map(|(entity, c)| (*c, entity.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(blocks: serde_json::Value) -> Document {
        Document::from_value(json!({ "blocks": blocks }))
    }

    #[test]
    fn test_strip_tags() {
        assert_eq!(strip_tags("<b>bold</b> and <i>it</i>"), "bold and it");
        assert_eq!(strip_tags("a&nbsp;b &amp; c"), "a b & c");
        assert_eq!(strip_tags("AT&T"), "AT&T");
        assert_eq!(strip_tags("<a href=\"x\">link</a>"), "link");
    }

    #[test]
    fn test_plain_text() {
        let d = doc(json!([
            {"type": "header", "data": {"level": 2, "text": "Title"}},
            {"type": "paragraph", "data": {"text": "Body <b>text</b>"}},
            {"type": "list", "data": {"items": ["one", "two"]}},
            {"type": "code", "data": {"code": "let x = 1;"}},
            {"type": "image", "data": {"url": "x.png"}}
        ]));

        assert_eq!(plain_text(&d), "Title\nBody text\none\ntwo\nlet x = 1;");
    }

    #[test]
    fn test_word_count_and_read_time() {
        let words = vec!["word"; 401].join(" ");
        let d = doc(json!([{"type": "paragraph", "data": {"text": words}}]));

        assert_eq!(word_count(&d), 401);
        assert_eq!(read_time_minutes(&d), 3);
    }

    #[test]
    fn test_read_time_minimum() {
        assert_eq!(read_time_minutes(&Document::default()), 1);
    }

    #[test]
    fn test_excerpt() {
        let d = doc(json!([
            {"type": "header", "data": {"level": 1, "text": "Skip me"}},
            {"type": "paragraph", "data": {"text": "   "}},
            {"type": "paragraph", "data": {"text": "A <b>new</b>   campaign targets routers."}}
        ]));

        assert_eq!(
            excerpt(&d, 100).as_deref(),
            Some("A new campaign targets routers.")
        );
        assert_eq!(excerpt(&d, 6).as_deref(), Some("A new…"));
    }

    #[test]
    fn test_excerpt_none() {
        let d = doc(json!([{"type": "code", "data": {"code": "x"}}]));
        assert_eq!(excerpt(&d, 10), None);
    }
}

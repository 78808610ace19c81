//! Document → rendered nodes → HTML.
//!
//! Rendering is total: blocks of unknown kind, malformed blocks, and missing
//! documents produce no nodes rather than an error. Malformed blocks are
//! logged and skipped so one bad block never hides the rest of an article.
//!
//! # Trust boundary
//!
//! Paragraph, heading, and list item text is inline HTML produced by the
//! editor, and the caller guarantees it was sanitized upstream. It is
//! emitted verbatim. Code listings are literal text and are escaped when
//! written as HTML.
//!
//! # Example
//!
//! ```
//! use socsignals::{Document, HtmlConfig, render_html};
//!
//! let doc = Document::parse(r#"{"blocks":[{"type":"paragraph","data":{"text":"<b>hi</b>"}}]}"#)?;
//! assert_eq!(render_html(Some(&doc), &HtmlConfig::default()), "<p><b>hi</b></p>");
//! # Ok::<(), socsignals::Error>(())
//! ```

use tracing::{debug, warn};

use crate::document::{Block, Document, ListItem, RawBlock};

/// One rendered unit of output, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedNode {
    /// `<p>` with pre-formed inner HTML.
    Paragraph { html: String },
    /// `<h{level}>`; the level is carried through exactly as stored.
    Heading { level: i64, html: String },
    /// `<ol>` or `<ul>` holding one `<li>` per item.
    List { ordered: bool, items: Vec<ListItem> },
    /// `<pre><code>` around a literal, unescaped code string.
    Code { code: String },
}

impl RenderedNode {
    /// Convert a typed block, or `None` for kinds that render to nothing.
    pub fn from_block(block: Block) -> Option<Self> {
        match block {
            Block::Paragraph { text } => Some(Self::Paragraph { html: text }),
            Block::Header { level, text } => Some(Self::Heading { level, html: text }),
            Block::List { style, items } => Some(Self::List {
                ordered: style.is_ordered(),
                items,
            }),
            Block::Code { code } => Some(Self::Code { code }),
            Block::Unsupported { .. } => None,
        }
    }

    /// HTML tag name of the outermost element.
    pub fn tag(&self) -> String {
        match self {
            Self::Paragraph { .. } => "p".to_string(),
            Self::Heading { level, .. } => format!("h{level}"),
            Self::List { ordered: true, .. } => "ol".to_string(),
            Self::List { ordered: false, .. } => "ul".to_string(),
            Self::Code { .. } => "pre".to_string(),
        }
    }

    /// Append this node's markup to `out`.
    pub fn write_html(&self, out: &mut String, config: &HtmlConfig) {
        match self {
            Self::Paragraph { html } => {
                out.push_str("<p>");
                out.push_str(html);
                out.push_str("</p>");
            }
            Self::Heading { html, .. } => {
                let tag = self.tag();
                open_tag(out, &tag, config.heading_class.as_deref());
                out.push_str(html);
                close_tag(out, &tag);
            }
            Self::List { ordered, items } => write_list(out, *ordered, items),
            Self::Code { code } => {
                out.push_str("<pre>");
                open_tag(out, "code", config.code_class.as_deref());
                out.push_str(&escape_html(code));
                out.push_str("</code></pre>");
            }
        }
    }

    /// This node's markup as a string.
    pub fn to_html(&self, config: &HtmlConfig) -> String {
        let mut out = String::new();
        self.write_html(&mut out, config);
        out
    }
}

/// Options for HTML serialization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlConfig {
    /// `class` attribute for heading elements.
    pub heading_class: Option<String>,
    /// `class` attribute for the `<code>` element of code listings.
    pub code_class: Option<String>,
    /// Put each top-level block on its own line.
    pub pretty: bool,
}

impl HtmlConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_heading_class(mut self, class: impl Into<String>) -> Self {
        self.heading_class = Some(class.into());
        self
    }

    pub fn with_code_class(mut self, class: impl Into<String>) -> Self {
        self.code_class = Some(class.into());
        self
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

/// Lazy iterator over a document's rendered nodes.
///
/// Produced by [`Document::nodes`]. It is finite and single-pass; call
/// `nodes()` again for a fresh pass.
pub struct Nodes<'a> {
    blocks: std::iter::Enumerate<std::slice::Iter<'a, RawBlock>>,
}

impl Iterator for Nodes<'_> {
    type Item = RenderedNode;

    fn next(&mut self) -> Option<RenderedNode> {
        for (index, raw) in self.blocks.by_ref() {
            match Block::from_raw(index, raw) {
                Ok(block) => match RenderedNode::from_block(block) {
                    Some(node) => return Some(node),
                    None => debug!(index, kind = ?raw.kind, "skipping unsupported block"),
                },
                Err(err) => warn!(index, "skipping block: {err}"),
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.blocks.size_hint().1)
    }
}

impl Document {
    /// Render blocks lazily, in document order.
    pub fn nodes(&self) -> Nodes<'_> {
        Nodes {
            blocks: self.blocks.iter().enumerate(),
        }
    }
}

/// Render a document into nodes.
///
/// A missing document renders to nothing.
pub fn render_document(doc: Option<&Document>) -> Vec<RenderedNode> {
    let Some(doc) = doc else {
        return Vec::new();
    };

    let nodes: Vec<_> = doc.nodes().collect();
    debug!(blocks = doc.len(), nodes = nodes.len(), "rendered document");
    nodes
}

/// Render a document straight to an HTML fragment.
pub fn render_html(doc: Option<&Document>, config: &HtmlConfig) -> String {
    let mut out = String::new();
    let Some(doc) = doc else {
        return out;
    };

    for node in doc.nodes() {
        node.write_html(&mut out, config);
        if config.pretty {
            out.push('\n');
        }
    }
    out
}

fn open_tag(out: &mut String, tag: &str, class: Option<&str>) {
    out.push('<');
    out.push_str(tag);
    if let Some(class) = class {
        out.push_str(" class=\"");
        out.push_str(&escape_html(class));
        out.push('"');
    }
    out.push('>');
}

fn close_tag(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn write_list(out: &mut String, ordered: bool, items: &[ListItem]) {
    let tag = if ordered { "ol" } else { "ul" };
    open_tag(out, tag, None);
    for item in items {
        out.push_str("<li>");
        out.push_str(&item.html);
        if !item.children.is_empty() {
            write_list(out, ordered, &item.children);
        }
        out.push_str("</li>");
    }
    close_tag(out, tag);
}

/// Escape special HTML characters.
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(blocks: serde_json::Value) -> Document {
        Document::from_value(json!({ "blocks": blocks }))
    }

    #[test]
    fn test_heading_tag_is_unclamped() {
        let node = RenderedNode::Heading {
            level: 7,
            html: "x".to_string(),
        };
        assert_eq!(node.tag(), "h7");
        assert_eq!(node.to_html(&HtmlConfig::default()), "<h7>x</h7>");
    }

    #[test]
    fn test_heading_class() {
        let node = RenderedNode::Heading {
            level: 2,
            html: "Intro".to_string(),
        };
        let config = HtmlConfig::new().with_heading_class("font-display font-bold");
        assert_eq!(
            node.to_html(&config),
            r#"<h2 class="font-display font-bold">Intro</h2>"#
        );
    }

    #[test]
    fn test_code_is_escaped_in_html_only() {
        let node = RenderedNode::Code {
            code: "if a < b && c > d {}".to_string(),
        };
        assert_eq!(
            node.to_html(&HtmlConfig::new().with_code_class("lang")),
            r#"<pre><code class="lang">if a &lt; b &amp;&amp; c &gt; d {}</code></pre>"#
        );
        let RenderedNode::Code { code } = node else {
            unreachable!()
        };
        assert_eq!(code, "if a < b && c > d {}");
    }

    #[test]
    fn test_nested_list_html() {
        let mut parent = ListItem::new("a");
        parent.children.push(ListItem::new("a.1"));
        let node = RenderedNode::List {
            ordered: true,
            items: vec![parent, ListItem::new("b")],
        };
        assert_eq!(
            node.to_html(&HtmlConfig::default()),
            "<ol><li>a<ol><li>a.1</li></ol></li><li>b</li></ol>"
        );
    }

    #[test]
    fn test_malformed_block_is_skipped_not_fatal() {
        let d = doc(json!([
            {"type": "paragraph", "data": {"text": "first"}},
            {"type": "header", "data": {"text": "no level"}},
            {"type": "code"},
            {"type": "paragraph", "data": {"text": "last"}}
        ]));

        let nodes = render_document(Some(&d));
        assert_eq!(
            nodes,
            vec![
                RenderedNode::Paragraph {
                    html: "first".to_string()
                },
                RenderedNode::Paragraph {
                    html: "last".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_nodes_is_lazy_and_single_pass() {
        let d = doc(json!([
            {"type": "paragraph", "data": {"text": "one"}},
            {"type": "paragraph", "data": {"text": "two"}}
        ]));

        let mut nodes = d.nodes();
        assert!(matches!(nodes.next(), Some(RenderedNode::Paragraph { .. })));
        assert!(matches!(nodes.next(), Some(RenderedNode::Paragraph { .. })));
        assert_eq!(nodes.next(), None);
        assert_eq!(nodes.next(), None);

        // A fresh call starts over
        assert_eq!(d.nodes().count(), 2);
    }

    #[test]
    fn test_render_html_pretty() {
        let d = doc(json!([
            {"type": "header", "data": {"level": 1, "text": "T"}},
            {"type": "paragraph", "data": {"text": "p"}}
        ]));

        let html = render_html(Some(&d), &HtmlConfig::new().with_pretty(true));
        assert_eq!(html, "<h1>T</h1>\n<p>p</p>\n");
    }

    #[test]
    fn test_render_html_none() {
        assert_eq!(render_html(None, &HtmlConfig::default()), "");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("Hello"), "Hello");
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html(r#"Say "hi""#), "Say &quot;hi&quot;");
        assert_eq!(escape_html("it's"), "it&#39;s");
    }
}

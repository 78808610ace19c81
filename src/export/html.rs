//! HTML exporter: a bare fragment, or a standalone page around it.

use std::io::{self, Write};

use crate::document::Document;
use crate::render::{HtmlConfig, escape_html, render_html};

use super::Exporter;

/// Page wrapper for standalone output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Page {
    title: String,
    stylesheet_href: Option<String>,
}

/// Exporter for HTML output.
#[derive(Debug, Clone, Default)]
pub struct HtmlExporter {
    config: HtmlConfig,
    page: Option<Page>,
}

impl HtmlExporter {
    /// Create a new HtmlExporter that writes a bare fragment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an HtmlExporter with the specified configuration.
    pub fn with_config(config: HtmlConfig) -> Self {
        Self { config, page: None }
    }

    /// Wrap the fragment in a complete HTML page with the given title.
    pub fn standalone(mut self, title: impl Into<String>) -> Self {
        let page = self.page.get_or_insert_with(Page::default);
        page.title = title.into();
        self
    }

    /// Link a stylesheet from the page head. Implies standalone output.
    pub fn with_stylesheet(mut self, href: impl Into<String>) -> Self {
        let page = self.page.get_or_insert_with(Page::default);
        page.stylesheet_href = Some(href.into());
        self
    }
}

impl Exporter for HtmlExporter {
    fn export<W: Write>(&self, doc: &Document, writer: &mut W) -> io::Result<()> {
        let body = render_html(Some(doc), &self.config);

        let Some(page) = &self.page else {
            return writer.write_all(body.as_bytes());
        };

        writeln!(writer, "<!DOCTYPE html>")?;
        writeln!(writer, "<html>")?;
        writeln!(writer, "<head>")?;
        writeln!(writer, "  <meta charset=\"utf-8\"/>")?;
        writeln!(writer, "  <title>{}</title>", escape_html(&page.title))?;
        if let Some(href) = &page.stylesheet_href {
            writeln!(
                writer,
                "  <link rel=\"stylesheet\" href=\"{}\"/>",
                escape_html(href)
            )?;
        }
        writeln!(writer, "</head>")?;
        writeln!(writer, "<body>")?;
        writeln!(writer, "<article>")?;
        writer.write_all(body.as_bytes())?;
        if !body.is_empty() && !body.ends_with('\n') {
            writeln!(writer)?;
        }
        writeln!(writer, "</article>")?;
        writeln!(writer, "</body>")?;
        writeln!(writer, "</html>")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Document {
        Document::from_value(json!({
            "blocks": [{"type": "paragraph", "data": {"text": "Hello"}}]
        }))
    }

    fn export_to_string(exporter: &HtmlExporter, doc: &Document) -> String {
        let mut out = Vec::new();
        exporter.export(doc, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_fragment() {
        assert_eq!(export_to_string(&HtmlExporter::new(), &sample()), "<p>Hello</p>");
    }

    #[test]
    fn test_standalone_page() {
        let exporter = HtmlExporter::new()
            .standalone("Bugs & <Fixes>")
            .with_stylesheet("style.css");
        let html = export_to_string(&exporter, &sample());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Bugs &amp; &lt;Fixes&gt;</title>"));
        assert!(html.contains(r#"href="style.css""#));
        assert!(html.contains("<article>\n<p>Hello</p>\n</article>"));
        assert!(html.ends_with("</html>\n"));
    }

    #[test]
    fn test_stylesheet_alone_implies_page() {
        let html = export_to_string(&HtmlExporter::new().with_stylesheet("a.css"), &sample());
        assert!(html.contains("<title></title>"));
    }
}

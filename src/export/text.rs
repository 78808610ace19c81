//! Plain-text exporter.

use std::io::{self, Write};

use crate::document::Document;
use crate::document::stats::plain_text;

use super::Exporter;

/// Exporter for the visible text of a document, one block per line.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextExporter;

impl TextExporter {
    pub fn new() -> Self {
        Self
    }
}

impl Exporter for TextExporter {
    fn export<W: Write>(&self, doc: &Document, writer: &mut W) -> io::Result<()> {
        let text = plain_text(doc);
        writer.write_all(text.as_bytes())?;
        if !text.is_empty() {
            writeln!(writer)?;
        }
        Ok(())
    }
}

//! Export module for writing rendered documents.
//!
//! Provides the `Exporter` trait and output-specific implementations.
//!
//! # Architecture
//!
//! The `Exporter` trait uses a builder pattern:
//! - `new()` creates an exporter with default configuration
//! - `with_config()` allows customization
//! - `export()` writes to any `Write` destination
//!
//! # Example
//!
//! ```no_run
//! use socsignals::Document;
//! use socsignals::export::{Exporter, HtmlExporter};
//! use std::fs::File;
//!
//! let doc = Document::from_bytes(&std::fs::read("article.json")?)?;
//! let mut file = File::create("article.html")?;
//!
//! HtmlExporter::new().standalone("Weekly Threat Brief").export(&doc, &mut file)?;
//! # Ok::<(), socsignals::Error>(())
//! ```

use std::io::{self, Write};

use crate::document::Document;

mod html;
mod text;

pub use html::HtmlExporter;
pub use text::TextExporter;

/// Trait for exporting documents to specific output formats.
///
/// Exporters hold their configuration, and the `export` method writes to any
/// `Write` destination:
/// - `std::fs::File` for disk output
/// - `Vec<u8>` for in-memory output
/// - `std::io::Stdout` for piping
pub trait Exporter {
    /// Export the document to the provided writer.
    fn export<W: Write>(&self, doc: &Document, writer: &mut W) -> io::Result<()>;
}

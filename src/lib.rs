//! # socsignals
//!
//! Article core of the SOCSignals publishing platform: slug generation for
//! article URLs and rendering of block-editor documents to HTML.
//!
//! ## Features
//!
//! - Derive URL slugs from article titles
//! - Parse block-editor JSON documents without ever failing on unknown content
//! - Render paragraphs, headings, lists, and code listings to HTML
//! - Word count, read time, and excerpts for dashboards and article cards
//! - Build article upsert records from submitted editor forms
//!
//! Storage, authentication, and the editor itself are external services.
//!
//! ## Quick Start
//!
//! ```
//! use socsignals::{Document, HtmlConfig, generate_slug, render_html};
//!
//! assert_eq!(generate_slug("Hello, World!  Security Report"), "hello-world-security-report");
//!
//! let doc = Document::parse(r#"{
//!     "blocks": [
//!         {"type": "header", "data": {"level": 2, "text": "Impact"}},
//!         {"type": "list", "data": {"style": "ordered", "items": ["Patch", "Rotate keys"]}}
//!     ]
//! }"#)?;
//!
//! let html = render_html(Some(&doc), &HtmlConfig::default());
//! assert_eq!(html, "<h2>Impact</h2><ol><li>Patch</li><li>Rotate keys</li></ol>");
//! # Ok::<(), socsignals::Error>(())
//! ```

pub mod article;
pub mod document;
pub mod error;
pub mod export;
pub mod render;
pub mod slug;
pub(crate) mod util;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use article::{ArticleForm, ArticleRecord, ArticleStatus, SaveOutcome, save_article};
pub use document::{Block, Document, ListItem, ListStyle, RawBlock};
pub use error::{Error, Result};
pub use render::{HtmlConfig, RenderedNode, render_document, render_html};
pub use slug::generate_slug;

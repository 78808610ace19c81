//! Block-structured article documents.
//!
//! Article bodies are stored in the block editor's output format: a JSON
//! object whose `blocks` array holds one `{ "type", "data" }` entry per
//! paragraph, heading, list, or code listing.
//!
//! ```json
//! {
//!   "time": 1718000000000,
//!   "blocks": [
//!     { "type": "header", "data": { "level": 2, "text": "Summary" } },
//!     { "type": "paragraph", "data": { "text": "Patch <b>now</b>." } }
//!   ],
//!   "version": "2.29.1"
//! }
//! ```
//!
//! Parsing happens in two stages. [`Document`] keeps every stored block as a
//! [`RawBlock`] without looking at its payload, so loading a document never
//! fails on content the editor may add later. Each raw block is then turned
//! into a typed [`Block`] on demand, and blocks that are missing required
//! fields surface as [`Error::MalformedBlock`](crate::Error::MalformedBlock)
//! for that block alone.

mod block;
pub mod stats;

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::util::decode_text;

pub use block::{Block, ListItem, ListStyle, RawBlock};

/// An article body: an ordered sequence of blocks.
///
/// Deserialization is total over JSON values. A non-object, or an object
/// without a `blocks` array, is an empty document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, serde::Deserialize)]
#[serde(from = "Value")]
pub struct Document {
    /// Editor save time in milliseconds, kept for round-tripping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<i64>,
    pub blocks: Vec<RawBlock>,
    /// Editor version that produced the document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl Document {
    /// Create a document from raw blocks.
    pub fn new(blocks: Vec<RawBlock>) -> Self {
        Self {
            time: None,
            blocks,
            version: None,
        }
    }

    /// Parse a document from a JSON string.
    ///
    /// Only invalid JSON is an error; any well-formed JSON value yields a
    /// document (possibly empty).
    pub fn parse(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Ok(Self::from_value(value))
    }

    /// Parse a document from raw bytes, tolerating a byte-order mark and
    /// legacy single-byte encodings.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::parse(&decode_text(bytes))
    }

    /// Build a document from an already-parsed JSON value.
    pub fn from_value(value: Value) -> Self {
        let Value::Object(mut map) = value else {
            return Self::default();
        };

        let blocks = match map.remove("blocks") {
            Some(Value::Array(entries)) => entries.into_iter().map(RawBlock::from_value).collect(),
            _ => Vec::new(),
        };

        Self {
            time: map.get("time").and_then(Value::as_i64),
            blocks,
            version: map
                .get("version")
                .and_then(Value::as_str)
                .map(str::to_owned),
        }
    }

    /// Number of stored blocks, including ones that render to nothing.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the document has no stored blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Typed view of each stored block, paired with its index.
    pub fn typed_blocks(&self) -> impl Iterator<Item = (usize, Result<Block>)> + '_ {
        self.blocks
            .iter()
            .enumerate()
            .map(|(index, raw)| (index, Block::from_raw(index, raw)))
    }
}

impl From<Value> for Document {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}

//! Stored blocks and their typed form.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// A block exactly as stored: its kind tag and an uninterpreted payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawBlock {
    /// Editor-assigned block id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Block kind (`"paragraph"`, `"header"`, ...). `None` when the stored
    /// entry had no string `type`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub data: Value,
}

impl RawBlock {
    /// Create a raw block of the given kind.
    pub fn new(kind: impl Into<String>, data: Value) -> Self {
        Self {
            id: None,
            kind: Some(kind.into()),
            data,
        }
    }

    /// Read a stored entry. Entries that are not objects keep no kind and
    /// render to nothing.
    pub(crate) fn from_value(value: Value) -> Self {
        let Value::Object(mut map) = value else {
            return Self {
                id: None,
                kind: None,
                data: Value::Null,
            };
        };

        let id = match map.remove("id") {
            Some(Value::String(id)) => Some(id),
            _ => None,
        };
        let kind = match map.remove("type") {
            Some(Value::String(kind)) => Some(kind),
            _ => None,
        };

        Self {
            id,
            kind,
            data: map.remove("data").unwrap_or(Value::Null),
        }
    }
}

/// A block with its kind-specific fields checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Inline HTML text.
    Paragraph { text: String },
    /// Heading with the stored level, unclamped.
    Header { level: i64, text: String },
    /// Ordered or unordered list.
    List { style: ListStyle, items: Vec<ListItem> },
    /// Literal code listing.
    Code { code: String },
    /// Any kind this crate does not render.
    Unsupported { kind: String },
}

/// List numbering style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListStyle {
    Ordered,
    #[default]
    Unordered,
}

impl ListStyle {
    /// Only the exact string `"ordered"` selects an ordered list.
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("ordered") => Self::Ordered,
            _ => Self::Unordered,
        }
    }

    pub fn is_ordered(self) -> bool {
        self == Self::Ordered
    }
}

/// One list entry: inline HTML plus any nested entries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListItem {
    pub html: String,
    pub children: Vec<ListItem>,
}

impl ListItem {
    pub fn new(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            children: Vec::new(),
        }
    }
}

#[derive(Deserialize)]
struct ParagraphData {
    text: String,
}

#[derive(Deserialize)]
struct HeaderData {
    level: HeadingLevel,
    text: String,
}

#[derive(Deserialize)]
struct ListData {
    /// Any non-string style falls back to unordered.
    #[serde(default)]
    style: Option<Value>,
    items: Vec<ListItemData>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListItemData {
    Text(String),
    Nested {
        content: String,
        #[serde(default)]
        items: Vec<ListItemData>,
    },
}

#[derive(Deserialize)]
struct CodeData {
    code: String,
}

/// Heading levels arrive as integers, but older documents stored them as
/// numeric strings or whole floats.
#[derive(Deserialize)]
#[serde(untagged)]
enum HeadingLevel {
    Int(i64),
    Float(f64),
    Text(String),
}

impl HeadingLevel {
    fn value(self) -> std::result::Result<i64, String> {
        match self {
            Self::Int(level) => Ok(level),
            Self::Float(level) if level.fract() == 0.0 && level.abs() < 1e15 => Ok(level as i64),
            Self::Float(level) => Err(format!("heading level {level} is not an integer")),
            Self::Text(text) => text
                .trim()
                .parse()
                .map_err(|_| format!("heading level {text:?} is not an integer")),
        }
    }
}

impl From<ListItemData> for ListItem {
    fn from(item: ListItemData) -> Self {
        match item {
            ListItemData::Text(html) => ListItem::new(html),
            ListItemData::Nested { content, items } => ListItem {
                html: content,
                children: items.into_iter().map(ListItem::from).collect(),
            },
        }
    }
}

impl Block {
    /// Check a stored block's payload against its kind.
    ///
    /// Unknown kinds (and entries with no kind) are [`Block::Unsupported`],
    /// not errors. A known kind whose payload lacks a required field is
    /// [`Error::MalformedBlock`].
    pub fn from_raw(index: usize, raw: &RawBlock) -> Result<Block> {
        let Some(kind) = raw.kind.as_deref() else {
            return Ok(Block::Unsupported {
                kind: String::new(),
            });
        };

        let malformed = |reason: String| Error::MalformedBlock {
            index,
            kind: kind.to_string(),
            reason,
        };

        let block = match kind {
            "paragraph" => {
                let data = ParagraphData::deserialize(&raw.data)
                    .map_err(|e| malformed(e.to_string()))?;
                Block::Paragraph { text: data.text }
            }
            "header" => {
                let data = HeaderData::deserialize(&raw.data)
                    .map_err(|e| malformed(e.to_string()))?;
                Block::Header {
                    level: data.level.value().map_err(malformed)?,
                    text: data.text,
                }
            }
            "list" => {
                let data = ListData::deserialize(&raw.data)
                    .map_err(|e| malformed(e.to_string()))?;
                Block::List {
                    style: ListStyle::from_tag(data.style.as_ref().and_then(Value::as_str)),
                    items: data.items.into_iter().map(ListItem::from).collect(),
                }
            }
            "code" => {
                let data = CodeData::deserialize(&raw.data)
                    .map_err(|e| malformed(e.to_string()))?;
                Block::Code { code: data.code }
            }
            other => Block::Unsupported {
                kind: other.to_string(),
            },
        };

        Ok(block)
    }

    /// Block kind as stored.
    pub fn kind(&self) -> &str {
        match self {
            Block::Paragraph { .. } => "paragraph",
            Block::Header { .. } => "header",
            Block::List { .. } => "list",
            Block::Code { .. } => "code",
            Block::Unsupported { kind } => kind,
        }
    }
}

//! Portable Text blocks (the target format).
//!
//! The flat, portable rich-text representation consumed by Sanity: an
//! ordered sequence of blocks, each holding inline spans plus the mark
//! definitions those spans reference by key. Serde renames map the Rust
//! field names onto the wire format (`_type`, `_key`, `markDefs`, ...) so
//! serialized output validates against the studio schema.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Block-level style. The target schema distinguishes exactly these five;
/// deeper source headings collapse to `h2` during conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockStyle {
    #[default]
    Normal,
    H2,
    H3,
    Blockquote,
    Indent,
}

/// List rendering kind for blocks that are list items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListItemKind {
    Bullet,
    Number,
}

/// An inline text run.
///
/// `marks` holds decorator names (`strong`, `em`, `code`) and mark
/// definition keys, first-seen order, no duplicates. `text` is never empty
/// for converter-produced spans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "_type", rename = "span")]
pub struct Span {
    #[serde(rename = "_key")]
    pub key: String,
    pub text: String,
    #[serde(default)]
    pub marks: Vec<String>,
}

/// Block-scoped metadata referenced by key from one or more spans.
///
/// Mark keys are never resolved across blocks: every key a span carries
/// must have its definition in the same block's `markDefs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "_type", rename_all = "lowercase")]
pub enum MarkDef {
    /// Hyperlink target. `blank` requests opening in a new tab.
    Link {
        #[serde(rename = "_key")]
        key: String,
        href: String,
        #[serde(default)]
        blank: bool,
    },
    /// Footnote annotation. `note` is the endnote body, itself a block
    /// sequence (the schema permits only blocks inside a note).
    Footnote {
        #[serde(rename = "_key")]
        key: String,
        #[serde(default)]
        note: Vec<Block>,
    },
}

impl MarkDef {
    /// The key spans use to reference this definition.
    pub fn key(&self) -> &str {
        match self {
            MarkDef::Link { key, .. } | MarkDef::Footnote { key, .. } => key,
        }
    }
}

/// A Portable Text block: style, optional list placement, inline spans,
/// and the mark definitions those spans reference.
///
/// `children` is never empty for converter-produced blocks; empty source
/// content becomes a single one-space span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "_type", rename = "block")]
pub struct Block {
    #[serde(rename = "_key")]
    pub key: String,
    #[serde(default)]
    pub style: BlockStyle,
    #[serde(rename = "listItem", default, skip_serializing_if = "Option::is_none")]
    pub list_item: Option<ListItemKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    #[serde(default)]
    pub children: Vec<Span>,
    #[serde(rename = "markDefs", default)]
    pub mark_defs: Vec<MarkDef>,
}

/// Flatten a block sequence to plain text.
///
/// Span texts are concatenated per block, blocks are joined, and all
/// whitespace runs collapse to single spaces. Used for excerpts and
/// summaries where formatting is irrelevant.
pub fn plain_text(blocks: &[Block]) -> String {
    let joined = blocks
        .iter()
        .map(|block| {
            block
                .children
                .iter()
                .map(|span| span.text.as_str())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n");

    joined.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncate to at most `max_chars` characters, ending with an ellipsis.
///
/// Operates on characters, not bytes, so multi-byte text never splits
/// mid-codepoint. Borrows when no truncation is needed.
pub fn truncate(value: &str, max_chars: usize) -> Cow<'_, str> {
    if value.chars().count() <= max_chars {
        return Cow::Borrowed(value);
    }

    let keep = max_chars.saturating_sub(1);
    let mut out: String = value.chars().take(keep).collect();
    out.truncate(out.trim_end().len());
    out.push('…');
    Cow::Owned(out)
}

//! Lexical tree → Portable Text conversion.
//!
//! The converter is a pure, synchronous traversal: source tree in, block
//! sequence out. It never fails — malformed input degrades to placeholder
//! content or to nothing (upstream content is untrusted and
//! heterogeneous), and a conversion that produces no blocks synthesizes a
//! single empty paragraph so callers never special-case "no content".

use std::path::Path;

use serde_json::Value;

use crate::error::Result;
use crate::keys::make_key;
use crate::lexical::{Node, parse_root_children};
use crate::portable::{Block, BlockStyle, ListItemKind, MarkDef, Span, plain_text};

mod inline;

use inline::collect_inline;

/// Convert a Lexical editor-state document to Portable Text blocks.
///
/// `key_scope` namespaces every generated block/span/mark key; callers
/// converting multiple documents in one process pass a distinct scope per
/// document (e.g. a source document id) to keep keys globally unique.
///
/// Total over arbitrary JSON: a missing or malformed `root.children`
/// converts as an empty document, which yields one `normal` block holding
/// a single one-space span.
///
/// # Examples
///
/// ```
/// use serde_json::json;
///
/// let doc = json!({"root": {"children": [
///     {"type": "paragraph", "children": [
///         {"type": "text", "text": "Hello", "format": 1}
///     ]}
/// ]}});
///
/// let blocks = blockshift::lexical_to_portable_text(&doc, "post-1");
/// assert_eq!(blocks.len(), 1);
/// assert_eq!(blocks[0].children[0].text, "Hello");
/// assert_eq!(blocks[0].children[0].marks, vec!["strong"]);
/// ```
pub fn lexical_to_portable_text(value: &Value, key_scope: &str) -> Vec<Block> {
    let nodes = parse_root_children(value);

    let mut blocks = Vec::new();
    for (index, node) in nodes.iter().enumerate() {
        node_to_blocks(node, &format!("{key_scope}-{index}"), &mut blocks);
    }

    if blocks.is_empty() {
        blocks.push(make_block(
            BlockStyle::Normal,
            " ",
            Vec::new(),
            &format!("{key_scope}-empty"),
            Vec::new(),
        ));
    }

    blocks
}

/// Convert a Lexical document and flatten the result to plain text.
///
/// Convenience for excerpts and previews; equivalent to
/// [`lexical_to_portable_text`] followed by [`plain_text`].
pub fn lexical_to_plain_text(value: &Value, key_scope: &str) -> String {
    plain_text(&lexical_to_portable_text(value, key_scope))
}

/// Convert a Lexical document from its JSON source text.
///
/// Fails only if `json` is not valid JSON at all; any valid JSON value
/// converts (possibly to the empty-document fallback block).
pub fn convert_str(json: &str, key_scope: &str) -> Result<Vec<Block>> {
    let value: Value = serde_json::from_str(json)?;
    Ok(lexical_to_portable_text(&value, key_scope))
}

/// Convert a Lexical document stored in a JSON file.
pub fn convert_file(path: impl AsRef<Path>, key_scope: &str) -> Result<Vec<Block>> {
    let json = std::fs::read_to_string(path)?;
    convert_str(&json, key_scope)
}

/// Convert one block-level node, appending the produced blocks to `out`.
fn node_to_blocks(node: &Node, key_scope: &str, out: &mut Vec<Block>) {
    match node {
        Node::Paragraph { indent, children } => {
            let style = if *indent > 0 {
                BlockStyle::Indent
            } else {
                BlockStyle::Normal
            };
            let (spans, mark_defs) = collect_inline(children, &[], &format!("{key_scope}-p"));
            out.push(make_block(style, "", spans, key_scope, mark_defs));
        }
        Node::Heading { tag, children } => {
            // Only two heading levels survive; everything that isn't h3
            // collapses to h2.
            let style = if tag == "h3" {
                BlockStyle::H3
            } else {
                BlockStyle::H2
            };
            let (spans, mark_defs) = collect_inline(children, &[], &format!("{key_scope}-h"));
            out.push(make_block(style, "", spans, key_scope, mark_defs));
        }
        Node::Quote { children } => {
            let (spans, mark_defs) = collect_inline(children, &[], &format!("{key_scope}-q"));
            out.push(make_block(BlockStyle::Blockquote, "", spans, key_scope, mark_defs));
        }
        Node::List { list_type, children } => {
            let kind = if list_type.as_deref().is_some_and(|t| t.contains("number")) {
                ListItemKind::Number
            } else {
                ListItemKind::Bullet
            };

            // Every list child becomes its own block; the flat target
            // format has no list container.
            for (index, item) in children.iter().enumerate() {
                let item_scope = format!("{key_scope}-li-{index}");
                let (spans, mark_defs) = collect_inline(item.children(), &[], &item_scope);
                let mut block = make_block(BlockStyle::Normal, "", spans, &item_scope, mark_defs);
                block.list_item = Some(kind);
                block.level = Some(list_level(item.indent()));
                out.push(block);
            }
        }
        Node::Embed { filename, .. } => {
            let fallback = match filename {
                Some(name) => format!("[Embedded media: {name}]"),
                None => "[Embedded block]".to_string(),
            };
            log::debug!("embedded block reduced to placeholder text: {fallback}");
            out.push(make_block(BlockStyle::Normal, &fallback, Vec::new(), key_scope, Vec::new()));
        }
        // Inline-only and unusable nodes contribute nothing at block level.
        Node::Text { .. } | Node::LineBreak | Node::Untyped { .. } | Node::Ignored => {}
        // Any other node carrying children gets best-effort inline
        // extraction rather than being dropped.
        Node::ListItem { children, .. }
        | Node::Link { children, .. }
        | Node::Container { children } => {
            let (spans, mark_defs) =
                collect_inline(children, &[], &format!("{key_scope}-fallback"));
            out.push(make_block(BlockStyle::Normal, "", spans, key_scope, mark_defs));
        }
    }
}

/// Map a zero-based source indent to a 1-based list level.
fn list_level(indent: i64) -> u32 {
    u32::try_from(indent.saturating_add(1).max(1)).unwrap_or(u32::MAX)
}

/// Build a block, enforcing the never-empty-children invariant: when no
/// spans were produced, a single span holds `fallback_text` (or one space
/// if that is empty too).
fn make_block(
    style: BlockStyle,
    fallback_text: &str,
    spans: Vec<Span>,
    key_scope: &str,
    mark_defs: Vec<MarkDef>,
) -> Block {
    let children = if spans.is_empty() {
        let text = if fallback_text.is_empty() {
            " "
        } else {
            fallback_text
        };
        vec![Span {
            key: make_key("span", &format!("{key_scope}-fallback")),
            text: text.to_string(),
            marks: Vec::new(),
        }]
    } else {
        spans
    };

    Block {
        key: make_key("block", key_scope),
        style,
        list_item: None,
        level: None,
        children,
        mark_defs,
    }
}

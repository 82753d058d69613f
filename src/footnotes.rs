//! Footnote collection from converted block sequences.
//!
//! Footnotes live in rich text as `footnote` mark definitions referenced
//! from spans. Rendering an endnote list needs them numbered in reading
//! order, de-duplicated, and addressable by mark key — this pass produces
//! exactly that, without mutating its input. Mark keys are block-scoped:
//! a span's footnote mark only resolves against its own block's
//! definitions.

use std::collections::HashMap;

use crate::portable::{Block, MarkDef};

const DEFAULT_PREFIX: &str = "footnote";

/// One collected footnote.
#[derive(Debug, Clone, PartialEq)]
pub struct FootnoteItem {
    /// The mark definition key this footnote was collected from.
    pub key: String,
    /// 1-based position in reading order.
    pub number: usize,
    /// Element id for the inline reference marker (`{prefix}-ref-{n}`).
    pub ref_id: String,
    /// Element id for the endnote entry (`{prefix}-note-{n}`).
    pub note_id: String,
    /// The endnote body blocks.
    pub note: Vec<Block>,
}

/// An ordered, de-duplicated footnote index.
#[derive(Debug, Clone, Default)]
pub struct Footnotes {
    /// Footnotes in first-occurrence reading order.
    pub items: Vec<FootnoteItem>,
    by_mark_key: HashMap<String, usize>,
}

impl Footnotes {
    /// Look up the footnote collected for a mark key, if any.
    ///
    /// O(1); intended for rendering inline reference markers next to
    /// spans.
    pub fn get(&self, mark_key: &str) -> Option<&FootnoteItem> {
        self.by_mark_key
            .get(mark_key)
            .and_then(|&index| self.items.get(index))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Collect footnotes from a block sequence.
///
/// Scans blocks, then spans, in order; each footnote mark definition is
/// numbered at its first referencing span and never repeated. Marks with
/// no definition in their own block (decorators, links, dangling
/// references) are skipped silently — upstream content is allowed to be
/// imperfect.
///
/// `id_prefix` namespaces the generated element ids and is sanitized to
/// `[a-z0-9-_]`; a blank prefix falls back to `"footnote"`.
pub fn collect_footnotes(blocks: &[Block], id_prefix: &str) -> Footnotes {
    let prefix = normalize_prefix(id_prefix);
    let mut footnotes = Footnotes::default();

    for block in blocks {
        // Local lookup of this block's usable footnote definitions.
        let definitions: HashMap<&str, &[Block]> = block
            .mark_defs
            .iter()
            .filter_map(|def| match def {
                MarkDef::Footnote { key, note } if !note.is_empty() => {
                    Some((key.as_str(), note.as_slice()))
                }
                _ => None,
            })
            .collect();

        if definitions.is_empty() {
            continue;
        }

        for span in &block.children {
            for mark in &span.marks {
                if footnotes.by_mark_key.contains_key(mark.as_str()) {
                    continue;
                }

                let Some(note) = definitions.get(mark.as_str()) else {
                    continue;
                };

                let number = footnotes.items.len() + 1;
                footnotes
                    .by_mark_key
                    .insert(mark.clone(), footnotes.items.len());
                footnotes.items.push(FootnoteItem {
                    key: mark.clone(),
                    number,
                    ref_id: format!("{prefix}-ref-{number}"),
                    note_id: format!("{prefix}-note-{number}"),
                    note: note.to_vec(),
                });
            }
        }
    }

    footnotes
}

/// Lowercase and strip an id prefix to `[a-z0-9-_]`, falling back to the
/// default when nothing usable remains.
fn normalize_prefix(prefix: &str) -> String {
    let safe: String = prefix
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect();

    if safe.is_empty() {
        DEFAULT_PREFIX.to_string()
    } else {
        safe
    }
}

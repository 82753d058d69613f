//! Inline-level conversion: text runs, line breaks, and links.
//!
//! Walks inline node sequences recursively, accumulating spans and mark
//! definitions in an explicit collector struct. Marks flow downward only:
//! a link's mark applies to its descendants, never to siblings or
//! ancestors.

use std::collections::{HashMap, HashSet};

use crate::keys::make_key;
use crate::lexical::Node;
use crate::portable::{MarkDef, Span};

/// Accumulator for one inline walk.
///
/// `key_scope` is the walk's root scope; link mark keys are derived from it
/// regardless of recursion depth, so identical `(href, blank)` pairs within
/// one walk share a single mark definition.
pub(crate) struct InlineCollector<'a> {
    key_scope: &'a str,
    spans: Vec<Span>,
    mark_defs: Vec<MarkDef>,
    link_marks: HashMap<String, String>,
}

/// Convert inline children to spans plus the mark definitions they use.
pub(crate) fn collect_inline(
    nodes: &[Node],
    inherited_marks: &[String],
    key_scope: &str,
) -> (Vec<Span>, Vec<MarkDef>) {
    let mut collector = InlineCollector {
        key_scope,
        spans: Vec::new(),
        mark_defs: Vec::new(),
        link_marks: HashMap::new(),
    };
    collector.walk(nodes, inherited_marks, key_scope);
    (collector.spans, collector.mark_defs)
}

impl InlineCollector<'_> {
    fn walk(&mut self, nodes: &[Node], current_marks: &[String], scope: &str) {
        for (index, node) in nodes.iter().enumerate() {
            match node {
                Node::Text { text, format } => {
                    if text.is_empty() {
                        continue;
                    }

                    let mut marks = current_marks.to_vec();
                    marks.extend(decode_format(*format).iter().map(|m| (*m).to_string()));

                    self.spans.push(Span {
                        key: make_key("span", &format!("{scope}-{index}-{}", self.spans.len())),
                        text: text.clone(),
                        marks: dedup_marks(marks),
                    });
                }
                Node::LineBreak => {
                    self.spans.push(Span {
                        key: make_key(
                            "span",
                            &format!("{scope}-{index}-break-{}", self.spans.len()),
                        ),
                        text: "\n".to_string(),
                        marks: current_marks.to_vec(),
                    });
                }
                Node::Link {
                    href,
                    new_tab,
                    children,
                } => {
                    let mut next_marks = current_marks.to_vec();
                    if let Some(href) = href.as_deref().filter(|h| !h.is_empty()) {
                        next_marks.push(self.ensure_link_mark(href, *new_tab));
                    }
                    self.walk(children, &next_marks, &format!("{scope}-{index}-link"));
                }
                other => {
                    let children = other.children();
                    if !children.is_empty() {
                        self.walk(children, current_marks, &format!("{scope}-{index}"));
                    }
                }
            }
        }
    }

    /// Get the mark key for `(href, blank)`, creating the definition on
    /// first use within this walk.
    fn ensure_link_mark(&mut self, href: &str, blank: bool) -> String {
        let signature = format!("{href}|{}", u8::from(blank));
        if let Some(existing) = self.link_marks.get(&signature) {
            return existing.clone();
        }

        let key = make_key(
            "link",
            &format!("{}-{signature}-{}", self.key_scope, self.link_marks.len()),
        );
        self.link_marks.insert(signature, key.clone());
        self.mark_defs.push(MarkDef::Link {
            key: key.clone(),
            href: href.to_string(),
            blank,
        });
        key
    }
}

/// Decode a Lexical inline format bitmask into decorator names.
///
/// Bit 0 is bold, bit 1 italic, bit 4 inline code. The remaining bits
/// (underline, strikethrough, sub/superscript) have no counterpart in the
/// target schema and are ignored.
pub(crate) fn decode_format(format: u64) -> Vec<&'static str> {
    let mut marks = Vec::new();

    if format & 1 != 0 {
        marks.push("strong");
    }
    if format & 2 != 0 {
        marks.push("em");
    }
    if format & 16 != 0 {
        marks.push("code");
    }

    marks
}

/// Normalize a mark list to first-seen order with duplicates and empty
/// entries removed. The order is stable: it determines how nested
/// formatting renders.
fn dedup_marks(marks: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    marks
        .into_iter()
        .filter(|mark| !mark.is_empty() && seen.insert(mark.clone()))
        .collect()
}

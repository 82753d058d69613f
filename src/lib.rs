//! # blockshift
//!
//! A small, dependency-light library for migrating rich text from Lexical
//! editor state (Payload CMS) to Portable Text (Sanity).
//!
//! ## Features
//!
//! - Convert Lexical JSON trees to Portable Text block sequences
//! - Preserves inline formatting, links, lists, headings, and media
//!   placeholders
//! - Collect footnote annotations into a numbered, de-duplicated endnote
//!   index
//! - Total over untrusted input: malformed trees degrade gracefully, never
//!   panic or error
//!
//! ## Quick Start
//!
//! ```
//! use serde_json::json;
//!
//! let doc = json!({"root": {"children": [
//!     {"type": "paragraph", "children": [
//!         {"type": "text", "text": "Hello, ", "format": 0},
//!         {"type": "text", "text": "world", "format": 1}
//!     ]}
//! ]}});
//!
//! let blocks = blockshift::lexical_to_portable_text(&doc, "post-1");
//! assert_eq!(blocks.len(), 1);
//! assert_eq!(blockshift::plain_text(&blocks), "Hello, world");
//! ```
//!
//! ## Footnotes
//!
//! Footnote annotations are `footnote` mark definitions referenced from
//! spans. [`collect_footnotes`] turns them into an ordered endnote list
//! plus an O(1) lookup by mark key:
//!
//! ```no_run
//! let blocks = blockshift::convert_file("post.json", "post-1").unwrap();
//! let footnotes = blockshift::collect_footnotes(&blocks, "post-1");
//!
//! for item in &footnotes.items {
//!     println!("[{}] {}", item.number, blockshift::plain_text(&item.note));
//! }
//! ```

pub mod convert;
pub mod error;
pub mod footnotes;
pub mod keys;
pub mod lexical;
pub mod portable;

pub use convert::{convert_file, convert_str, lexical_to_plain_text, lexical_to_portable_text};
pub use error::{Error, Result};
pub use footnotes::{FootnoteItem, Footnotes, collect_footnotes};
pub use lexical::Node;
pub use portable::{Block, BlockStyle, ListItemKind, MarkDef, Span, plain_text, truncate};

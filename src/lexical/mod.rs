//! Lexical editor-state trees (the source format).
//!
//! Payload CMS stores rich text as Lexical editor state: a JSON document
//! with a `root` node whose `children` nest arbitrarily. This module
//! contains the typed node representation and the total JSON parser that
//! produces it.

mod node;
mod parse;

pub use node::Node;
pub use parse::{parse_node, parse_root_children};

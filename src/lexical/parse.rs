//! JSON → [`Node`] parsing.
//!
//! Total over arbitrary [`serde_json::Value`] input: every shape parses to
//! *some* node, with unrecognized or malformed shapes degrading to the
//! fallback variants instead of erroring. Upstream content is untrusted
//! and heterogeneous, so nothing here is allowed to fail.

use serde_json::{Map, Value};

use super::Node;

/// Parse a single Lexical node from a JSON value.
pub fn parse_node(value: &Value) -> Node {
    let Some(obj) = value.as_object() else {
        return Node::Ignored;
    };

    match obj.get("type").and_then(Value::as_str) {
        Some("paragraph") => Node::Paragraph {
            indent: int_field(obj, "indent"),
            children: children_or_empty(obj),
        },
        Some("heading") => Node::Heading {
            tag: obj
                .get("tag")
                .and_then(Value::as_str)
                .map(str::to_lowercase)
                .unwrap_or_default(),
            children: children_or_empty(obj),
        },
        Some("quote") => Node::Quote {
            children: children_or_empty(obj),
        },
        Some("list") => Node::List {
            list_type: obj
                .get("listType")
                .and_then(Value::as_str)
                .map(String::from),
            children: children_or_empty(obj),
        },
        Some("listitem") => Node::ListItem {
            indent: int_field(obj, "indent"),
            children: children_or_empty(obj),
        },
        Some("text") => Node::Text {
            text: obj
                .get("text")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            format: obj.get("format").and_then(Value::as_u64).unwrap_or(0),
        },
        Some("linebreak") => Node::LineBreak,
        Some("link") => {
            let fields = obj.get("fields").and_then(Value::as_object);
            Node::Link {
                href: fields
                    .and_then(|f| f.get("url"))
                    .and_then(Value::as_str)
                    .map(String::from),
                new_tab: fields
                    .and_then(|f| f.get("newTab"))
                    .and_then(Value::as_bool)
                    .unwrap_or(false),
                children: children_or_empty(obj),
            }
        }
        Some("block") => Node::Embed {
            filename: obj
                .get("fields")
                .and_then(|f| f.get("media"))
                .and_then(|m| m.get("filename"))
                .and_then(Value::as_str)
                .map(String::from),
            children: children_or_empty(obj),
        },
        // Unrecognized type tag: the children array (even an empty one)
        // is what decides between inline fallback and nothing.
        Some(_) => match children_array(obj) {
            Some(children) => Node::Container { children },
            None => Node::Ignored,
        },
        None => match children_array(obj) {
            Some(children) => Node::Untyped { children },
            None => Node::Ignored,
        },
    }
}

/// Parse the children of the document root, if the value has the expected
/// `{ root: { children: [...] } }` envelope. Anything else yields no nodes.
pub fn parse_root_children(value: &Value) -> Vec<Node> {
    value
        .get("root")
        .and_then(|root| root.get("children"))
        .and_then(Value::as_array)
        .map(|nodes| nodes.iter().map(parse_node).collect())
        .unwrap_or_default()
}

fn children_array(obj: &Map<String, Value>) -> Option<Vec<Node>> {
    obj.get("children")
        .and_then(Value::as_array)
        .map(|nodes| nodes.iter().map(parse_node).collect())
}

fn children_or_empty(obj: &Map<String, Value>) -> Vec<Node> {
    children_array(obj).unwrap_or_default()
}

fn int_field(obj: &Map<String, Value>, key: &str) -> i64 {
    obj.get(key).and_then(Value::as_i64).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_text_node() {
        let node = parse_node(&json!({"type": "text", "text": "Hello", "format": 3}));
        assert_eq!(
            node,
            Node::Text {
                text: "Hello".to_string(),
                format: 3
            }
        );
    }

    #[test]
    fn test_parse_text_defaults() {
        // Missing text and format degrade to empty/zero, not errors.
        let node = parse_node(&json!({"type": "text"}));
        assert_eq!(
            node,
            Node::Text {
                text: String::new(),
                format: 0
            }
        );
    }

    #[test]
    fn test_parse_heading_lowercases_tag() {
        let node = parse_node(&json!({"type": "heading", "tag": "H3", "children": []}));
        match node {
            Node::Heading { tag, .. } => assert_eq!(tag, "h3"),
            other => panic!("expected heading, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_link_fields() {
        let node = parse_node(&json!({
            "type": "link",
            "fields": {"url": "https://x.com", "newTab": true},
            "children": []
        }));
        match node {
            Node::Link { href, new_tab, .. } => {
                assert_eq!(href.as_deref(), Some("https://x.com"));
                assert!(new_tab);
            }
            other => panic!("expected link, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_link_new_tab_requires_boolean_true() {
        let node = parse_node(&json!({
            "type": "link",
            "fields": {"url": "https://x.com", "newTab": "true"},
            "children": []
        }));
        match node {
            Node::Link { new_tab, .. } => assert!(!new_tab),
            other => panic!("expected link, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_embed_filename() {
        let node = parse_node(&json!({
            "type": "block",
            "fields": {"media": {"filename": "cover.jpg"}}
        }));
        match node {
            Node::Embed { filename, .. } => assert_eq!(filename.as_deref(), Some("cover.jpg")),
            other => panic!("expected embed, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_unknown_type_with_children_is_container() {
        let node = parse_node(&json!({"type": "table", "children": []}));
        assert_eq!(node, Node::Container { children: vec![] });
    }

    #[test]
    fn test_parse_unknown_type_without_children_is_ignored() {
        assert_eq!(parse_node(&json!({"type": "horizontalrule"})), Node::Ignored);
    }

    #[test]
    fn test_parse_untyped_with_children() {
        let node = parse_node(&json!({"children": [{"type": "linebreak"}]}));
        assert_eq!(
            node,
            Node::Untyped {
                children: vec![Node::LineBreak]
            }
        );
    }

    #[test]
    fn test_parse_non_objects_are_ignored() {
        assert_eq!(parse_node(&json!(null)), Node::Ignored);
        assert_eq!(parse_node(&json!("text")), Node::Ignored);
        assert_eq!(parse_node(&json!([1, 2, 3])), Node::Ignored);
        assert_eq!(parse_node(&json!({})), Node::Ignored);
    }

    #[test]
    fn test_parse_type_must_be_a_string() {
        // Numeric `type` is no type at all; children array still counts.
        let node = parse_node(&json!({"type": 7, "children": []}));
        assert_eq!(node, Node::Untyped { children: vec![] });
    }

    #[test]
    fn test_parse_root_children() {
        let doc = json!({"root": {"children": [
            {"type": "paragraph", "children": []},
            {"type": "quote", "children": []}
        ]}});
        let nodes = parse_root_children(&doc);
        assert_eq!(nodes.len(), 2);
        assert!(matches!(nodes[0], Node::Paragraph { .. }));
        assert!(matches!(nodes[1], Node::Quote { .. }));
    }

    #[test]
    fn test_parse_root_children_malformed_envelope() {
        assert!(parse_root_children(&json!(null)).is_empty());
        assert!(parse_root_children(&json!({})).is_empty());
        assert!(parse_root_children(&json!({"root": {"children": "not-array"}})).is_empty());
        assert!(parse_root_children(&json!({"root": []})).is_empty());
    }
}

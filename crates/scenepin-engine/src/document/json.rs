//! Intake of the host editor's JSON wire format.
//!
//! Wire shape: `node := { type: string, text?: string, attrs?: object,
//! content?: node[] }`. Only JSON syntax errors are surfaced; structurally
//! odd nodes (missing text, unknown types, stray fields) are folded into
//! the tree without complaint so that traversal stays total.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use crate::document::node::{Attrs, Node};

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("Failed to parse document JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serde mirror of the wire shape. Converted to [`Node`] immediately after
/// deserialization; never exposed.
#[derive(Debug, Deserialize)]
struct RawNode {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    attrs: Option<BTreeMap<String, Value>>,
    #[serde(default)]
    content: Vec<RawNode>,
}

/// Parse a JSON document tree into a [`Node`].
pub(crate) fn parse_tree(json: &str) -> Result<Node, DocumentError> {
    let raw: RawNode = serde_json::from_str(json)?;
    Ok(convert(raw))
}

/// Convert an already-deserialized JSON value into a [`Node`].
pub(crate) fn tree_from_value(value: Value) -> Result<Node, DocumentError> {
    let raw: RawNode = serde_json::from_value(value)?;
    Ok(convert(raw))
}

fn convert(raw: RawNode) -> Node {
    match raw.kind.as_str() {
        "text" => Node::Text {
            text: raw.text.unwrap_or_default(),
        },
        "mention" => {
            let mut attrs = convert_attrs(raw.attrs);
            let label = match attrs.extra.remove("label") {
                Some(Value::String(label)) => label,
                Some(other) => other.to_string(),
                None => String::new(),
            };
            Node::Mention {
                label,
                attrs,
            }
        }
        _ => {
            let attrs = convert_attrs(raw.attrs);
            // Literal text on a non-leaf kind becomes a leading text child
            // so extraction still sees it.
            let mut content = Vec::with_capacity(raw.content.len() + 1);
            if let Some(text) = raw.text {
                content.push(Node::Text {
                    text,
                });
            }
            content.extend(raw.content.into_iter().map(convert));
            Node::Element {
                kind: raw.kind,
                attrs,
                content,
            }
        }
    }
}

fn convert_attrs(attrs: Option<BTreeMap<String, Value>>) -> Attrs {
    let mut extra = attrs.unwrap_or_default();
    let block_id = match extra.remove("blockId") {
        Some(Value::String(id)) => Some(id),
        // Non-string ids are host bugs; ignore rather than reject the tree.
        Some(_) | None => None,
    };
    Attrs {
        block_id,
        extra,
    }
}

use std::collections::BTreeMap;

use serde_json::Value;

/// Attributes carried by a node.
///
/// `block_id` is the host editor's block identifier. It is neither
/// guaranteed unique nor guaranteed to survive edits — copy/paste, undo,
/// and cross-document moves can drop or duplicate it. Remaining attribute
/// keys are kept verbatim in `extra`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Attrs {
    pub block_id: Option<String>,
    pub extra: BTreeMap<String, Value>,
}

impl Attrs {
    /// Attrs carrying only a block id. Handy for building trees by hand.
    pub fn with_block_id(block_id: impl Into<String>) -> Self {
        Self {
            block_id: Some(block_id.into()),
            extra: BTreeMap::new(),
        }
    }
}

/// One node of the document tree, tagged by kind.
///
/// The host tree is heterogeneous; the anchoring core only distinguishes
/// the kinds that affect text extraction:
///
/// - [`Node::Text`] — literal text leaf
/// - [`Node::Mention`] — inline reference entity; contributes its display
///   label to extracted text
/// - [`Node::Element`] — everything else: a typed container with optional
///   attributes and ordered children
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Text {
        text: String,
    },
    Mention {
        label: String,
        attrs: Attrs,
    },
    Element {
        kind: String,
        attrs: Attrs,
        content: Vec<Node>,
    },
}

impl Node {
    /// Literal text leaf.
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text {
            text: text.into(),
        }
    }

    /// Element node without attributes.
    pub fn element(kind: impl Into<String>, content: Vec<Node>) -> Self {
        Node::Element {
            kind: kind.into(),
            attrs: Attrs::default(),
            content,
        }
    }

    /// Element node carrying a block id.
    pub fn block(kind: impl Into<String>, block_id: impl Into<String>, content: Vec<Node>) -> Self {
        Node::Element {
            kind: kind.into(),
            attrs: Attrs::with_block_id(block_id),
            content,
        }
    }

    /// The node's attributes, if its kind carries any.
    pub fn attrs(&self) -> Option<&Attrs> {
        match self {
            Node::Text { .. } => None,
            Node::Mention { attrs, .. } | Node::Element { attrs, .. } => Some(attrs),
        }
    }

    /// The block id on this node, if present.
    pub fn block_id(&self) -> Option<&str> {
        self.attrs().and_then(|attrs| attrs.block_id.as_deref())
    }
}

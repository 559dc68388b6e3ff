/*!
 * # Document Module
 *
 * Read-only model of the host editor's document tree.
 *
 * The host editing subsystem owns the document and persists it as JSON
 * (`node := { type, text?, attrs?, content? }`). This module takes that
 * tree in ([`json`]), represents it as a tagged variant per node kind
 * ([`node`]), and provides the traversal primitives the anchoring code
 * needs ([`locate`]): full-text extraction, before/after context, and
 * block lookup by id.
 *
 * Traversal is total over well-formed trees: a missing block yields
 * `None`/empty results, never an error. Block ids are neither unique nor
 * stable; where an id is duplicated, the first occurrence in document
 * order wins.
 */

pub mod json;
pub mod locate;
pub mod node;

pub use json::DocumentError;
pub use locate::BlockText;
pub use node::{Attrs, Node};

use crate::models::DocumentId;

/// A loaded document: the host's id for it plus the root of its node tree.
///
/// Treated as an immutable snapshot; all anchoring functions take it by
/// reference and never mutate it.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    id: DocumentId,
    root: Node,
}

impl Document {
    /// Wrap an already-built node tree.
    pub fn new(id: impl Into<DocumentId>, root: Node) -> Self {
        Self {
            id: id.into(),
            root,
        }
    }

    /// Parse a document from the host's JSON wire format.
    pub fn from_json(id: impl Into<DocumentId>, json: &str) -> Result<Self, DocumentError> {
        let root = json::parse_tree(json)?;
        Ok(Self::new(id, root))
    }

    /// Build a document from an already-deserialized JSON value.
    pub fn from_value(
        id: impl Into<DocumentId>,
        value: serde_json::Value,
    ) -> Result<Self, DocumentError> {
        let root = json::tree_from_value(value)?;
        Ok(Self::new(id, root))
    }

    /// The host's identifier for this document.
    pub fn id(&self) -> &DocumentId {
        &self.id
    }

    /// Root node of the tree.
    pub fn root(&self) -> &Node {
        &self.root
    }
}

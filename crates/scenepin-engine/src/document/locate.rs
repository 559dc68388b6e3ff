//! Traversal over the document tree: full-text extraction, before/after
//! context, and block lookup by id.
//!
//! Everything here is powered by one pure pre-order fold ([`flatten`])
//! that concatenates every literal text leaf (mentions contribute their
//! display label) and records the byte span of each node carrying a block
//! id. Before/after context and block text then fall out as slices of the
//! flattened text.

use crate::document::{Document, Node};

/// A block's id and extracted text, in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockText {
    pub block_id: String,
    pub text: String,
}

/// Byte span of one block inside the flattened document text.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct FlatBlock {
    pub block_id: String,
    pub start: usize,
    pub end: usize,
}

/// Flattened view of a document: the concatenated text of every leaf plus
/// the span of every block, in document (pre)order.
#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) struct FlatDocument {
    pub text: String,
    pub blocks: Vec<FlatBlock>,
}

impl FlatDocument {
    /// Text of the block at `index` in document order.
    pub fn block_text(&self, index: usize) -> &str {
        let block = &self.blocks[index];
        &self.text[block.start..block.end]
    }

    /// Index of the first block carrying `block_id`, if any.
    ///
    /// First occurrence wins when an id is duplicated across nodes.
    pub fn find(&self, block_id: &str) -> Option<usize> {
        self.blocks.iter().position(|b| b.block_id == block_id)
    }
}

/// Flatten a document into its full text and ordered block spans.
pub(crate) fn flatten(doc: &Document) -> FlatDocument {
    fold_node(doc.root(), FlatDocument::default())
}

fn fold_node(node: &Node, flat: FlatDocument) -> FlatDocument {
    match node {
        Node::Text { text } => append_text(flat, text, None),
        Node::Mention { label, attrs } => append_text(flat, label, attrs.block_id.as_deref()),
        Node::Element { attrs, content, .. } => {
            let opened = attrs.block_id.as_ref().map(|id| {
                (id.clone(), flat.text.len())
            });
            // Reserve this block's slot before descending so parents sort
            // before their children in document order.
            let slot = flat.blocks.len();
            let mut flat = match opened {
                Some((block_id, start)) => {
                    let mut flat = flat;
                    flat.blocks.push(FlatBlock {
                        block_id,
                        start,
                        end: start,
                    });
                    flat
                }
                None => flat,
            };
            let had_slot = flat.blocks.len() > slot;
            flat = content.iter().fold(flat, |acc, child| fold_node(child, acc));
            if had_slot {
                flat.blocks[slot].end = flat.text.len();
            }
            flat
        }
    }
}

fn append_text(mut flat: FlatDocument, text: &str, block_id: Option<&str>) -> FlatDocument {
    let start = flat.text.len();
    flat.text.push_str(text);
    if let Some(block_id) = block_id {
        flat.blocks.push(FlatBlock {
            block_id: block_id.to_string(),
            start,
            end: flat.text.len(),
        });
    }
    flat
}

/// Every block's id and text, in document order. Duplicated ids each
/// appear once per carrying node.
pub fn blocks_in_order(doc: &Document) -> Vec<BlockText> {
    let flat = flatten(doc);
    flat.blocks
        .iter()
        .enumerate()
        .map(|(i, block)| BlockText {
            block_id: block.block_id.clone(),
            text: flat.block_text(i).to_string(),
        })
        .collect()
}

/// Extracted text of the block carrying `block_id`, or `None` if absent.
pub fn text_of(doc: &Document, block_id: &str) -> Option<String> {
    let flat = flatten(doc);
    let index = flat.find(block_id)?;
    Some(flat.block_text(index).to_string())
}

/// All text preceding the block in document order, excluding the block
/// itself. Empty when the block is absent.
pub fn text_before(doc: &Document, block_id: &str) -> String {
    let flat = flatten(doc);
    match flat.find(block_id) {
        Some(index) => flat.text[..flat.blocks[index].start].to_string(),
        None => String::new(),
    }
}

/// All text following the block in document order, excluding the block
/// itself. Empty when the block is absent.
pub fn text_after(doc: &Document, block_id: &str) -> String {
    let flat = flatten(doc);
    match flat.find(block_id) {
        Some(index) => flat.text[flat.blocks[index].end..].to_string(),
        None => String::new(),
    }
}

/// Concatenated text of the whole document.
pub fn full_text(doc: &Document) -> String {
    flatten(doc).text
}

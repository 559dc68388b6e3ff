//! Minting anchors from a live document.

use crate::anchoring::{MatchConfig, hash};
use crate::document::{Document, locate};
use crate::models::BlockAnchor;

/// Build an immutable [`BlockAnchor`] for the block carrying `block_id`.
///
/// Returns `None` when no node in the document carries that id. Capture is
/// idempotent: capturing the same unedited block twice yields bit-identical
/// anchors.
pub fn capture_anchor(doc: &Document, block_id: &str, cfg: &MatchConfig) -> Option<BlockAnchor> {
    let text_snapshot = locate::text_of(doc, block_id)?;
    let preceding = locate::text_before(doc, block_id);
    let following = locate::text_after(doc, block_id);

    Some(BlockAnchor {
        block_id: block_id.to_string(),
        document_id: doc.id().clone(),
        prefix_hash: hash::prefix_hash(&preceding, cfg.context_window),
        suffix_hash: hash::suffix_hash(&following, cfg.context_window),
        text_snapshot,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Node;
    use pretty_assertions::assert_eq;

    fn script() -> Document {
        Document::new(
            "doc-1",
            Node::element(
                "doc",
                vec![
                    Node::block("scene", "b1", vec![Node::text("INT. KITCHEN - DAY")]),
                    Node::block("action", "b2", vec![Node::text("Sam opens the fridge.")]),
                    Node::block("action", "b3", vec![Node::text("The light flickers.")]),
                ],
            ),
        )
    }

    #[test]
    fn test_capture_records_snapshot_and_document() {
        let doc = script();
        let anchor = capture_anchor(&doc, "b2", &MatchConfig::default()).unwrap();

        assert_eq!(anchor.block_id, "b2");
        assert_eq!(anchor.document_id, doc.id().clone());
        assert_eq!(anchor.text_snapshot, "Sam opens the fridge.");
    }

    #[test]
    fn test_capture_is_idempotent() {
        let doc = script();
        let cfg = MatchConfig::default();
        let first = capture_anchor(&doc, "b2", &cfg).unwrap();
        let second = capture_anchor(&doc, "b2", &cfg).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_capture_of_absent_block_is_none() {
        assert_eq!(capture_anchor(&script(), "nope", &MatchConfig::default()), None);
    }

    #[test]
    fn test_context_hashes_depend_on_neighbours() {
        let cfg = MatchConfig::default();
        let doc = script();
        let moved = Document::new(
            "doc-1",
            Node::element(
                "doc",
                vec![
                    Node::block("action", "b2", vec![Node::text("Sam opens the fridge.")]),
                    Node::block("scene", "b1", vec![Node::text("INT. KITCHEN - DAY")]),
                    Node::block("action", "b3", vec![Node::text("The light flickers.")]),
                ],
            ),
        );

        let original = capture_anchor(&doc, "b2", &cfg).unwrap();
        let reordered = capture_anchor(&moved, "b2", &cfg).unwrap();
        assert_eq!(original.text_snapshot, reordered.text_snapshot);
        assert_ne!(original.prefix_hash, reordered.prefix_hash);
    }

    #[test]
    fn test_window_size_changes_the_hashes() {
        let doc = script();
        let wide = capture_anchor(&doc, "b2", &MatchConfig::default()).unwrap();
        let narrow = capture_anchor(
            &doc,
            "b2",
            &MatchConfig {
                context_window: 4,
                ..MatchConfig::default()
            },
        )
        .unwrap();
        assert_ne!(wide.prefix_hash, narrow.prefix_hash);
    }
}

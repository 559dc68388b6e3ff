/*!
 * # scenepin engine
 *
 * Links a storyboard shot to a specific block inside a mutable rich-text
 * document, and recovers that link after the document has been edited —
 * blocks deleted, split, reordered, retyped, or stripped of their ids.
 *
 * ## Architecture Overview
 *
 * ### 1. Opaque Document Tree
 * - The host editor owns the document as an ordered tree of typed nodes
 * - This crate receives it read-only ([`document::Document`]) and never
 *   parses, validates, or mutates it
 *
 * ### 2. Immutable Anchors
 * - A [`models::BlockAnchor`] pins a shot to a block: the block id plus
 *   hashed surrounding context and a verbatim text snapshot
 * - Anchors are captured whole and replaced whole; a repair never
 *   partially mutates one
 *
 * ### 3. Tiered Relocation
 * - [`anchoring::relocate`] resolves a stale anchor in strict tier order:
 *   exact block id, exact text, then fuzzy similarity scoring
 * - Fuzzy scoring combines context-hash agreement with token-set
 *   (Jaccard) similarity; ties resolve to the earliest block in
 *   document order
 *
 * ### 4. Batch Validation
 * - [`anchoring::find_unlinked`] and [`anchoring::repair`] apply the
 *   relocator across a whole shot list against loaded documents
 * - An unresolved anchor is a steady state expressed in data
 *   (`Shot::is_unlinked`), never an error
 *
 * ## Usage Pattern
 *
 * ```rust
 * use scenepin_engine::anchoring::{self, MatchConfig};
 * use scenepin_engine::document::Document;
 *
 * let json = r#"{
 *     "type": "doc",
 *     "content": [
 *         { "type": "action", "attrs": { "blockId": "b1" },
 *           "content": [{ "type": "text", "text": "Sam opens the fridge." }] }
 *     ]
 * }"#;
 * let doc = Document::from_json("script-1", json).unwrap();
 * let cfg = MatchConfig::default();
 *
 * // 1. Capture an anchor when the user links a shot to a block
 * let anchor = anchoring::capture_anchor(&doc, "b1", &cfg).unwrap();
 *
 * // 2. After the document is edited and reloaded, resolve it again
 * let resolved = anchoring::relocate(&doc, &anchor, &cfg).unwrap();
 * assert_eq!(resolved.block_id, "b1");
 * ```
 */

pub mod anchoring;
pub mod document;
pub mod models;

// Re-export key types for easier usage
pub use anchoring::{MatchConfig, MatchStrategy, Relocation};
pub use document::{Document, DocumentError, Node};
pub use models::{BlockAnchor, DocumentId, Shot, ShotId};

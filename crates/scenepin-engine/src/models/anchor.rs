use serde::{Deserialize, Serialize};

/// Identifier the host project store assigns to a document.
///
/// Newtype prevents mixing document ids with block ids or arbitrary
/// strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(pub String);

impl From<&str> for DocumentId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for DocumentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A persisted reference pinning a shot to one block of one document.
///
/// Captured once and then treated as immutable: a successful repair mints
/// a brand-new anchor that wholesale-replaces the old one, never a partial
/// update. The context hashes are a cheap pre-filter for relocation; the
/// verbatim `text_snapshot` backs the exact-text and fuzzy tiers.
///
/// Serialized with the host's camelCase field names so the project store
/// can persist it as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockAnchor {
    /// Block id at capture time. May be stale by the next validation pass.
    pub block_id: String,
    /// Document the block lived in at capture time.
    pub document_id: DocumentId,
    /// Hash of the trailing window of text preceding the block.
    pub prefix_hash: u64,
    /// Hash of the leading window of text following the block.
    pub suffix_hash: u64,
    /// Full, untruncated text of the block at capture time.
    pub text_snapshot: String,
}

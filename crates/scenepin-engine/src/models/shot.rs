use relative_path::RelativePathBuf;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::BlockAnchor;

/// Unique identifier for a shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShotId(pub Uuid);

impl ShotId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ShotId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ShotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A storyboard shot: an image managed by the host asset store, optionally
/// pinned to a document block through a [`BlockAnchor`].
///
/// Invariant: `is_unlinked == false` means the link was confirmed
/// resolvable as of the last validation pass. `is_unlinked == true` does
/// NOT mean the anchor was discarded — the stale anchor is retained so a
/// later edit (e.g. undo) can still resolve it, and so the user can
/// inspect or manually relink. The anchor is dropped only when the user
/// explicitly unlinks or deletes the shot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shot {
    pub id: ShotId,
    /// Storyboard image path, relative to the configured assets root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<RelativePathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<BlockAnchor>,
    #[serde(default)]
    pub is_unlinked: bool,
}

impl Shot {
    /// A fresh shot with no anchor.
    pub fn new() -> Self {
        Self {
            id: ShotId::new(),
            image: None,
            anchor: None,
            is_unlinked: false,
        }
    }

    /// A fresh shot pinned to `anchor`.
    pub fn with_anchor(anchor: BlockAnchor) -> Self {
        Self {
            anchor: Some(anchor),
            ..Self::new()
        }
    }

    /// Set the storyboard image path.
    pub fn with_image(mut self, image: RelativePathBuf) -> Self {
        self.image = Some(image);
        self
    }
}

impl Default for Shot {
    fn default() -> Self {
        Self::new()
    }
}

//! Batch validation and repair of shot links.
//!
//! Both passes are pure over their inputs and return new records; the
//! caller persists them. A failed relocation is an expected steady state
//! expressed through `Shot::is_unlinked`, never an error. Each shot's
//! outcome depends only on the shared document snapshots, not on other
//! shots, so results are order-independent.

use std::collections::{HashMap, HashSet};

use log::debug;

use crate::anchoring::{MatchConfig, MatchStrategy, capture_anchor, relocate};
use crate::document::{Document, locate};
use crate::models::{DocumentId, Shot, ShotId};

/// Read-only check: ids of shots whose link cannot currently be resolved.
///
/// A shot lands in the set when it has an anchor but its document is not
/// in `documents`, or relocation against that document fails. Shots
/// without an anchor have nothing to validate and are skipped.
pub fn find_unlinked(
    shots: &[Shot],
    documents: &HashMap<DocumentId, Document>,
    cfg: &MatchConfig,
) -> HashSet<ShotId> {
    shots
        .iter()
        .filter_map(|shot| {
            let anchor = shot.anchor.as_ref()?;
            match documents.get(&anchor.document_id) {
                Some(doc) if relocate(doc, anchor, cfg).is_some() => None,
                _ => Some(shot.id),
            }
        })
        .collect()
}

/// Relocate every anchored shot and return the repaired list.
///
/// On success the shot gets a fresh anchor rooted at the resolved block
/// and `is_unlinked = false`; the one exception is an exact-id match with
/// unchanged text, which keeps the existing anchor value untouched. On
/// failure `is_unlinked` is set while the stale anchor is preserved so a
/// later edit (e.g. undo) can still resolve it.
pub fn repair(
    shots: &[Shot],
    documents: &HashMap<DocumentId, Document>,
    cfg: &MatchConfig,
) -> Vec<Shot> {
    shots.iter().map(|shot| repair_shot(shot, documents, cfg)).collect()
}

fn repair_shot(shot: &Shot, documents: &HashMap<DocumentId, Document>, cfg: &MatchConfig) -> Shot {
    let Some(anchor) = shot.anchor.as_ref() else {
        return shot.clone();
    };
    let Some(doc) = documents.get(&anchor.document_id) else {
        debug!("shot {}: document {} not loaded", shot.id, anchor.document_id);
        return unlinked(shot);
    };
    let Some(relocation) = relocate(doc, anchor, cfg) else {
        return unlinked(shot);
    };

    if relocation.strategy == MatchStrategy::ExactId
        && locate::text_of(doc, &anchor.block_id).as_deref() == Some(anchor.text_snapshot.as_str())
    {
        // Block untouched: the existing anchor is still exact.
        return Shot {
            is_unlinked: false,
            ..shot.clone()
        };
    }

    match capture_anchor(doc, &relocation.block_id, cfg) {
        Some(fresh) => Shot {
            anchor: Some(fresh),
            is_unlinked: false,
            ..shot.clone()
        },
        // Unreachable for a just-resolved id, but stay total.
        None => unlinked(shot),
    }
}

fn unlinked(shot: &Shot) -> Shot {
    Shot {
        is_unlinked: true,
        ..shot.clone()
    }
}

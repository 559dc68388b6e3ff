//! Tiered relocation of a stale anchor to a current block id.
//!
//! Tiers are attempted strictly in order; the first success
//! short-circuits:
//!
//! 1. **Exact id** — some node still carries the anchor's block id.
//!    Accepted even if its text has drifted: drift is assumed to be the
//!    user's own edit of "this block".
//! 2. **Exact text** — exactly one block's full text equals the snapshot
//!    verbatim. Zero or several verbatim matches fall through to fuzzy,
//!    where duplicates resolve by document order.
//! 3. **Fuzzy** — every block is scored; the winner must be the maximum
//!    and clear the acceptance threshold. Ties break to the earliest
//!    block in document order.
//! 4. **Failed** — `None`. An expected steady state, not an error.

use log::debug;

use crate::anchoring::score::score;
use crate::anchoring::{CandidateBlock, MatchConfig};
use crate::document::Document;
use crate::document::locate::{self, FlatDocument};
use crate::models::BlockAnchor;

/// Which tier produced a relocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    ExactId,
    ExactText,
    Fuzzy,
}

/// A successful relocation: the block's current id and how it was found.
#[derive(Debug, Clone, PartialEq)]
pub struct Relocation {
    pub block_id: String,
    pub strategy: MatchStrategy,
}

/// Resolve `anchor` against the current state of `doc`.
pub fn relocate(doc: &Document, anchor: &BlockAnchor, cfg: &MatchConfig) -> Option<Relocation> {
    let flat = locate::flatten(doc);

    // Tier 1: the original id is still present.
    if flat.find(&anchor.block_id).is_some() {
        debug!("anchor {} resolved by exact id", anchor.block_id);
        return Some(Relocation {
            block_id: anchor.block_id.clone(),
            strategy: MatchStrategy::ExactId,
        });
    }

    // Tier 2: exactly one block still carries the snapshot text verbatim.
    let mut verbatim = (0..flat.blocks.len()).filter(|&i| flat.block_text(i) == anchor.text_snapshot);
    if let (Some(index), None) = (verbatim.next(), verbatim.next()) {
        let block_id = flat.blocks[index].block_id.clone();
        debug!("anchor {} resolved by exact text to {block_id}", anchor.block_id);
        return Some(Relocation {
            block_id,
            strategy: MatchStrategy::ExactText,
        });
    }

    // Tier 3: score every block; earliest strict maximum wins.
    let mut best: Option<(usize, f64)> = None;
    for (index, candidate) in candidates(&flat).into_iter().enumerate() {
        let value = score(anchor, &candidate, cfg);
        if best.is_none_or(|(_, best_value)| value > best_value) {
            best = Some((index, value));
        }
    }

    match best {
        Some((index, value)) if value >= cfg.acceptance_threshold => {
            let block_id = flat.blocks[index].block_id.clone();
            debug!(
                "anchor {} resolved by fuzzy match to {block_id} (score {value:.2})",
                anchor.block_id
            );
            Some(Relocation {
                block_id,
                strategy: MatchStrategy::Fuzzy,
            })
        }
        _ => {
            debug!("anchor {} failed to relocate", anchor.block_id);
            None
        }
    }
}

/// Build the ephemeral candidate list for one relocation run.
fn candidates(flat: &FlatDocument) -> Vec<CandidateBlock> {
    flat.blocks
        .iter()
        .enumerate()
        .map(|(index, block)| CandidateBlock {
            block_id: block.block_id.clone(),
            text: flat.block_text(index).to_string(),
            preceding_text: flat.text[..block.start].to_string(),
            following_text: flat.text[block.end..].to_string(),
        })
        .collect()
}

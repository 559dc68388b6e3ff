//! Scoring a candidate block against a stale anchor.
//!
//! Score = +2 per agreeing context hash, +3 × Jaccard similarity between
//! the candidate's text and the anchor's snapshot. Maximum 7.0; the
//! default acceptance threshold is 2.0, so either one matching context
//! hash or two-thirds token overlap is enough on its own.

use std::collections::HashSet;

use crate::anchoring::{MatchConfig, hash};
use crate::models::BlockAnchor;

/// Ephemeral view of one block considered during a relocation run.
/// Computed fresh per attempt, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateBlock {
    pub block_id: String,
    pub text: String,
    pub preceding_text: String,
    pub following_text: String,
}

/// Score `candidate` against `anchor`. Higher is better.
pub fn score(anchor: &BlockAnchor, candidate: &CandidateBlock, cfg: &MatchConfig) -> f64 {
    let mut total = 0.0;
    if hash::prefix_hash(&candidate.preceding_text, cfg.context_window) == anchor.prefix_hash {
        total += 2.0;
    }
    if hash::suffix_hash(&candidate.following_text, cfg.context_window) == anchor.suffix_hash {
        total += 2.0;
    }
    total + 3.0 * jaccard(&candidate.text, &anchor.text_snapshot)
}

/// Jaccard similarity over lowercased whitespace tokens.
///
/// Both token sets empty → 1.0; exactly one empty → 0.0.
pub fn jaccard(a: &str, b: &str) -> f64 {
    let tokens_a = tokens(a);
    let tokens_b = tokens(b);

    match (tokens_a.is_empty(), tokens_b.is_empty()) {
        (true, true) => 1.0,
        (true, false) | (false, true) => 0.0,
        (false, false) => {
            let intersection = tokens_a.intersection(&tokens_b).count();
            let union = tokens_a.union(&tokens_b).count();
            intersection as f64 / union as f64
        }
    }
}

fn tokens(text: &str) -> HashSet<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

/*!
 * # Anchoring Module
 *
 * The algorithmic core: capturing anchors, scoring candidates, tiered
 * relocation, and batch validation/repair.
 *
 * - **`hash`** — deterministic fixed-width context hash (cheap pre-filter)
 * - **`capture`** — mint an immutable [`crate::models::BlockAnchor`] from
 *   a document and block id
 * - **`score`** — hash agreement plus token-set (Jaccard) similarity
 * - **`relocate`** — tier order: exact id, exact text, fuzzy, failed
 * - **`validate`** — apply relocation across a shot list: read-only
 *   unlinked-set or a fully repaired list
 *
 * Everything is pure with respect to its `(document, anchor)` inputs: no
 * hidden state, no I/O, safe to re-run against a stable document snapshot.
 */

pub mod capture;
pub mod hash;
pub mod relocate;
pub mod score;
pub mod validate;

pub use capture::capture_anchor;
pub use hash::context_hash;
pub use relocate::{MatchStrategy, Relocation, relocate};
pub use score::{CandidateBlock, jaccard, score};
pub use validate::{find_unlinked, repair};

/// Tunable matching heuristics, named so behavior can be retuned without
/// touching algorithm code.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchConfig {
    /// How many characters of surrounding text feed each context hash.
    pub context_window: usize,
    /// Minimum fuzzy score a candidate must reach to be accepted.
    pub acceptance_threshold: f64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            context_window: 50,
            acceptance_threshold: 2.0,
        }
    }
}

//! Deterministic fixed-width hashing of context windows.
//!
//! The hash is persisted inside anchors, so it must be stable across
//! platforms and releases — std's `DefaultHasher` makes no such promise.
//! blake3 truncated to 64 bits is deterministic, order-sensitive, and
//! cheap enough for a pre-filter. Collisions are tolerated: the scorer
//! performs a secondary check before any match is accepted.

/// Hash a text window to a fixed-width value.
pub fn context_hash(text: &str) -> u64 {
    let digest = blake3::hash(text.as_bytes());
    let mut word = [0u8; 8];
    word.copy_from_slice(&digest.as_bytes()[..8]);
    u64::from_le_bytes(word)
}

/// Hash the trailing `window` characters of the text preceding a block.
pub(crate) fn prefix_hash(preceding_text: &str, window: usize) -> u64 {
    context_hash(tail_chars(preceding_text, window))
}

/// Hash the leading `window` characters of the text following a block.
pub(crate) fn suffix_hash(following_text: &str, window: usize) -> u64 {
    context_hash(head_chars(following_text, window))
}

/// Last `n` characters of `s`, char-boundary safe.
fn tail_chars(s: &str, n: usize) -> &str {
    if n == 0 {
        return "";
    }
    match s.char_indices().rev().nth(n - 1) {
        Some((start, _)) => &s[start..],
        None => s,
    }
}

/// First `n` characters of `s`, char-boundary safe.
fn head_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

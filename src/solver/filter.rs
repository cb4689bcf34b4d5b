//! Guess-pool pruning heuristic
//!
//! A weak dominance filter that shrinks the guess pool before an expensive
//! search. Early in the game (large depth budget) repeated-letter guesses
//! rarely pay off, and a guess that leaves a large "four greens, one
//! black" bucket has effectively wasted its information. Falls back to the
//! unfiltered pool rather than ever returning nothing.

use crate::core::{Corpus, Pattern, Word};
use rustc_hash::FxHashMap;

/// Apply the filter only while at least this much budget remains
pub const DISTINCT_LETTERS_MIN_DEPTH: u32 = 5;

/// Drop a guess once a zero-yellow, single-black bucket grows past this
pub const NEAR_MISS_BUCKET_CAP: usize = 10;

/// Restrict candidate guesses in early-depth regimes
///
/// For `depth_left >= DISTINCT_LETTERS_MIN_DEPTH`: keep only words with
/// five distinct letters, then drop any whose partition of `set` contains
/// a bucket with no yellows, exactly one black, and more than
/// [`NEAR_MISS_BUCKET_CAP`] members. Later in the game the pool is
/// returned untouched, and so is it whenever filtering would empty it.
#[must_use]
pub fn prune_guess_pool(corpus: &Corpus, set: &[u32], depth_left: u32) -> Vec<u32> {
    if depth_left < DISTINCT_LETTERS_MIN_DEPTH {
        return set.to_vec();
    }

    let selected: Vec<u32> = set
        .iter()
        .copied()
        .filter(|&id| corpus.word(id).has_distinct_letters())
        .filter(|&id| !has_oversized_near_miss(corpus, set, corpus.word(id)))
        .collect();

    if selected.is_empty() && !set.is_empty() {
        return set.to_vec();
    }
    selected
}

/// Whether any bucket of the guess's partition is a too-large near miss
fn has_oversized_near_miss(corpus: &Corpus, set: &[u32], guess: &Word) -> bool {
    let mut counts: FxHashMap<Pattern, usize> = FxHashMap::default();
    for &id in set {
        *counts.entry(Pattern::of(guess, corpus.word(id))).or_insert(0) += 1;
    }

    counts.iter().any(|(pattern, &count)| {
        pattern.yellows() == 0 && pattern.blacks() == 1 && count > NEAR_MISS_BUCKET_CAP
    })
}

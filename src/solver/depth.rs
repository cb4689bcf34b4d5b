//! Memoized worst-case depth search
//!
//! `min_depth` answers: how many guesses (counting the one about to be
//! made) guarantee isolating the target, no matter which candidate it is?
//! The adversary picks the surviving partition bucket, so the cost of a
//! guess is the worst bucket; the solver picks the guess, so the answer is
//! the best such cost over all candidate guesses.

use super::partition::partition;
use crate::core::Corpus;
use rustc_hash::FxHashMap;
use std::fmt;

/// Guaranteed guess count for a candidate set, or proof there is none
///
/// `Infeasible` orders above every finite depth, so taking `max` over
/// partition buckets and `min` over guesses propagates infeasibility
/// without special cases: one unresolvable bucket poisons its guess, and a
/// guess only redeems the set if its score is finite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Depth {
    Finite(u32),
    Infeasible,
}

impl Depth {
    /// One more guess on top of this depth; `Infeasible` stays infeasible
    #[must_use]
    pub const fn succ(self) -> Self {
        match self {
            Self::Finite(n) => Self::Finite(n + 1),
            Self::Infeasible => Self::Infeasible,
        }
    }

    /// Whether no guess count can resolve the set
    #[must_use]
    pub const fn is_infeasible(self) -> bool {
        matches!(self, Self::Infeasible)
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(n) => write!(f, "{n}"),
            Self::Infeasible => write!(f, "infeasible"),
        }
    }
}

/// Minimax depth search with an explicit memo cache
///
/// The cache is owned by the instance — never global — so independent
/// solves isolate from each other by constructing separate instances.
/// Keys are `(candidate ids, depth budget)`; candidate sets are sorted by
/// construction throughout the solver, which makes the key canonical: two
/// orderings of the same set always hit the same entry.
#[derive(Debug, Default)]
pub struct DepthSearch {
    cache: FxHashMap<(Box<[u32]>, u32), Depth>,
}

impl DepthSearch {
    /// Create a search with an empty cache
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every memoized result
    ///
    /// Required between solves against different corpora when an instance
    /// is reused; ids are only meaningful relative to one corpus.
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    /// Number of memoized entries
    #[must_use]
    pub fn cached_entries(&self) -> usize {
        self.cache.len()
    }

    /// Minimum guesses that guarantee isolating the target within `set`
    ///
    /// Counts the guess about to be made. Base cases: a set of zero or one
    /// candidates needs at most one confirming guess; a larger set with no
    /// budget left is [`Depth::Infeasible`]. Otherwise every member is
    /// tried as a guess, scored by its worst partition bucket, and the
    /// bucket scan aborts early once a guess can no longer beat the best
    /// score found so far.
    pub fn min_depth(&mut self, corpus: &Corpus, set: &[u32], depth_left: u32) -> Depth {
        if set.len() <= 1 {
            return Depth::Finite(1);
        }
        if depth_left == 0 {
            return Depth::Infeasible;
        }

        debug_assert!(
            set.windows(2).all(|pair| pair[0] < pair[1]),
            "candidate sets must stay sorted for canonical cache keys"
        );

        let key = (Box::from(set), depth_left);
        if let Some(&cached) = self.cache.get(&key) {
            return cached;
        }

        let mut best = Depth::Infeasible;

        'guesses: for &guess_id in set {
            let mut worst = Depth::Finite(0);

            for (_, bucket) in partition(corpus, set, corpus.word(guess_id)) {
                worst = worst.max(self.min_depth(corpus, &bucket, depth_left - 1));
                if worst >= best {
                    continue 'guesses;
                }
            }

            let score = worst.succ();
            if score < best {
                best = score;
                if best == Depth::Finite(1) {
                    break;
                }
            }
        }

        self.cache.insert(key, best);
        best
    }
}

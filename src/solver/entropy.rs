//! Entropy ranking heuristic
//!
//! Ranks words by the Shannon entropy of the partition they induce over a
//! candidate set — expected information gain rather than worst-case
//! guarantee. A faster stand-in for the exhaustive minimax scan when the
//! candidate set is too large; callers opt into it, the minimax path never
//! does on its own.

use crate::core::{Corpus, Pattern, Word};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Shannon entropy (bits) of a partition-size distribution
///
/// H = -Σ p · log₂(p) over bucket probabilities.
///
/// # Examples
/// ```
/// use wordle_minimax::solver::shannon_entropy;
///
/// // Four equal buckets carry log2(4) = 2 bits
/// assert!((shannon_entropy(&[25, 25, 25, 25]) - 2.0).abs() < 0.001);
/// // One bucket carries nothing
/// assert!(shannon_entropy(&[10]).abs() < 0.001);
/// ```
#[must_use]
pub fn shannon_entropy(bucket_sizes: &[usize]) -> f64 {
    let total: usize = bucket_sizes.iter().sum();
    if total == 0 {
        return 0.0;
    }

    let total = total as f64;
    bucket_sizes
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Entropy of the partition `guess` induces over `set`
#[must_use]
pub fn partition_entropy(corpus: &Corpus, set: &[u32], guess: &Word) -> f64 {
    let mut counts: FxHashMap<Pattern, usize> = FxHashMap::default();
    for &id in set {
        *counts.entry(Pattern::of(guess, corpus.word(id))).or_insert(0) += 1;
    }

    let sizes: Vec<usize> = counts.into_values().collect();
    shannon_entropy(&sizes)
}

/// The set reordered by descending entropy against itself
///
/// Stable: words with equal entropy keep their input order. Scoring is
/// quadratic in the set size, so the per-word work runs on the rayon pool.
#[must_use]
pub fn rank_by_entropy(corpus: &Corpus, set: &[u32]) -> Vec<u32> {
    let mut scored: Vec<(u32, f64)> = set
        .par_iter()
        .map(|&id| (id, partition_entropy(corpus, set, corpus.word(id))))
        .collect();

    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored.into_iter().map(|(id, _)| id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entropy_uniform_distribution() {
        assert!((shannon_entropy(&[1, 1, 1, 1]) - 2.0).abs() < 0.001);
        assert!((shannon_entropy(&[5, 5]) - 1.0).abs() < 0.001);
    }

    #[test]
    fn entropy_certain_outcome_is_zero() {
        assert!(shannon_entropy(&[42]).abs() < 0.001);
    }

    #[test]
    fn entropy_skewed_below_uniform() {
        let uniform = shannon_entropy(&[25, 25, 25, 25]);
        let skewed = shannon_entropy(&[97, 1, 1, 1]);
        assert!(uniform > skewed);
    }

    #[test]
    fn entropy_empty_is_zero() {
        assert!(shannon_entropy(&[]).abs() < f64::EPSILON);
    }

    #[test]
    fn entropy_bounded_by_bucket_count() {
        let sizes = [10, 20, 30];
        let entropy = shannon_entropy(&sizes);
        assert!(entropy >= 0.0);
        assert!(entropy <= (sizes.len() as f64).log2());
    }

    #[test]
    fn partition_entropy_perfect_split() {
        // Guessing a member of a 2-word set produces two buckets of one
        let corpus = Corpus::parse("slate\nzzzzz");
        let guess = Word::new("slate").unwrap();

        let entropy = partition_entropy(&corpus, &corpus.all_ids(), &guess);
        assert!((entropy - 1.0).abs() < 0.001);
    }

    #[test]
    fn partition_entropy_no_split_is_zero() {
        let corpus = Corpus::parse("aaaaa\nbbbbb\nccccc");
        let guess = Word::new("zzzzz").unwrap();

        let entropy = partition_entropy(&corpus, &corpus.all_ids(), &guess);
        assert!(entropy.abs() < 0.001);
    }

    #[test]
    fn rank_puts_discriminating_words_first() {
        // "zzzzz" lumps the other three into one all-black bucket, any of
        // the -ate words splits everything into singletons
        let corpus = Corpus::parse("zzzzz\ncrate\ngrate\nslate");
        let ranked = rank_by_entropy(&corpus, &corpus.all_ids());

        assert_eq!(ranked, vec![1, 2, 3, 0]);
    }

    #[test]
    fn rank_is_a_permutation() {
        let corpus = Corpus::parse("crane\nslate\nirate\nstale");
        let set = corpus.all_ids();

        let mut ranked = rank_by_entropy(&corpus, &set);
        ranked.sort_unstable();
        assert_eq!(ranked, set);
    }
}

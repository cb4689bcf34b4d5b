//! Candidate-set partitioning
//!
//! Groups a candidate set by the feedback pattern a guess would produce
//! against each member: "if the secret were this candidate, what would the
//! guess reveal?" The partition drives both the minimax search (each bucket
//! is an adversary option) and candidate-set reduction (keep the bucket
//! matching the observed feedback).

use crate::core::{Corpus, Pattern, Word};
use rustc_hash::FxHashMap;

/// Partition a candidate set by the pattern `guess` induces
///
/// Buckets are returned in ascending [`Pattern`] order (the ordering of the
/// `B`/`G`/`Y` string form) so the result is deterministic. No bucket is
/// empty; together the buckets hold exactly the input ids, and each bucket
/// preserves the input's (sorted) id order.
///
/// # Examples
/// ```
/// use wordle_minimax::core::{Corpus, Word};
/// use wordle_minimax::solver::partition;
///
/// let corpus = Corpus::parse("crate\ngrate\nslate\n");
/// let guess = Word::new("crate").unwrap();
///
/// let parts = partition(&corpus, &corpus.all_ids(), &guess);
/// let total: usize = parts.iter().map(|(_, bucket)| bucket.len()).sum();
/// assert_eq!(total, corpus.len());
/// ```
#[must_use]
pub fn partition(corpus: &Corpus, set: &[u32], guess: &Word) -> Vec<(Pattern, Vec<u32>)> {
    let mut buckets: FxHashMap<Pattern, Vec<u32>> = FxHashMap::default();

    for &id in set {
        let pattern = Pattern::of(guess, corpus.word(id));
        buckets.entry(pattern).or_default().push(id);
    }

    let mut parts: Vec<(Pattern, Vec<u32>)> = buckets.into_iter().collect();
    parts.sort_unstable_by_key(|&(pattern, _)| pattern);
    parts
}

/// Recompute the candidate set from an observation history
///
/// Folds each `(guess, pattern)` pair through [`partition`], keeping the
/// bucket that matches the observed pattern. A pattern with no matching
/// bucket yields the empty set — the history is inconsistent with the
/// corpus. Recomputing from scratch keeps callers idempotent: the set
/// depends only on the history, never on incremental mutation.
#[must_use]
pub fn reduce_possible(corpus: &Corpus, history: &[(Word, Pattern)]) -> Vec<u32> {
    let mut possible = corpus.all_ids();

    for (guess, observed) in history {
        possible = partition(corpus, &possible, guess)
            .into_iter()
            .find(|(pattern, _)| pattern == observed)
            .map(|(_, bucket)| bucket)
            .unwrap_or_default();
    }

    possible
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Corpus {
        Corpus::parse("crane\nslate\nirate\ncrate\ngrate\nstale\nleast")
    }

    fn w(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn buckets_are_disjoint_and_total() {
        let corpus = corpus();
        let set = corpus.all_ids();

        for guess in ["crane", "slate", "zzzzz"] {
            let parts = partition(&corpus, &set, &w(guess));

            let mut seen: Vec<u32> = parts
                .iter()
                .flat_map(|(_, bucket)| bucket.iter().copied())
                .collect();
            seen.sort_unstable();

            assert_eq!(seen, set, "guess {guess} dropped or duplicated ids");
        }
    }

    #[test]
    fn no_bucket_is_empty() {
        let corpus = corpus();
        let parts = partition(&corpus, &corpus.all_ids(), &w("crane"));
        assert!(parts.iter().all(|(_, bucket)| !bucket.is_empty()));
    }

    #[test]
    fn buckets_sorted_by_pattern() {
        let corpus = corpus();
        let parts = partition(&corpus, &corpus.all_ids(), &w("least"));

        let rendered: Vec<String> = parts.iter().map(|(p, _)| p.to_string()).collect();
        let mut expected = rendered.clone();
        expected.sort();
        assert_eq!(rendered, expected);
    }

    #[test]
    fn buckets_preserve_sorted_id_order() {
        let corpus = corpus();
        let parts = partition(&corpus, &corpus.all_ids(), &w("irate"));

        for (_, bucket) in parts {
            assert!(bucket.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }

    #[test]
    fn bucket_members_reproduce_their_pattern() {
        let corpus = corpus();
        let guess = w("crate");
        let parts = partition(&corpus, &corpus.all_ids(), &guess);

        for (pattern, bucket) in parts {
            for id in bucket {
                assert_eq!(Pattern::of(&guess, corpus.word(id)), pattern);
            }
        }
    }

    #[test]
    fn partition_of_empty_set() {
        let corpus = corpus();
        assert!(partition(&corpus, &[], &w("crane")).is_empty());
    }

    #[test]
    fn identical_patterns_share_a_bucket() {
        // Against "zzzzz" every word is all-black, so one bucket holds all
        let corpus = corpus();
        let parts = partition(&corpus, &corpus.all_ids(), &w("zzzzz"));

        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].1.len(), corpus.len());
    }

    #[test]
    fn reduce_possible_empty_history_is_everything() {
        let corpus = corpus();
        assert_eq!(reduce_possible(&corpus, &[]), corpus.all_ids());
    }

    #[test]
    fn reduce_possible_folds_observations() {
        let corpus = corpus();
        let target = w("grate");

        let guess = w("crane");
        let observed = Pattern::of(&guess, &target);
        let possible = reduce_possible(&corpus, &[(guess.clone(), observed)]);

        // Every survivor is consistent with the observation; the target is one
        assert!(possible.iter().any(|&id| corpus.word(id).text() == "grate"));
        for &id in &possible {
            assert_eq!(Pattern::of(&guess, corpus.word(id)), observed);
        }
    }

    #[test]
    fn reduce_possible_inconsistent_history_is_empty() {
        let corpus = corpus();
        // Claiming all greens for a word not in the corpus matches nothing
        let history = vec![(w("zzzzz"), Pattern::PERFECT)];
        assert!(reduce_possible(&corpus, &history).is_empty());
    }

    #[test]
    fn reduce_possible_two_step_narrowing() {
        let corpus = corpus();
        let target = w("slate");

        let g1 = w("crane");
        let g2 = w("irate");
        let history = vec![
            (g1.clone(), Pattern::of(&g1, &target)),
            (g2.clone(), Pattern::of(&g2, &target)),
        ];

        let possible = reduce_possible(&corpus, &history);
        assert!(possible.iter().any(|&id| corpus.word(id).text() == "slate"));

        // Monotone: adding the second observation cannot grow the set
        let one_step = reduce_possible(&corpus, &history[..1]);
        assert!(possible.len() <= one_step.len());
    }
}

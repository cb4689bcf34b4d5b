//! Rank command
//!
//! Shows the entropy ranking of a candidate set — the heuristic view of
//! which guesses are expected to be most informative.

use crate::core::Corpus;
use crate::solver::{partition_entropy, rank_by_entropy};

/// One ranked word
pub struct RankEntry {
    pub word: String,
    pub entropy: f64,
}

/// Result of ranking a candidate set
pub struct RankResult {
    pub total_candidates: usize,
    pub entries: Vec<RankEntry>,
}

/// Rank `set` by descending entropy and keep the top `limit` entries
#[must_use]
pub fn run_rank(corpus: &Corpus, set: &[u32], limit: usize) -> RankResult {
    let entries = rank_by_entropy(corpus, set)
        .into_iter()
        .take(limit)
        .map(|id| {
            let word = corpus.word(id);
            RankEntry {
                word: word.text().to_string(),
                entropy: partition_entropy(corpus, set, word),
            }
        })
        .collect();

    RankResult {
        total_candidates: set.len(),
        entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_returns_descending_entropies() {
        let corpus = Corpus::parse("zzzzz\ncrate\ngrate\nslate\nleast");
        let result = run_rank(&corpus, &corpus.all_ids(), 5);

        assert_eq!(result.total_candidates, 5);
        assert_eq!(result.entries.len(), 5);
        for pair in result.entries.windows(2) {
            assert!(pair[0].entropy >= pair[1].entropy);
        }
    }

    #[test]
    fn rank_respects_limit() {
        let corpus = Corpus::parse("crane\nslate\nirate\nstale");
        let result = run_rank(&corpus, &corpus.all_ids(), 2);

        assert_eq!(result.entries.len(), 2);
        assert_eq!(result.total_candidates, 4);
    }

    #[test]
    fn rank_of_empty_set() {
        let corpus = Corpus::parse("crane");
        let result = run_rank(&corpus, &[], 10);

        assert_eq!(result.total_candidates, 0);
        assert!(result.entries.is_empty());
    }
}

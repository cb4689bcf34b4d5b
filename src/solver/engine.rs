//! Solver engine
//!
//! Ties the pieces together for one corpus: owns the depth-search cache,
//! reduces candidate sets from observed feedback, and selects the next
//! guess. One engine per corpus; the cache never outlives the corpus its
//! ids refer to.

use super::depth::DepthSearch;
use super::partition::{partition, reduce_possible};
use super::select::{
    self, SearchLimits, SearchReport, explain_optimal_word_from_pool, optimal_word_from_pool,
};
use crate::core::{Corpus, Pattern, Word};

/// Minimax solver bound to a corpus
///
/// # Examples
/// ```
/// use wordle_minimax::core::{Corpus, Pattern, Word};
/// use wordle_minimax::solver::Solver;
///
/// let corpus = Corpus::parse("crate\ngrate\nslate");
/// let mut solver = Solver::new(&corpus);
///
/// // Guessed "crate", saw one black and four greens
/// let guess = Word::new("crate").unwrap();
/// let observed = Pattern::parse("BGGGG").unwrap();
/// let (next, remaining) =
///     solver.optimal_guess_from_feedback(&corpus.all_ids(), &guess, observed, 5);
///
/// assert_eq!(remaining.len(), 1);
/// assert_eq!(next.map(|id| corpus.word(id).text()), Some("grate"));
/// ```
pub struct Solver<'a> {
    corpus: &'a Corpus,
    search: DepthSearch,
    limits: SearchLimits,
}

impl<'a> Solver<'a> {
    /// Create a solver with default search limits
    #[must_use]
    pub fn new(corpus: &'a Corpus) -> Self {
        Self::with_limits(corpus, SearchLimits::default())
    }

    /// Create a solver with explicit search limits
    #[must_use]
    pub fn with_limits(corpus: &'a Corpus, limits: SearchLimits) -> Self {
        Self {
            corpus,
            search: DepthSearch::new(),
            limits,
        }
    }

    /// The corpus this solver searches over
    #[must_use]
    pub const fn corpus(&self) -> &'a Corpus {
        self.corpus
    }

    /// Best next guess for a candidate set, drawn from the set itself
    pub fn optimal_word(&mut self, set: &[u32], depth_left: u32) -> Option<u32> {
        select::optimal_word(self.corpus, set, depth_left, &mut self.search, &self.limits)
    }

    /// [`Self::optimal_word`] with full diagnostics
    pub fn explain_optimal_word(&mut self, set: &[u32], depth_left: u32) -> SearchReport {
        select::explain_optimal_word(self.corpus, set, depth_left, &mut self.search, &self.limits)
    }

    /// Best next guess drawn from an explicit pool
    pub fn optimal_word_from_pool(
        &mut self,
        pool: &[u32],
        set: &[u32],
        depth_left: u32,
    ) -> Option<u32> {
        optimal_word_from_pool(
            self.corpus,
            pool,
            set,
            depth_left,
            &mut self.search,
            &self.limits,
        )
    }

    /// [`Self::optimal_word_from_pool`] with full diagnostics
    pub fn explain_optimal_word_from_pool(
        &mut self,
        pool: &[u32],
        set: &[u32],
        depth_left: u32,
    ) -> SearchReport {
        explain_optimal_word_from_pool(
            self.corpus,
            pool,
            set,
            depth_left,
            &mut self.search,
            &self.limits,
        )
    }

    /// Apply one observed turn and pick the next guess
    ///
    /// Partitions `set` on the previous guess, keeps the bucket matching
    /// the observed pattern (empty when the observation is inconsistent
    /// with the corpus), and selects the best next guess for it. Returns
    /// the guess together with the reduced candidate set so the caller can
    /// carry it into the next turn.
    pub fn optimal_guess_from_feedback(
        &mut self,
        set: &[u32],
        previous_guess: &Word,
        observed: Pattern,
        depth_left: u32,
    ) -> (Option<u32>, Vec<u32>) {
        let new_possible = partition(self.corpus, set, previous_guess)
            .into_iter()
            .find(|(pattern, _)| *pattern == observed)
            .map(|(_, bucket)| bucket)
            .unwrap_or_default();

        let next = self.optimal_word(&new_possible, depth_left);
        (next, new_possible)
    }

    /// Recompute the candidate set from a full observation history
    #[must_use]
    pub fn reduce_possible(&self, history: &[(Word, Pattern)]) -> Vec<u32> {
        reduce_possible(self.corpus, history)
    }

    /// Invalidate every memoized depth result
    ///
    /// The cache lives on this instance, so results cannot leak across
    /// solvers; clearing matters when one instance is pointed at logically
    /// distinct games and a cold start is wanted, and it is how tests
    /// check that caching is only an optimization.
    pub fn clear_cache(&mut self) {
        self.search.clear();
    }
}

//! Bench command
//!
//! Plays the solver against many targets and aggregates the results.
//! Targets run in parallel; each rayon worker carries its own [`Solver`]
//! so the depth-search caches are never shared across threads.

use super::picker::Picker;
use crate::core::{Corpus, Pattern, Word};
use crate::solver::Solver;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

const MAX_GUESSES: u32 = 6;

/// Result of a bench run
pub struct BenchResult {
    pub total_words: usize,
    pub total_guesses: u32,
    pub average_guesses: f64,
    pub min_guesses: u32,
    pub max_guesses: u32,
    pub failures: usize,
    pub distribution: HashMap<u32, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Play every target and aggregate
///
/// If `forced_first` is provided it is used as the opening guess for every
/// game; computing the opening once and forcing it avoids re-deriving the
/// same full-corpus pick per target.
pub fn run_bench(
    corpus: &Corpus,
    targets: &[u32],
    picker: &Picker,
    forced_first: Option<u32>,
) -> BenchResult {
    let start = Instant::now();

    let pb = ProgressBar::new(targets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let outcomes: Vec<(u32, bool)> = targets
        .par_iter()
        .map_init(
            || Solver::new(corpus),
            |solver, &target_id| {
                let outcome = play_one(solver, picker, target_id, forced_first);
                pb.inc(1);
                outcome
            },
        )
        .collect();

    pb.finish_and_clear();

    let duration = start.elapsed();
    let total_words = outcomes.len();
    let total_guesses: u32 = outcomes.iter().map(|&(guesses, _)| guesses).sum();
    let failures = outcomes.iter().filter(|&&(_, solved)| !solved).count();

    let mut distribution: HashMap<u32, usize> = HashMap::new();
    for &(guesses, _) in &outcomes {
        *distribution.entry(guesses).or_insert(0) += 1;
    }

    BenchResult {
        total_words,
        total_guesses,
        average_guesses: f64::from(total_guesses) / total_words as f64,
        min_guesses: outcomes.iter().map(|&(g, _)| g).min().unwrap_or(0),
        max_guesses: outcomes.iter().map(|&(g, _)| g).max().unwrap_or(0),
        failures,
        distribution,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64(),
    }
}

/// Play one game; returns (guesses used, solved)
fn play_one(
    solver: &mut Solver<'_>,
    picker: &Picker,
    target_id: u32,
    forced_first: Option<u32>,
) -> (u32, bool) {
    let corpus = solver.corpus();
    let target = corpus.word(target_id).clone();
    let mut history: Vec<(Word, Pattern)> = Vec::new();

    for turn in 0..MAX_GUESSES {
        let possible = solver.reduce_possible(&history);
        let depth_left = MAX_GUESSES - turn;

        let guess_id = if let (0, Some(forced)) = (turn, forced_first) {
            forced
        } else {
            match picker.next_guess(solver, &possible, depth_left) {
                Some(id) => id,
                None => return (turn, false),
            }
        };

        let guess = corpus.word(guess_id).clone();
        let pattern = Pattern::of(&guess, &target);
        history.push((guess, pattern));

        if pattern.is_perfect() {
            return (turn + 1, true);
        }
    }

    (MAX_GUESSES, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Corpus {
        Corpus::parse("crane\nslate\nirate\ncrate\ngrate\nstale\nleast\ntrace")
    }

    #[test]
    fn bench_solves_small_corpus() {
        let corpus = corpus();
        let targets = corpus.all_ids();

        let result = run_bench(&corpus, &targets, &Picker::Minimax, None);

        assert_eq!(result.total_words, corpus.len());
        assert_eq!(result.failures, 0);
        assert!(result.min_guesses >= 1);
        assert!(result.max_guesses <= MAX_GUESSES);
    }

    #[test]
    fn bench_distribution_sums_correctly() {
        let corpus = corpus();
        let result = run_bench(&corpus, &corpus.all_ids(), &Picker::Minimax, None);

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.total_words);
    }

    #[test]
    fn bench_metrics_consistency() {
        let corpus = corpus();
        let result = run_bench(&corpus, &corpus.all_ids(), &Picker::Minimax, None);

        assert!(result.average_guesses >= f64::from(result.min_guesses));
        assert!(result.average_guesses <= f64::from(result.max_guesses));
    }

    #[test]
    fn bench_with_forced_first_word() {
        let corpus = corpus();
        let forced = corpus.id_of("crane");
        assert!(forced.is_some());

        let result = run_bench(&corpus, &corpus.all_ids(), &Picker::Minimax, forced);

        assert_eq!(result.failures, 0);
        // The forced opener solves itself in one
        assert_eq!(result.min_guesses, 1);
    }

    #[test]
    fn bench_empty_target_list() {
        let corpus = corpus();
        let result = run_bench(&corpus, &[], &Picker::Minimax, None);

        assert_eq!(result.total_words, 0);
        assert_eq!(result.total_guesses, 0);
        assert_eq!(result.min_guesses, 0);
    }
}

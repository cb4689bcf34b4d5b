//! Solve command
//!
//! Self-play against a known target: replay the solver turn by turn and
//! record the path it takes.

use super::picker::Picker;
use crate::core::{Pattern, Word};
use crate::solver::{Solver, partition_entropy};

/// Configuration for solving a target word
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: u32,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: 6,
        }
    }
}

/// Result of solving a target word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single turn in the solution path
pub struct GuessStep {
    pub word: String,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub entropy: Option<f64>,
}

/// Play the solver against `config.target`
///
/// The candidate set is recomputed from the running history each turn, so
/// the recorded path is exactly what a fresh invocation with the same
/// observations would do.
///
/// # Errors
///
/// Returns an error if the target is not a valid word, is missing from the
/// corpus, or the picker cannot produce a guess while candidates remain.
pub fn solve_word(
    config: &SolveConfig,
    picker: &Picker,
    solver: &mut Solver<'_>,
) -> Result<SolveResult, String> {
    let target = Word::new(&config.target).map_err(|e| format!("Invalid target word: {e}"))?;

    let corpus = solver.corpus();
    if corpus.id_of(target.text()).is_none() {
        return Err(format!("'{target}' is not in the corpus"));
    }

    let mut history: Vec<(Word, Pattern)> = Vec::new();
    let mut guesses: Vec<GuessStep> = Vec::new();

    for turn in 0..config.max_guesses {
        let possible = solver.reduce_possible(&history);
        let candidates_before = possible.len();
        let depth_left = config.max_guesses - turn;

        let guess_id = picker
            .next_guess(solver, &possible, depth_left)
            .ok_or_else(|| "No candidates remaining".to_string())?;
        let guess = corpus.word(guess_id).clone();

        let entropy = (candidates_before > 1)
            .then(|| partition_entropy(corpus, &possible, &guess));

        let pattern = Pattern::of(&guess, &target);
        history.push((guess.clone(), pattern));

        let candidates_after = solver.reduce_possible(&history).len();

        guesses.push(GuessStep {
            word: guess.text().to_string(),
            pattern,
            candidates_before,
            candidates_after,
            entropy,
        });

        if pattern.is_perfect() {
            return Ok(SolveResult {
                success: true,
                guesses,
                target: config.target.clone(),
            });
        }
    }

    Ok(SolveResult {
        success: false,
        guesses,
        target: config.target.clone(),
    })
}

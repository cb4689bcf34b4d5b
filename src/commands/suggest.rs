//! Suggest command
//!
//! One solver turn: rebuild the candidate set from the observations given
//! on the command line, then pick the next guess.

use super::picker::Picker;
use crate::core::{Corpus, Pattern, Word};
use crate::solver::{SearchReport, Solver, reduce_possible};

/// One observed turn, as given on the command line
pub struct Observation {
    pub guess: Word,
    pub pattern: Pattern,
}

/// Parse an observation argument of the form `crane=BYGBB`
///
/// A `:` separator is accepted as well.
///
/// # Errors
///
/// Returns a message naming the malformed half when the word or pattern
/// does not parse.
pub fn parse_observation(arg: &str) -> Result<Observation, String> {
    let (word_part, pattern_part) = arg
        .split_once(['=', ':'])
        .ok_or_else(|| format!("Expected GUESS=PATTERN, got '{arg}'"))?;

    let guess = Word::new(word_part).map_err(|e| format!("Bad guess '{word_part}': {e}"))?;
    let pattern = Pattern::parse(pattern_part)
        .ok_or_else(|| format!("Bad pattern '{pattern_part}': use five of G/Y/B"))?;

    Ok(Observation { guess, pattern })
}

/// Result of one suggestion turn
pub struct SuggestResult {
    /// The recommended next guess, if any guess is feasible
    pub suggestion: Option<String>,
    /// Words still consistent with the observations
    pub candidates: Vec<String>,
    /// Diagnostics when the pick came from a minimax scan
    pub report: Option<SearchReport>,
    /// Guesses left in the budget after the observations
    pub depth_left: u32,
}

/// Compute the next guess for a set of observations
///
/// The candidate set is recomputed from scratch out of the observation
/// history, so repeated invocations with the same arguments agree.
pub fn run_suggest(
    corpus: &Corpus,
    observations: &[Observation],
    budget: u32,
    picker: &Picker,
) -> SuggestResult {
    let history: Vec<(Word, Pattern)> = observations
        .iter()
        .map(|o| (o.guess.clone(), o.pattern))
        .collect();

    let possible = reduce_possible(corpus, &history);
    let depth_left = budget.saturating_sub(observations.len() as u32);

    let mut solver = Solver::new(corpus);
    let (pick, report) = picker.suggest(&mut solver, &possible, depth_left);

    SuggestResult {
        suggestion: pick.map(|id| corpus.word(id).text().to_string()),
        candidates: possible
            .iter()
            .map(|&id| corpus.word(id).text().to_string())
            .collect(),
        report,
        depth_left,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Corpus {
        Corpus::parse("crate\ngrate\nslate\nleast\nstale")
    }

    #[test]
    fn parse_observation_accepts_both_separators() {
        let a = parse_observation("crane=BYGBB").unwrap();
        let b = parse_observation("crane:BYGBB").unwrap();

        assert_eq!(a.guess.text(), "crane");
        assert_eq!(a.pattern, b.pattern);
        assert_eq!(a.pattern.to_string(), "BYGBB");
    }

    #[test]
    fn parse_observation_rejects_garbage() {
        assert!(parse_observation("crane").is_err());
        assert!(parse_observation("cr4ne=BBBBB").is_err());
        assert!(parse_observation("crane=BBXBB").is_err());
        assert!(parse_observation("crane=BBB").is_err());
    }

    #[test]
    fn suggest_with_no_observations_searches_everything() {
        let corpus = corpus();
        let result = run_suggest(&corpus, &[], 6, &Picker::Minimax);

        assert!(result.suggestion.is_some());
        assert_eq!(result.candidates.len(), corpus.len());
        assert_eq!(result.depth_left, 6);
    }

    #[test]
    fn suggest_narrows_on_observation() {
        let corpus = corpus();
        let target = Word::new("grate").unwrap();
        let guess = Word::new("crate").unwrap();
        let obs = Observation {
            pattern: Pattern::of(&guess, &target),
            guess,
        };

        let result = run_suggest(&corpus, &[obs], 6, &Picker::Minimax);

        assert_eq!(result.depth_left, 5);
        assert_eq!(result.candidates, vec!["grate"]);
        assert_eq!(result.suggestion.as_deref(), Some("grate"));
    }

    #[test]
    fn suggest_with_impossible_history_finds_nothing() {
        let corpus = corpus();
        let obs = Observation {
            guess: Word::new("zzzzz").unwrap(),
            pattern: Pattern::PERFECT,
        };

        let result = run_suggest(&corpus, &[obs], 6, &Picker::Minimax);

        assert_eq!(result.suggestion, None);
        assert!(result.candidates.is_empty());
    }

    #[test]
    fn exhausted_budget_suggests_nothing_for_ambiguous_sets() {
        let corpus = corpus();
        let result = run_suggest(&corpus, &[], 0, &Picker::Minimax);

        assert_eq!(result.depth_left, 0);
        assert_eq!(result.suggestion, None);
    }
}

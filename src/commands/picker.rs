//! Guess-picking policy
//!
//! The engine never decides when exhaustive search is affordable; that is
//! the caller's call. The picker encodes it: pure minimax, pure entropy
//! ranking, or the default adaptive policy that runs exhaustive minimax
//! (over a pruned pool) only once the candidate set is small enough and
//! falls back to entropy ranking above that.

use crate::solver::{SearchReport, Solver, prune_guess_pool, rank_by_entropy};

/// How many candidates the adaptive policy still searches exhaustively
pub const DEFAULT_EXHAUSTIVE_BELOW: usize = 400;

/// Strategy for choosing the next guess
pub enum Picker {
    /// Exhaustive worst-case minimax over the candidate set
    Minimax,
    /// Highest expected information gain; no worst-case guarantee
    Entropy,
    /// Minimax over a pruned pool below the threshold, entropy above it
    Auto {
        /// Candidate counts below this get the exhaustive search
        exhaustive_below: usize,
    },
}

impl Picker {
    /// Create a picker from a name string
    ///
    /// Supported names: "minimax", "entropy", "auto". Defaults to auto if
    /// the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str, exhaustive_below: usize) -> Self {
        match name {
            "minimax" => Self::Minimax,
            "entropy" => Self::Entropy,
            _ => Self::Auto { exhaustive_below },
        }
    }

    /// Choose the next guess for a candidate set
    pub fn next_guess(
        &self,
        solver: &mut Solver<'_>,
        set: &[u32],
        depth_left: u32,
    ) -> Option<u32> {
        self.suggest(solver, set, depth_left).0
    }

    /// Choose the next guess, with search diagnostics where they exist
    ///
    /// Entropy picks carry no report; there is no scan to describe.
    pub fn suggest(
        &self,
        solver: &mut Solver<'_>,
        set: &[u32],
        depth_left: u32,
    ) -> (Option<u32>, Option<SearchReport>) {
        match self {
            Self::Minimax => {
                let report = solver.explain_optimal_word(set, depth_left);
                (report.chosen, Some(report))
            }
            Self::Entropy => (entropy_pick(solver, set), None),
            Self::Auto { exhaustive_below } => {
                if set.len() < *exhaustive_below {
                    let pool = prune_guess_pool(solver.corpus(), set, depth_left);
                    let report = solver.explain_optimal_word_from_pool(&pool, set, depth_left);
                    (report.chosen, Some(report))
                } else {
                    (entropy_pick(solver, set), None)
                }
            }
        }
    }
}

fn entropy_pick(solver: &mut Solver<'_>, set: &[u32]) -> Option<u32> {
    rank_by_entropy(solver.corpus(), set).into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Corpus;

    fn corpus() -> Corpus {
        Corpus::parse("crate\ngrate\nslate\nleast\nstale")
    }

    #[test]
    fn from_name_resolves() {
        assert!(matches!(Picker::from_name("minimax", 10), Picker::Minimax));
        assert!(matches!(Picker::from_name("entropy", 10), Picker::Entropy));
        assert!(matches!(
            Picker::from_name("anything", 10),
            Picker::Auto { exhaustive_below: 10 }
        ));
    }

    #[test]
    fn every_picker_finds_a_guess() {
        let corpus = corpus();
        let set = corpus.all_ids();

        for picker in [
            Picker::Minimax,
            Picker::Entropy,
            Picker::Auto { exhaustive_below: 3 },
            Picker::Auto {
                exhaustive_below: 100,
            },
        ] {
            let mut solver = Solver::new(&corpus);
            let pick = picker.next_guess(&mut solver, &set, 6);
            assert!(pick.is_some());
            assert!(set.contains(&pick.unwrap()));
        }
    }

    #[test]
    fn minimax_picker_carries_a_report() {
        let corpus = corpus();
        let mut solver = Solver::new(&corpus);

        let (pick, report) = Picker::Minimax.suggest(&mut solver, &corpus.all_ids(), 6);
        let report = report.expect("minimax scans always report");
        assert_eq!(pick, report.chosen);
        assert!(report.evaluated > 0);
    }

    #[test]
    fn entropy_picker_has_no_report() {
        let corpus = corpus();
        let mut solver = Solver::new(&corpus);

        let (pick, report) = Picker::Entropy.suggest(&mut solver, &corpus.all_ids(), 6);
        assert!(pick.is_some());
        assert!(report.is_none());
    }

    #[test]
    fn auto_switches_on_set_size() {
        let corpus = corpus();
        let mut solver = Solver::new(&corpus);
        let set = corpus.all_ids();

        // Above the threshold the pick is entropy-ranked (no report)
        let tight = Picker::Auto { exhaustive_below: 2 };
        assert!(tight.suggest(&mut solver, &set, 6).1.is_none());

        // Below it the exhaustive scan runs
        let roomy = Picker::Auto {
            exhaustive_below: 100,
        };
        assert!(roomy.suggest(&mut solver, &set, 6).1.is_some());
    }

    #[test]
    fn empty_set_picks_nothing() {
        let corpus = corpus();
        let mut solver = Solver::new(&corpus);

        for picker in [Picker::Minimax, Picker::Entropy] {
            assert_eq!(picker.next_guess(&mut solver, &[], 6), None);
        }
    }
}

//! Command implementations

pub mod bench;
pub mod picker;
pub mod play;
pub mod rank;
pub mod solve;
pub mod suggest;

pub use bench::{BenchResult, run_bench};
pub use picker::{DEFAULT_EXHAUSTIVE_BELOW, Picker};
pub use play::run_play;
pub use rank::{RankEntry, RankResult, run_rank};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};
pub use suggest::{Observation, SuggestResult, parse_observation, run_suggest};

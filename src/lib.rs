//! Wordle Minimax Solver
//!
//! A streak-focused Wordle solver: instead of maximizing average-case
//! information gain, it minimizes the worst-case number of guesses needed
//! to isolate the target, using a memoized adversarial depth search over
//! candidate-set partitions.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_minimax::core::{Corpus, Pattern, Word};
//! use wordle_minimax::solver::Solver;
//!
//! let corpus = Corpus::parse("crate\ngrate\nslate");
//! let mut solver = Solver::new(&corpus);
//!
//! // Best opening guess for this tiny corpus
//! let best = solver.optimal_word(&corpus.all_ids(), 6).unwrap();
//! assert_eq!(corpus.word(best).text(), "crate");
//!
//! // Feedback for a guess against a hidden target
//! let guess = Word::new("sassy").unwrap();
//! let target = Word::new("mesas").unwrap();
//! assert_eq!(Pattern::of(&guess, &target).to_string(), "YYGBB");
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

//! Core domain types
//!
//! The fundamental vocabulary of the solver: validated words, feedback
//! patterns, and the word corpus. Everything here is pure and has no
//! dependency outside the standard library.

mod corpus;
mod pattern;
mod word;

pub use corpus::Corpus;
pub use pattern::{Feedback, Pattern};
pub use word::{Word, WordError};

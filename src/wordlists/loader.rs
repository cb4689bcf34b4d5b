//! Corpus loading utilities
//!
//! Turns files or embedded string slices into a [`Corpus`].

use crate::core::Corpus;
use std::fs;
use std::io;
use std::path::Path;

/// Load a corpus from a file, one word per line
///
/// Lines that do not form a valid 5-letter word are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_minimax::wordlists::loader::load_from_file;
///
/// let corpus = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", corpus.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Corpus> {
    let content = fs::read_to_string(path)?;
    Ok(Corpus::parse(&content))
}

/// Build a corpus from a string slice of words
///
/// # Examples
/// ```
/// use wordle_minimax::wordlists::loader::corpus_from_slice;
/// use wordle_minimax::wordlists::WORDS;
///
/// let corpus = corpus_from_slice(WORDS);
/// assert_eq!(corpus.len(), WORDS.len());
/// ```
#[must_use]
pub fn corpus_from_slice(slice: &[&str]) -> Corpus {
    let words = slice
        .iter()
        .filter_map(|&s| crate::core::Word::new(s).ok())
        .collect();
    Corpus::from_words(words)
}

//! Word corpus
//!
//! The corpus is the ordered universe of words loaded once at startup. It
//! defines both the possible secret targets and, by default, the allowed
//! guesses. Words are addressed by dense `u32` ids so candidate sets can be
//! passed around as sorted id arrays instead of cloned string collections;
//! the depth-search cache keys on those arrays, so keeping them sorted makes
//! the keys canonical.

use super::Word;

/// Ordered, immutable collection of 5-letter words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    words: Vec<Word>,
}

impl Corpus {
    /// Build a corpus from raw text, one word per line
    ///
    /// Lines are trimmed; entries that do not form a valid 5-letter word
    /// are dropped. Input order is preserved.
    ///
    /// # Examples
    /// ```
    /// use wordle_minimax::core::Corpus;
    ///
    /// let corpus = Corpus::parse("crane\n  slate \nxx\nsh0rt\nirate\n");
    /// assert_eq!(corpus.len(), 3);
    /// assert_eq!(corpus.word(1).text(), "slate");
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let words = raw
            .lines()
            .filter_map(|line| Word::new(line.trim()).ok())
            .collect();
        Self { words }
    }

    /// Build a corpus from already-validated words
    #[must_use]
    pub fn from_words(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Number of words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the corpus holds no words
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words in corpus order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// The word with the given id
    ///
    /// # Panics
    /// Panics if `id` is out of range.
    #[inline]
    #[must_use]
    pub fn word(&self, id: u32) -> &Word {
        &self.words[id as usize]
    }

    /// Ids of every word, in order — the full candidate set
    #[must_use]
    pub fn all_ids(&self) -> Vec<u32> {
        (0..self.words.len() as u32).collect()
    }

    /// Look up a word's id by text
    #[must_use]
    pub fn id_of(&self, text: &str) -> Option<u32> {
        let needle = text.to_lowercase();
        self.words
            .iter()
            .position(|w| w.text() == needle)
            .map(|i| i as u32)
    }
}

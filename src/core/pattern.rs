//! Wordle feedback patterns and the feedback oracle
//!
//! A pattern holds one feedback symbol per guess position:
//! - `Black` — letter not creditable in the target
//! - `Yellow` — letter present but in the wrong position
//! - `Green` — letter in the correct position
//!
//! The string form uses `B`/`Y`/`G`, e.g. `"YYGBB"`. The derived ordering
//! of [`Pattern`] matches the lexicographic ordering of that string form
//! (`Black < Green < Yellow` mirrors `'B' < 'G' < 'Y'`), which is what the
//! partitioner sorts buckets by.

use super::Word;
use std::fmt;

/// Feedback symbol for a single guess position
///
/// Variant order is load-bearing: the derived `Ord` must agree with the
/// ASCII order of the `B`/`G`/`Y` letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Feedback {
    Black,
    Green,
    Yellow,
}

impl Feedback {
    /// The symbol's letter in the string form of a pattern
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Black => 'B',
            Self::Green => 'G',
            Self::Yellow => 'Y',
        }
    }
}

/// Feedback pattern for a full 5-letter guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pattern([Feedback; 5]);

impl Pattern {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([Feedback::Green; 5]);

    /// Create a pattern from explicit per-position symbols
    #[inline]
    #[must_use]
    pub const fn new(symbols: [Feedback; 5]) -> Self {
        Self(symbols)
    }

    /// The per-position symbols
    #[inline]
    #[must_use]
    pub const fn symbols(&self) -> &[Feedback; 5] {
        &self.0
    }

    /// Check if this is a perfect match (all greens)
    #[must_use]
    pub fn is_perfect(self) -> bool {
        self.0.iter().all(|&s| s == Feedback::Green)
    }

    /// Compute the pattern `guess` would receive against `target`
    ///
    /// Exact Wordle semantics in two passes:
    /// 1. Mark greens and collect a multiset of the target letters at all
    ///    non-matched positions.
    /// 2. For each non-green position, mark yellow while that letter still
    ///    has remaining count in the multiset, else black.
    ///
    /// The pass order guarantees duplicate letters in the guess are never
    /// credited beyond the count actually left in the target. Length
    /// mismatch cannot occur: both arguments are validated [`Word`]s.
    ///
    /// # Examples
    /// ```
    /// use wordle_minimax::core::{Pattern, Word};
    ///
    /// let guess = Word::new("sassy").unwrap();
    /// let target = Word::new("mesas").unwrap();
    /// assert_eq!(Pattern::of(&guess, &target).to_string(), "YYGBB");
    /// ```
    #[must_use]
    pub fn of(guess: &Word, target: &Word) -> Self {
        let mut symbols = [Feedback::Black; 5];
        let mut remaining = target.letter_counts();

        // Green pass: exact matches are consumed before anything else
        for (i, (&g, &t)) in guess.letters().iter().zip(target.letters()).enumerate() {
            if g == t {
                symbols[i] = Feedback::Green;
                remaining[usize::from(t - b'a')] -= 1;
            }
        }

        // Yellow pass: credit only while unmatched copies remain
        for (i, &g) in guess.letters().iter().enumerate() {
            if symbols[i] == Feedback::Black {
                let count = &mut remaining[usize::from(g - b'a')];
                if *count > 0 {
                    symbols[i] = Feedback::Yellow;
                    *count -= 1;
                }
            }
        }

        Self(symbols)
    }

    /// Count the green symbols
    #[must_use]
    pub fn greens(self) -> usize {
        self.0.iter().filter(|&&s| s == Feedback::Green).count()
    }

    /// Count the yellow symbols
    #[must_use]
    pub fn yellows(self) -> usize {
        self.0.iter().filter(|&&s| s == Feedback::Yellow).count()
    }

    /// Count the black symbols
    #[must_use]
    pub fn blacks(self) -> usize {
        self.0.iter().filter(|&&s| s == Feedback::Black).count()
    }

    /// Parse a pattern from a string like `"YYGBB"` or `"🟨🟨🟩⬛⬛"`
    ///
    /// Accepts:
    /// - `G`/`g`/🟩 for green
    /// - `Y`/`y`/🟨 for yellow
    /// - `B`/`b`/`-`/`_`/⬛/⬜ for black
    ///
    /// # Examples
    /// ```
    /// use wordle_minimax::core::Pattern;
    ///
    /// let p1 = Pattern::parse("gyB-_").unwrap();
    /// let p2 = Pattern::parse("🟩🟨⬛⬜⬛").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let mut symbols = [Feedback::Black; 5];
        let mut count = 0;

        for (i, ch) in s.chars().enumerate() {
            if i >= 5 {
                return None;
            }
            symbols[i] = match ch {
                'G' | 'g' | '🟩' => Feedback::Green,
                'Y' | 'y' | '🟨' => Feedback::Yellow,
                'B' | 'b' | '-' | '_' | '⬛' | '⬜' => Feedback::Black,
                _ => return None,
            };
            count = i + 1;
        }

        (count == 5).then_some(Self(symbols))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for s in self.0 {
            write!(f, "{}", s.as_char())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}

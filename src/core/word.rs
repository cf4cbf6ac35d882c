//! Corpus word representation
//!
//! A Word is five distinct letters. Words with a repeated letter are not
//! representable, which is what keeps every posting list free of duplicates.

use super::letter::{Letter, WORD_LENGTH};
use crate::error::{IndexError, Result};
use std::fmt;

/// A 5-letter word with no repeated letter
///
/// Stores the lowercase text, the decoded letters and a bitmask of the
/// letters present for constant-time membership checks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
    letters: [Letter; WORD_LENGTH],
    mask: u32,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `InvalidWord` if the text is not exactly five letters `a..=z`
    /// (case-insensitive) or if any letter repeats.
    ///
    /// # Examples
    /// ```
    /// use wordle_index::core::Word;
    ///
    /// let word = Word::new("Crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("speed").is_err()); // repeated 'e'
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text: String = text.into().to_ascii_lowercase();

        let mut letters = [Letter::FIRST; WORD_LENGTH];
        let mut mask = 0u32;
        let mut len = 0;

        for ch in text.chars() {
            if len == WORD_LENGTH {
                return Err(IndexError::InvalidWord(format!("'{text}' is longer than 5 letters")));
            }
            let letter = Letter::from_char(ch)
                .ok_or_else(|| IndexError::InvalidWord(format!("'{text}' contains '{ch}'")))?;
            let bit = 1 << letter.index();
            if mask & bit != 0 {
                return Err(IndexError::InvalidWord(format!("'{text}' repeats '{ch}'")));
            }
            mask |= bit;
            letters[len] = letter;
            len += 1;
        }

        if len != WORD_LENGTH {
            return Err(IndexError::InvalidWord(format!("'{text}' has {len} letters, expected 5")));
        }

        Ok(Self {
            text,
            letters,
            mask,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[Letter; WORD_LENGTH] {
        &self.letters
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> Letter {
        self.letters[position]
    }

    /// Check if the word contains a specific letter anywhere
    #[inline]
    #[must_use]
    pub const fn contains(&self, letter: Letter) -> bool {
        self.mask & (1 << letter.index()) != 0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(ch: char) -> Letter {
        Letter::from_char(ch).unwrap()
    }

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.letter_at(0), letter('c'));
        assert_eq!(word.letter_at(4), letter('e'));
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("TABLE").unwrap();
        assert_eq!(word.text(), "table");
        assert_eq!(word, Word::new("tAbLe").unwrap());
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(Word::new("too long"), Err(IndexError::InvalidWord(_))));
        assert!(matches!(Word::new("shrt"), Err(IndexError::InvalidWord(_))));
        assert!(matches!(Word::new(""), Err(IndexError::InvalidWord(_))));
        assert!(matches!(Word::new("planets"), Err(IndexError::InvalidWord(_))));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("cran3").is_err());
        assert!(Word::new("cran ").is_err());
        assert!(Word::new("cran!").is_err());
        assert!(Word::new("cranè").is_err());
    }

    #[test]
    fn word_creation_rejects_letters_that_fold_to_ascii() {
        // KELVIN SIGN lowercases to 'k' under Unicode rules
        assert!(matches!(
            Word::new("\u{212A}RANE"),
            Err(IndexError::InvalidWord(_))
        ));
        // LATIN CAPITAL LETTER I WITH DOT ABOVE lowercases to "i\u{307}"
        assert!(Word::new("\u{130}RANE").is_err());
    }

    #[test]
    fn word_creation_rejects_repeated_letters() {
        assert!(Word::new("abcda").is_err());
        assert!(Word::new("speed").is_err());
        assert!(Word::new("aaaaa").is_err());
        assert!(Word::new("ABCDE").is_ok());
    }

    #[test]
    fn word_contains() {
        let word = Word::new("crane").unwrap();
        for ch in ['c', 'r', 'a', 'n', 'e'] {
            assert!(word.contains(letter(ch)));
        }
        assert!(!word.contains(letter('z')));
        assert!(!word.contains(letter('t')));
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane").unwrap();
        assert_eq!(format!("{word}"), "crane");
    }
}

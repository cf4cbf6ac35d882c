//! Alphabet letters and word slots
//!
//! Both types are validated on construction, so anything holding a `Letter`
//! or a `Slot` can index the posting table without further checks.

use crate::error::{IndexError, Result};
use serde::{Serialize, Serializer};
use std::fmt;

/// Number of letters in the fixed alphabet
pub const ALPHABET_SIZE: usize = 26;

/// Number of letters in every corpus word
pub const WORD_LENGTH: usize = 5;

/// One of the 26 letters `a..=z`, stored as its ordinal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    pub(crate) const FIRST: Self = Self(0);

    /// Convert a character to a letter, ignoring case
    ///
    /// Returns `None` for anything outside the ASCII alphabet.
    ///
    /// # Examples
    /// ```
    /// use wordle_index::core::Letter;
    ///
    /// assert_eq!(Letter::from_char('Q'), Letter::from_char('q'));
    /// assert!(Letter::from_char('é').is_none());
    /// ```
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        let lower = ch.to_ascii_lowercase();
        if lower.is_ascii_lowercase() {
            Some(Self(lower as u8 - b'a'))
        } else {
            None
        }
    }

    /// Letter with ordinal `index`
    ///
    /// `index` must be below `ALPHABET_SIZE`; debug builds assert it.
    #[must_use]
    pub(crate) const fn from_index(index: usize) -> Self {
        debug_assert!(index < ALPHABET_SIZE);
        Self((index % ALPHABET_SIZE) as u8)
    }

    /// Ordinal in `0..26`
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Lowercase character for this letter
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        (b'a' + self.0) as char
    }

    /// Iterate the whole alphabet in order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..ALPHABET_SIZE as u8).map(Self)
    }
}

impl TryFrom<char> for Letter {
    type Error = IndexError;

    fn try_from(ch: char) -> Result<Self> {
        Self::from_char(ch)
            .ok_or_else(|| IndexError::invalid_constraint(format!("'{ch}' is not a letter a-z")))
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl Serialize for Letter {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_char(self.to_char())
    }
}

/// A concrete position inside a word, `0..5`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Slot(u8);

impl Slot {
    /// Create a slot from a 0-indexed position
    ///
    /// # Errors
    /// Returns `InvalidConstraint` when `position` is negative or `>= 5`.
    ///
    /// # Examples
    /// ```
    /// use wordle_index::core::Slot;
    ///
    /// assert_eq!(Slot::new(4).unwrap().index(), 4);
    /// assert!(Slot::new(5).is_err());
    /// assert!(Slot::new(-1).is_err());
    /// ```
    pub fn new(position: i64) -> Result<Self> {
        match u8::try_from(position) {
            Ok(slot) if usize::from(slot) < WORD_LENGTH => Ok(Self(slot)),
            _ => Err(IndexError::invalid_constraint(format!(
                "position {position} is outside 0..{WORD_LENGTH}"
            ))),
        }
    }

    /// Slot at `index`
    ///
    /// `index` must be below `WORD_LENGTH`; debug builds assert it.
    #[must_use]
    pub(crate) const fn from_index(index: usize) -> Self {
        debug_assert!(index < WORD_LENGTH);
        Self((index % WORD_LENGTH) as u8)
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate all five slots in order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..WORD_LENGTH as u8).map(Self)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_from_char_normalises_case() {
        let lower = Letter::from_char('a').unwrap();
        let upper = Letter::from_char('A').unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower.index(), 0);
        assert_eq!(Letter::from_char('z').unwrap().index(), 25);
    }

    #[test]
    fn letter_rejects_non_alphabet() {
        for ch in ['1', ' ', '-', 'é', 'ß'] {
            assert!(Letter::from_char(ch).is_none(), "{ch:?} accepted");
        }
        assert!(matches!(
            Letter::try_from('7'),
            Err(IndexError::InvalidConstraint(_))
        ));
    }

    #[test]
    fn letter_round_trips_through_char() {
        for letter in Letter::all() {
            assert_eq!(Letter::from_char(letter.to_char()), Some(letter));
        }
        assert_eq!(Letter::all().count(), ALPHABET_SIZE);
    }

    #[test]
    fn slot_bounds() {
        for position in 0..5 {
            assert_eq!(Slot::new(position).unwrap().index(), position as usize);
        }
        assert!(matches!(Slot::new(5), Err(IndexError::InvalidConstraint(_))));
        assert!(matches!(Slot::new(-1), Err(IndexError::InvalidConstraint(_))));
        assert!(Slot::new(i64::MAX).is_err());
    }

    #[test]
    fn from_index_matches_ordinals() {
        assert_eq!(Some(Letter::from_index(0)), Letter::from_char('a'));
        assert_eq!(Some(Letter::from_index(25)), Letter::from_char('z'));
        for (i, letter) in Letter::all().enumerate() {
            assert_eq!(Letter::from_index(i), letter);
        }
        for (i, slot) in Slot::all().enumerate() {
            assert_eq!(Slot::from_index(i), slot);
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "index < ALPHABET_SIZE")]
    fn letter_from_index_out_of_range() {
        let _ = Letter::from_index(ALPHABET_SIZE);
    }

    #[test]
    fn letter_serializes_as_char() {
        let letter = Letter::from_char('k').unwrap();
        assert_eq!(serde_json::to_string(&letter).unwrap(), "\"k\"");
    }
}

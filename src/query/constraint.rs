//! Constraints and two-sided queries
//!
//! A constraint pins a letter to a slot or to "anywhere". A query holds the
//! constraints that must hold and those that must not.

use crate::core::{Letter, Slot, Word};
use crate::error::{IndexError, Result};
use std::fmt;
use std::str::FromStr;

/// Where a constrained letter sits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    /// A concrete slot
    At(Slot),
    /// Any of the five slots
    Any,
}

/// A `(letter, position)` pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Constraint {
    letter: Letter,
    position: Position,
}

impl Constraint {
    #[must_use]
    pub const fn new(letter: Letter, position: Position) -> Self {
        Self { letter, position }
    }

    /// Letter `ch` at the 0-indexed `position`
    ///
    /// # Errors
    /// Returns `InvalidConstraint` for a character outside `a..=z` or a
    /// position outside `0..5`.
    ///
    /// # Examples
    /// ```
    /// use wordle_index::query::Constraint;
    ///
    /// assert!(Constraint::at('a', 1).is_ok());
    /// assert!(Constraint::at('a', 5).is_err());
    /// assert!(Constraint::at('a', -1).is_err());
    /// ```
    pub fn at(ch: char, position: i64) -> Result<Self> {
        Ok(Self::new(Letter::try_from(ch)?, Position::At(Slot::new(position)?)))
    }

    /// Letter `ch` in any slot
    ///
    /// # Errors
    /// Returns `InvalidConstraint` for a character outside `a..=z`.
    pub fn anywhere(ch: char) -> Result<Self> {
        Ok(Self::new(Letter::try_from(ch)?, Position::Any))
    }

    #[inline]
    #[must_use]
    pub const fn letter(&self) -> Letter {
        self.letter
    }

    #[inline]
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Check the constraint against a single word by inspection
    #[must_use]
    pub fn is_satisfied_by(&self, word: &Word) -> bool {
        match self.position {
            Position::At(slot) => word.letter_at(slot.index()) == self.letter,
            Position::Any => word.contains(self.letter),
        }
    }
}

/// Parses the compact token form: `a` (any slot) or `a3` (slot 3)
impl FromStr for Constraint {
    type Err = IndexError;

    fn from_str(token: &str) -> Result<Self> {
        let mut chars = token.chars();
        let ch = chars
            .next()
            .ok_or_else(|| IndexError::invalid_constraint("empty constraint token"))?;
        let rest = chars.as_str();

        if rest.is_empty() {
            return Self::anywhere(ch);
        }

        let position: i64 = rest.parse().map_err(|_| {
            IndexError::invalid_constraint(format!("'{token}': expected a letter and a slot 0-4"))
        })?;
        Self::at(ch, position)
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Position::At(slot) => write!(f, "{}{slot}", self.letter),
            Position::Any => write!(f, "{}", self.letter),
        }
    }
}

/// Parse a comma- or whitespace-separated list of constraint tokens
///
/// # Errors
/// Returns `InvalidConstraint` on the first malformed token.
///
/// # Examples
/// ```
/// use wordle_index::query::parse_constraints;
///
/// let constraints = parse_constraints("a1, n3 o").unwrap();
/// assert_eq!(constraints.len(), 3);
/// assert!(parse_constraints("a9").is_err());
/// ```
pub fn parse_constraints(input: &str) -> Result<Vec<Constraint>> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(str::parse)
        .collect()
}

/// A two-sided constraint set
///
/// Words must satisfy every `present` constraint and none of the `absent`
/// ones. Contradictions are allowed and simply match nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    present: Vec<Constraint>,
    absent: Vec<Constraint>,
}

impl Query {
    /// An empty query, matching the whole corpus
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn from_parts(present: Vec<Constraint>, absent: Vec<Constraint>) -> Self {
        Self { present, absent }
    }

    /// Add a constraint that must hold
    #[must_use]
    pub fn require(mut self, constraint: Constraint) -> Self {
        self.present.push(constraint);
        self
    }

    /// Add a constraint that must not hold
    #[must_use]
    pub fn exclude(mut self, constraint: Constraint) -> Self {
        self.absent.push(constraint);
        self
    }

    #[must_use]
    pub fn present(&self) -> &[Constraint] {
        &self.present
    }

    #[must_use]
    pub fn absent(&self) -> &[Constraint] {
        &self.absent
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.present.is_empty() && self.absent.is_empty()
    }

    /// Check a single word against the query by inspection
    ///
    /// This is the scan-based definition the index evaluation must agree with.
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        self.present.iter().all(|c| c.is_satisfied_by(word))
            && !self.absent.iter().any(|c| c.is_satisfied_by(word))
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let join = |constraints: &[Constraint]| {
            constraints
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",")
        };
        write!(
            f,
            "present=[{}] absent=[{}]",
            join(&self.present),
            join(&self.absent)
        )
    }
}

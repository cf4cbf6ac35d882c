//! Query evaluation against the positional index

use super::constraint::{Constraint, Position, Query};
use crate::core::Word;
use crate::index::{PositionalIndex, WordId, sorted};
use std::borrow::Cow;
use tracing::debug;

/// Evaluates queries against a shared, read-only index
///
/// Holds nothing but a borrow of the index, so any number of engines may
/// evaluate concurrently.
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine<'a> {
    index: &'a PositionalIndex,
}

impl<'a> QueryEngine<'a> {
    #[must_use]
    pub const fn new(index: &'a PositionalIndex) -> Self {
        Self { index }
    }

    #[must_use]
    pub const fn index(&self) -> &'a PositionalIndex {
        self.index
    }

    /// Ids of the words satisfying `query`, ascending
    ///
    /// Present constraints are intersected (starting from the whole corpus
    /// when there are none), then the union of absent constraints is
    /// subtracted.
    ///
    /// # Examples
    /// ```
    /// use wordle_index::index::PositionalIndex;
    /// use wordle_index::query::{Constraint, Query, QueryEngine};
    ///
    /// let index = PositionalIndex::build(["table", "tiles", "panic", "manic"]);
    /// let query = Query::new()
    ///     .require(Constraint::at('a', 1).unwrap())
    ///     .require(Constraint::at('n', 2).unwrap());
    ///
    /// assert_eq!(QueryEngine::new(&index).evaluate(&query), vec![2, 3]);
    /// ```
    #[must_use]
    pub fn evaluate(&self, query: &Query) -> Vec<WordId> {
        let matched = self.evaluate_present(query.present());
        let result = if query.absent().is_empty() {
            matched
        } else {
            let excluded = self.evaluate_absent(query.absent());
            sorted::difference(&matched, &excluded)
        };

        debug!(%query, matches = result.len(), "evaluated query");
        result
    }

    /// Words satisfying `query`, in ascending id order
    #[must_use]
    pub fn execute(&self, query: &Query) -> Vec<&'a Word> {
        self.index.resolve(&self.evaluate(query))
    }

    /// Number of words satisfying `query`
    #[must_use]
    pub fn count(&self, query: &Query) -> usize {
        self.evaluate(query).len()
    }

    /// Posting list of a single constraint
    #[must_use]
    pub fn posting(&self, constraint: &Constraint) -> Cow<'a, [WordId]> {
        match constraint.position() {
            Position::At(slot) => Cow::Borrowed(self.index.posting(constraint.letter(), slot)),
            Position::Any => Cow::Owned(self.index.letter_posting(constraint.letter())),
        }
    }

    fn evaluate_present(&self, present: &[Constraint]) -> Vec<WordId> {
        if present.is_empty() {
            return self.index.universe();
        }

        // Every posting is a subset of the universe, so intersecting the
        // postings alone gives the same result without materialising it.
        // Smallest first keeps intermediate results short.
        let mut postings: Vec<Cow<'a, [WordId]>> =
            present.iter().map(|c| self.posting(c)).collect();
        postings.sort_by_key(|posting| posting.len());

        let mut lists = postings.into_iter();
        let first = lists.next().map(Cow::into_owned).unwrap_or_default();
        lists.fold(first, |acc, posting| {
            if acc.is_empty() {
                acc
            } else {
                sorted::intersect(&acc, &posting)
            }
        })
    }

    fn evaluate_absent(&self, absent: &[Constraint]) -> Vec<WordId> {
        let postings: Vec<Cow<'a, [WordId]>> = absent.iter().map(|c| self.posting(c)).collect();
        sorted::union_all(postings.iter().map(|posting| &**posting))
    }
}

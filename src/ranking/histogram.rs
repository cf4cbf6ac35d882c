//! Letter histogram over a result set
//!
//! A diagnostic view, separate from the ranking score: how often each letter
//! occurs anywhere in the matched words, leaving out letters the query
//! already pins down.

use crate::core::{Letter, Word};
use crate::query::Constraint;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;

/// Occurrences of one letter across a result set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LetterCount {
    pub letter: Letter,
    pub count: usize,
}

/// Count letters across `words`, skipping letters named by `pinned`
///
/// Entries are sorted by descending count, then alphabetically.
#[must_use]
pub fn letter_histogram(words: &[&Word], pinned: &[Constraint]) -> Vec<LetterCount> {
    let ignored: FxHashSet<Letter> = pinned.iter().map(Constraint::letter).collect();

    let mut counts: FxHashMap<Letter, usize> = FxHashMap::default();
    for word in words {
        for &letter in word.letters() {
            *counts.entry(letter).or_insert(0) += 1;
        }
    }

    let mut histogram: Vec<LetterCount> = counts
        .into_iter()
        .filter(|(letter, _)| !ignored.contains(letter))
        .map(|(letter, count)| LetterCount { letter, count })
        .collect();

    histogram.sort_by(|a, b| b.count.cmp(&a.count).then(a.letter.cmp(&b.letter)));
    histogram
}

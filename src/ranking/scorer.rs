//! Positional rarity ranking
//!
//! Scores each word by how common its letters are, slot by slot, within the
//! result set being ranked. Lower scores come first: a low score means the
//! word is built from locally rare letter/slot combinations.

use crate::core::{ALPHABET_SIZE, Letter, WORD_LENGTH, Word};
use serde::Serialize;

/// Per-slot letter counts over a set of words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [[u32; ALPHABET_SIZE]; WORD_LENGTH],
}

impl FrequencyTable {
    /// Count letters per slot across `words`
    #[must_use]
    pub fn from_words<'w, I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'w Word>,
    {
        let mut counts = [[0u32; ALPHABET_SIZE]; WORD_LENGTH];
        for word in words {
            for (slot, letter) in word.letters().iter().enumerate() {
                counts[slot][letter.index()] += 1;
            }
        }
        Self { counts }
    }

    /// Occurrences of `letter` at `slot`
    ///
    /// # Panics
    /// Panics if slot >= 5
    #[inline]
    #[must_use]
    pub const fn count(&self, slot: usize, letter: Letter) -> u32 {
        self.counts[slot][letter.index()]
    }

    /// Sum of the slot frequencies of every letter of `word`
    #[must_use]
    pub fn score(&self, word: &Word) -> u32 {
        word.letters()
            .iter()
            .enumerate()
            .map(|(slot, &letter)| self.count(slot, letter))
            .sum()
    }
}

/// A word paired with its ranking score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoredWord<'a> {
    #[serde(serialize_with = "serialize_word")]
    pub word: &'a Word,
    pub score: u32,
}

fn serialize_word<S: serde::Serializer>(word: &&Word, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(word.text())
}

/// Order `words` by ascending score
///
/// Frequencies are taken from `words` alone, not from the whole corpus.
/// Equal scores are ordered by the word text, so the result is deterministic.
///
/// # Examples
/// ```
/// use wordle_index::core::Word;
/// use wordle_index::ranking::rank;
///
/// let words: Vec<Word> = ["table", "tiles", "panic", "manic"]
///     .into_iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let refs: Vec<&Word> = words.iter().collect();
///
/// let ranked = rank(&refs);
/// assert_eq!(ranked[0].word.text(), "tiles");
/// assert_eq!(ranked[0].score, 6);
/// ```
#[must_use]
pub fn rank<'a>(words: &[&'a Word]) -> Vec<ScoredWord<'a>> {
    let table = FrequencyTable::from_words(words.iter().copied());

    let mut scored: Vec<ScoredWord<'a>> = words
        .iter()
        .map(|&word| ScoredWord {
            word,
            score: table.score(word),
        })
        .collect();

    scored.sort_by(|a, b| {
        a.score
            .cmp(&b.score)
            .then_with(|| a.word.text().cmp(b.word.text()))
    });
    scored
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    fn ranked_texts<'a>(ranked: &'a [ScoredWord<'_>]) -> Vec<&'a str> {
        ranked.iter().map(|s| s.word.text()).collect()
    }

    #[test]
    fn frequency_table_counts_per_slot() {
        let owned = words(&["table", "tiles", "panic", "manic"]);
        let table = FrequencyTable::from_words(&owned);
        let l = |ch| Letter::from_char(ch).unwrap();

        assert_eq!(table.count(0, l('t')), 2);
        assert_eq!(table.count(1, l('a')), 3);
        assert_eq!(table.count(2, l('n')), 2);
        assert_eq!(table.count(3, l('i')), 2);
        assert_eq!(table.count(4, l('c')), 2);
        assert_eq!(table.count(0, l('a')), 0);
    }

    #[test]
    fn scores_sum_slot_frequencies() {
        let owned = words(&["table", "tiles", "panic", "manic"]);
        let table = FrequencyTable::from_words(&owned);
        let scores: Vec<u32> = owned.iter().map(|w| table.score(w)).collect();
        assert_eq!(scores, [8, 6, 10, 10]);
    }

    #[test]
    fn rank_orders_by_ascending_score() {
        let owned = words(&["table", "tiles", "panic", "manic"]);
        let refs: Vec<&Word> = owned.iter().collect();
        let ranked = rank(&refs);

        assert_eq!(ranked_texts(&ranked), ["tiles", "table", "manic", "panic"]);
        let scores: Vec<u32> = ranked.iter().map(|s| s.score).collect();
        assert_eq!(scores, [6, 8, 10, 10]);
    }

    #[test]
    fn rank_ties_break_on_text() {
        let owned = words(&["zebra", "crane", "light"]);
        let refs: Vec<&Word> = owned.iter().collect();
        // Every letter/slot pair is unique, so all three score 5
        let ranked = rank(&refs);
        assert_eq!(ranked_texts(&ranked), ["crane", "light", "zebra"]);
        assert!(ranked.iter().all(|s| s.score == 5));
    }

    #[test]
    fn rank_is_independent_of_input_order() {
        let owned = words(&["table", "tiles", "panic", "manic", "crane", "slate"]);
        let forward: Vec<&Word> = owned.iter().collect();
        let backward: Vec<&Word> = owned.iter().rev().collect();
        assert_eq!(rank(&forward), rank(&backward));
    }

    #[test]
    fn rank_empty_and_single() {
        assert!(rank(&[]).is_empty());
        let only = Word::new("crane").unwrap();
        let ranked = rank(&[&only]);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].score, 5);
    }

    #[test]
    fn scored_word_serializes_text() {
        let word = Word::new("crane").unwrap();
        let scored = ScoredWord {
            word: &word,
            score: 5,
        };
        assert_eq!(
            serde_json::to_string(&scored).unwrap(),
            r#"{"word":"crane","score":5}"#
        );
    }
}

//! Positional inverted index over the corpus
//!
//! Maps every `(letter, slot)` pair to the ascending list of word ids that
//! carry that letter in that slot. Built once, then only read.

use super::{WordId, sorted};
use crate::core::{ALPHABET_SIZE, Letter, Slot, WORD_LENGTH, Word};
use std::io;
use tracing::{debug, info};

const TABLE_SIZE: usize = ALPHABET_SIZE * WORD_LENGTH;

#[inline]
const fn table_index(letter: Letter, slot: Slot) -> usize {
    letter.index() * WORD_LENGTH + slot.index()
}

/// Immutable corpus plus its `(letter, slot)` posting table
///
/// Word ids are dense and assigned in ingestion order, so id `n` is the
/// `n`-th accepted line of the source.
#[derive(Debug, Clone)]
pub struct PositionalIndex {
    words: Vec<Word>,
    postings: Vec<Vec<WordId>>,
}

impl PositionalIndex {
    /// Build the index from candidate lines
    ///
    /// A line becomes a corpus word only if, once trimmed, it is five
    /// distinct letters `a..=z` (any case). Every other line is dropped
    /// without error.
    ///
    /// # Examples
    /// ```
    /// use wordle_index::index::PositionalIndex;
    ///
    /// let index = PositionalIndex::build(["ABCDE", "ABCDA", "toolong"]);
    /// assert_eq!(index.len(), 1);
    /// assert_eq!(index.word(0).unwrap().text(), "abcde");
    /// ```
    pub fn build<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = Builder::new();
        for line in lines {
            builder.push_line(line.as_ref());
        }
        builder.finish()
    }

    /// Build the index from a fallible line source
    ///
    /// # Errors
    /// Returns the first I/O error produced by the source; nothing is
    /// published in that case.
    pub fn try_build<I, S>(lines: I) -> io::Result<Self>
    where
        I: IntoIterator<Item = io::Result<S>>,
        S: AsRef<str>,
    {
        let mut builder = Builder::new();
        for line in lines {
            builder.push_line(line?.as_ref());
        }
        Ok(builder.finish())
    }

    /// Build the index from a fallible source of raw byte lines
    ///
    /// A line that is not valid UTF-8 is dropped like any other malformed
    /// line; only an I/O error from the source aborts the build.
    ///
    /// # Errors
    /// Returns the first I/O error produced by the source.
    pub fn try_build_bytes<I, B>(lines: I) -> io::Result<Self>
    where
        I: IntoIterator<Item = io::Result<B>>,
        B: AsRef<[u8]>,
    {
        let mut builder = Builder::new();
        for line in lines {
            builder.push_bytes(line?.as_ref());
        }
        Ok(builder.finish())
    }

    /// Number of words in the corpus
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All corpus words, indexed by id
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn word(&self, id: WordId) -> Option<&Word> {
        self.words.get(id as usize)
    }

    /// Ids of words with `letter` at `slot`
    #[inline]
    #[must_use]
    pub fn posting(&self, letter: Letter, slot: Slot) -> &[WordId] {
        &self.postings[table_index(letter, slot)]
    }

    /// Ids of words containing `letter` in any slot
    #[must_use]
    pub fn letter_posting(&self, letter: Letter) -> Vec<WordId> {
        sorted::union_all(Slot::all().map(|slot| self.posting(letter, slot)))
    }

    /// Every id in the corpus exactly once: the literal range `0..len`
    #[must_use]
    pub fn universe(&self) -> Vec<WordId> {
        (0..self.words.len() as WordId).collect()
    }

    /// Map ids back to their words
    ///
    /// Ids outside the corpus are skipped.
    #[must_use]
    pub fn resolve(&self, ids: &[WordId]) -> Vec<&Word> {
        ids.iter().filter_map(|&id| self.word(id)).collect()
    }
}

/// Accumulates words and postings until the index is published
struct Builder {
    words: Vec<Word>,
    postings: Vec<Vec<WordId>>,
    rejected: usize,
}

impl Builder {
    fn new() -> Self {
        Self {
            words: Vec::new(),
            postings: vec![Vec::new(); TABLE_SIZE],
            rejected: 0,
        }
    }

    fn push_line(&mut self, line: &str) {
        match Word::new(line.trim()) {
            Ok(word) => self.push_word(word),
            Err(_) => self.rejected += 1,
        }
    }

    fn push_bytes(&mut self, line: &[u8]) {
        match std::str::from_utf8(line) {
            Ok(text) => self.push_line(text),
            Err(_) => self.rejected += 1,
        }
    }

    fn push_word(&mut self, word: Word) {
        // Ids only grow and a word holds each letter once, so appending keeps
        // every posting list strictly ascending without a sort pass
        let id = self.words.len() as WordId;
        for (slot, &letter) in Slot::all().zip(word.letters()) {
            self.postings[table_index(letter, slot)].push(id);
        }
        self.words.push(word);
    }

    fn finish(self) -> PositionalIndex {
        info!(
            accepted = self.words.len(),
            rejected = self.rejected,
            "built positional index"
        );
        debug!(
            empty_postings = self.postings.iter().filter(|p| p.is_empty()).count(),
            "posting table populated"
        );

        PositionalIndex {
            words: self.words,
            postings: self.postings,
        }
    }
}

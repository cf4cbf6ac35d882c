//! Core domain types for the word index
//!
//! Letters, slots and words are validated on construction, so the index and
//! query layers can rely on their invariants without re-checking.

mod letter;
mod word;

pub use letter::{ALPHABET_SIZE, Letter, Slot, WORD_LENGTH};
pub use word::Word;

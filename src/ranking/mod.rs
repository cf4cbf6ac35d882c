//! Ordering and summarising result sets
//!
//! Both views are computed from the result set alone, never from the whole
//! corpus.

mod histogram;
mod scorer;

pub use histogram::{LetterCount, letter_histogram};
pub use scorer::{FrequencyTable, ScoredWord, rank};

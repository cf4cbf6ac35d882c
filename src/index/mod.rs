//! Positional inverted index and the posting-list set algebra it relies on

mod positional;
pub mod sorted;

pub use positional::PositionalIndex;

/// Dense identifier of a corpus word, assigned in ingestion order
pub type WordId = u32;

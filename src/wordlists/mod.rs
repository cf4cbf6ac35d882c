//! Corpus sources
//!
//! The index consumes plain lines; this module supplies them from the
//! embedded list, a file, or any buffered reader.

mod embedded;
pub mod loader;

pub use embedded::{EMBEDDED, EMBEDDED_COUNT};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::index::PositionalIndex;

    #[test]
    fn embedded_count_matches_const() {
        assert_eq!(EMBEDDED.len(), EMBEDDED_COUNT);
    }

    #[test]
    fn embedded_lines_are_lowercase_ascii() {
        for &line in EMBEDDED {
            assert!(
                line.chars().all(|c| c.is_ascii_lowercase()),
                "Line '{line}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_corpus_is_a_strict_subset() {
        let index = PositionalIndex::build(EMBEDDED);
        assert!(!index.is_empty());
        // The raw list carries words with repeated letters that never enter the corpus
        assert!(index.len() < EMBEDDED_COUNT);
        assert!(index.words().iter().all(|w| Word::new(w.text()).is_ok()));
    }

    #[test]
    fn embedded_corpus_contains_common_words() {
        let index = PositionalIndex::build(EMBEDDED);
        for expected in ["crane", "slate", "table", "tiles", "panic", "manic"] {
            assert!(
                index.words().iter().any(|w| w.text() == expected),
                "'{expected}' missing from corpus"
            );
        }
        assert!(!index.words().iter().any(|w| w.text() == "speed"));
    }

    #[test]
    fn expected_counts() {
        assert_eq!(EMBEDDED_COUNT, 550, "Expected 550 raw lines");
        assert_eq!(PositionalIndex::build(EMBEDDED).len(), 423, "Expected 423 corpus words");
    }
}

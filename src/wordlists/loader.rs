//! Corpus loading utilities
//!
//! Turns a line source into a published index. Malformed lines, including
//! lines that are not valid UTF-8, are dropped by the index builder; only a
//! failure to read the source is an error.

use super::EMBEDDED;
use crate::error::{IndexError, Result};
use crate::index::PositionalIndex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::info;

/// Build the index from the embedded word list
#[must_use]
pub fn load_embedded() -> PositionalIndex {
    PositionalIndex::build(EMBEDDED)
}

/// Build the index from a word-list file, one candidate per line
///
/// # Errors
///
/// Returns `CorpusUnavailable` if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use wordle_index::wordlists::loader::load_from_file;
///
/// let index = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", index.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<PositionalIndex> {
    let path = path.as_ref();
    let origin = path.display().to_string();
    info!(path = %origin, "loading corpus");

    let file = File::open(path).map_err(|source| IndexError::CorpusUnavailable {
        origin: origin.clone(),
        source,
    })?;
    load_named(BufReader::new(file), origin)
}

/// Build the index from any buffered reader
///
/// # Errors
///
/// Returns `CorpusUnavailable` on the first read error.
pub fn load_from_reader<R: BufRead>(reader: R) -> Result<PositionalIndex> {
    load_named(reader, "reader".to_string())
}

fn load_named<R: BufRead>(reader: R, origin: String) -> Result<PositionalIndex> {
    PositionalIndex::try_build_bytes(reader.split(b'\n'))
        .map_err(|source| IndexError::CorpusUnavailable { origin, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor, Read};

    #[test]
    fn load_from_reader_filters_lines() {
        let source = Cursor::new("ABCDE\nABCDA\n\ncalm\r\nslate\r\n");
        let index = load_from_reader(source).unwrap();
        let texts: Vec<&str> = index.words().iter().map(|w| w.text()).collect();
        assert_eq!(texts, ["abcde", "slate"]);
    }

    #[test]
    fn missing_file_is_corpus_unavailable() {
        let err = load_from_file("definitely/not/a/word/list.txt").unwrap_err();
        match err {
            IndexError::CorpusUnavailable { origin, source } => {
                assert!(origin.ends_with("list.txt"));
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("disk on fire"))
        }
    }

    #[test]
    fn read_failure_is_corpus_unavailable() {
        let err = load_from_reader(BufReader::new(FailingReader)).unwrap_err();
        assert!(matches!(err, IndexError::CorpusUnavailable { .. }));
        assert!(!err.is_caller_error());
    }

    #[test]
    fn invalid_utf8_line_is_dropped() {
        let source = Cursor::new(b"crane\ncaf\xe9s\nslate\n".to_vec());
        let index = load_from_reader(source).unwrap();
        let texts: Vec<&str> = index.words().iter().map(|w| w.text()).collect();
        assert_eq!(texts, ["crane", "slate"]);
    }

    #[test]
    fn load_embedded_builds_full_corpus() {
        let index = load_embedded();
        assert_eq!(index.len(), PositionalIndex::build(EMBEDDED).len());
    }
}

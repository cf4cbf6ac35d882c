use std::io;
use thiserror::Error;

/// Errors surfaced by the index and its collaborators
#[derive(Error, Debug)]
pub enum IndexError {
    /// The corpus source could not be read; startup cannot continue
    #[error("corpus unavailable ({origin}): {source}")]
    CorpusUnavailable {
        origin: String,
        #[source]
        source: io::Error,
    },

    /// A constraint names a letter outside `a..=z` or a slot outside `0..5`
    #[error("invalid constraint: {0}")]
    InvalidConstraint(String),

    /// A word that was required to be valid is not five distinct letters
    #[error("invalid word: {0}")]
    InvalidWord(String),
}

/// Result type alias for index operations
pub type Result<T> = std::result::Result<T, IndexError>;

impl IndexError {
    pub(crate) fn invalid_constraint(message: impl Into<String>) -> Self {
        Self::InvalidConstraint(message.into())
    }

    /// Check if this error was caused by caller input rather than the environment
    #[must_use]
    pub const fn is_caller_error(&self) -> bool {
        matches!(self, Self::InvalidConstraint(_) | Self::InvalidWord(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = IndexError::invalid_constraint("slot 5 is outside 0..5");
        assert_eq!(err.to_string(), "invalid constraint: slot 5 is outside 0..5");

        let err = IndexError::CorpusUnavailable {
            origin: "words.txt".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(err.to_string(), "corpus unavailable (words.txt): missing");
    }

    #[test]
    fn caller_errors_are_classified() {
        assert!(IndexError::InvalidWord("speed".into()).is_caller_error());
        assert!(IndexError::invalid_constraint("x").is_caller_error());

        let io_err = IndexError::CorpusUnavailable {
            origin: "stdin".to_string(),
            source: io::Error::other("boom"),
        };
        assert!(!io_err.is_caller_error());
    }
}

use std::io::Error as IoError;

use displaydoc::Display;
use ndarray::ShapeError;
use thiserror::Error;

/// The potential errors of loading a corpus.
#[derive(Debug, Display, Error)]
pub enum CorpusError {
    /// Failed to read the corpus: {0}
    NotFound(#[source] IoError),
    /// The batch size must be at least one
    BatchSize,
    /// The corpus has {tokens} tokens which is less than the batch size {batch_size}
    TooFewTokens { tokens: usize, batch_size: usize },
    /// The window length must be at least one
    Bptt,
    /// The token `{0}` is missing from the vocabulary
    Lookup(String),
    /// The corpus changed between reads, expected {expected} tokens but got {actual}
    TokenCount { expected: usize, actual: usize },
    /// Failed to reshape the token ids: {0}
    Shape(#[from] ShapeError),
}

/// The coarse categories of [`CorpusError`]s.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum ErrorKind {
    /// not found
    NotFound,
    /// invalid argument
    InvalidArgument,
    /// lookup error
    LookupError,
}

impl CorpusError {
    /// Gets the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::BatchSize | Self::TooFewTokens { .. } | Self::Bptt | Self::Shape(_) => {
                ErrorKind::InvalidArgument
            }
            Self::Lookup(_) | Self::TokenCount { .. } => ErrorKind::LookupError,
        }
    }
}

impl From<IoError> for CorpusError {
    fn from(error: IoError) -> Self {
        Self::NotFound(error)
    }
}

#[cfg(test)]
mod tests {
    use std::io::ErrorKind as IoErrorKind;

    use super::*;

    #[test]
    fn test_kind() {
        let io = IoError::new(IoErrorKind::PermissionDenied, "denied");
        assert_eq!(CorpusError::from(io).kind(), ErrorKind::NotFound);
        assert_eq!(CorpusError::BatchSize.kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            CorpusError::TooFewTokens {
                tokens: 8,
                batch_size: 9,
            }
            .kind(),
            ErrorKind::InvalidArgument,
        );
        assert_eq!(CorpusError::Bptt.kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            CorpusError::Lookup("cat".into()).kind(),
            ErrorKind::LookupError,
        );
        assert_eq!(
            CorpusError::TokenCount {
                expected: 4,
                actual: 5,
            }
            .kind(),
            ErrorKind::LookupError,
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            CorpusError::TooFewTokens {
                tokens: 8,
                batch_size: 9,
            }
            .to_string(),
            "The corpus has 8 tokens which is less than the batch size 9",
        );
        assert_eq!(
            CorpusError::Lookup("cat".into()).to_string(),
            "The token `cat` is missing from the vocabulary",
        );
    }
}

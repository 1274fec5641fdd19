//! Error types for the genreblend library

use std::io;

/// Library error type for score generation and MIDI serialization
#[derive(Debug, thiserror::Error)]
pub enum BlendError {
    /// Score construction error, e.g. an unknown chord name
    #[error("score error: {0}")]
    ScoreError(String),

    /// MIDI encoding invariant violation
    #[error("encoding error: {0}")]
    EncodingError(String),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(String),
}

impl From<io::Error> for BlendError {
    fn from(error: io::Error) -> Self {
        Self::IoError(error.to_string())
    }
}

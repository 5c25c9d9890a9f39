extern crate thiserror;

use std::io;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error type.
#[derive(Debug, Error)]
pub enum Error {
    /// A dictionary line that is not `<lexeme> <lemma> <tags>`.
    #[error("Malformed line {line}: expected 3 fields, found {fields}: {content:?}")]
    MalformedLine {
        line: usize,
        fields: usize,
        content: String,
    },

    #[error("Unknown part of speech: {0:?} (expected one of: adj, noun, verb)")]
    UnknownPartOfSpeech(String),

    #[error("{0}")]
    Io(#[from] IoError),

    #[error("Serialization Error: {0}")]
    Serialization(String),
}

/// I/O errors.
#[derive(Debug, Error, PartialEq)]
pub enum IoError {
    #[error("File Error: {0}")]
    File(io::ErrorKind),

    #[error("Reader Error: {0}")]
    Reader(io::ErrorKind),

    #[error("Writer Error: {0}")]
    Writer(io::ErrorKind),
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        match error.io_error_kind() {
            Some(kind) => Error::Io(IoError::Writer(kind)),
            None => Error::Serialization(error.to_string()),
        }
    }
}

use std::{fmt, io};

use derive_more::{Display, Error, From, IsVariant};

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("stream did not contain valid UTF-8 at byte {offset}")]
pub struct InvalidUtf8Error {
    pub offset: u64,
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("unable to produce random characters from an empty alphabet")]
pub struct EmptyAlphabetError;

/// The error produced when reading characters from a byte stream.
#[derive(Debug, Display, From, Error, IsVariant)]
pub enum ReadError {
    IO(io::Error),
    InvalidUtf8(InvalidUtf8Error),
    Format(fmt::Error),
}

impl From<ReadError> for io::Error {
    fn from(value: ReadError) -> Self {
        match value {
            ReadError::IO(e) => e,
            ReadError::InvalidUtf8(e) => io::Error::new(io::ErrorKind::InvalidData, e),
            ReadError::Format(e) => io::Error::other(e),
        }
    }
}

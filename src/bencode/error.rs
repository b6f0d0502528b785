use thiserror::Error;

/// Errors produced while decoding a bencode token.
///
/// Every variant that refers to a position carries the offset of the first
/// byte of the token being decoded, not the byte that triggered the failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BencodeError {
    /// The input ended before the current token was complete.
    #[error("unexpected end of input in token at offset {offset}")]
    Overflow { offset: usize },

    /// The cursor is at the end of the input, so no value can start.
    #[error("no value at offset {offset}: input exhausted")]
    Empty { offset: usize },

    #[error("malformed number at offset {offset}: {reason}")]
    MalformedNumber { offset: usize, reason: &'static str },

    /// A byte string declared more payload than the input holds.
    #[error("byte string at offset {offset} declares {len} bytes but only {available} remain")]
    LengthOutOfBounds {
        offset: usize,
        len: usize,
        available: usize,
    },

    #[error("unknown value type byte {byte:#04x} at offset {offset}")]
    UnknownType { offset: usize, byte: u8 },

    #[error("nesting too deep: depth {depth}")]
    DepthExceeded { depth: usize },

    #[error("out of memory allocating {len} bytes")]
    OutOfMemory { len: usize },

    /// The caller-supplied start offset lies past the end of the input.
    #[error("start offset {offset} is past the end of a {len}-byte input")]
    InvalidOffset { offset: usize, len: usize },

    #[error("trailing data after value at offset {offset}")]
    TrailingData { offset: usize },
}

/// The category of a [`BencodeError`], without its positional details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Overflow,
    Empty,
    MalformedNumber,
    LengthOutOfBounds,
    UnknownType,
    DepthExceeded,
    OutOfMemory,
    InvalidOffset,
    TrailingData,
}

impl BencodeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BencodeError::Overflow { .. } => ErrorKind::Overflow,
            BencodeError::Empty { .. } => ErrorKind::Empty,
            BencodeError::MalformedNumber { .. } => ErrorKind::MalformedNumber,
            BencodeError::LengthOutOfBounds { .. } => ErrorKind::LengthOutOfBounds,
            BencodeError::UnknownType { .. } => ErrorKind::UnknownType,
            BencodeError::DepthExceeded { .. } => ErrorKind::DepthExceeded,
            BencodeError::OutOfMemory { .. } => ErrorKind::OutOfMemory,
            BencodeError::InvalidOffset { .. } => ErrorKind::InvalidOffset,
            BencodeError::TrailingData { .. } => ErrorKind::TrailingData,
        }
    }

    /// Returns the input offset the error refers to, if it has one.
    pub fn offset(&self) -> Option<usize> {
        match self {
            BencodeError::Overflow { offset }
            | BencodeError::Empty { offset }
            | BencodeError::MalformedNumber { offset, .. }
            | BencodeError::LengthOutOfBounds { offset, .. }
            | BencodeError::UnknownType { offset, .. }
            | BencodeError::InvalidOffset { offset, .. }
            | BencodeError::TrailingData { offset } => Some(*offset),
            BencodeError::DepthExceeded { .. } | BencodeError::OutOfMemory { .. } => None,
        }
    }
}

use bencode_types::ByteString;
use bencode_wire::WireError;

/// Errors that can occur while decoding a Bencode value.
///
/// Lexical problems inside a single token come from `bencode-wire` and
/// are wrapped in [`Wire`](Self::Wire); the rest are structural and raised
/// by the parser itself. Any error aborts the whole decode.
///
/// Error hierarchy:
///
/// ```text
///   DecodeError
///   ├── UnexpectedByte         ← byte that cannot start the expected token
///   ├── NestingTooDeep         ← more nested containers than max_depth
///   ├── DuplicateKey           ← repeated dictionary key (Reject policy)
///   ├── TrailingData           ← bytes after the value (slice input)
///   └── Wire(WireError)        ← from bencode-wire token reads
///       ├── UnexpectedEof
///       ├── InvalidLength
///       ├── InvalidInteger
///       ├── TruncatedContent
///       └── Io(std::io::Error)
/// ```
///
/// [`kind`](Self::kind) flattens the two levels for callers that only
/// want to branch on the category.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// A byte that cannot begin the token expected at this position.
    #[error("unexpected byte '{}' at offset {offset} while reading {context}", .byte.escape_ascii())]
    UnexpectedByte {
        byte: u8,
        offset: usize,
        context: &'static str,
    },

    /// Containers are nested deeper than the configured limit.
    #[error("nesting exceeds maximum depth {limit} at offset {offset}")]
    NestingTooDeep { limit: usize, offset: usize },

    /// A dictionary repeats a key and the decoder rejects duplicates.
    #[error("duplicate dictionary key {key:?} at offset {offset}")]
    DuplicateKey { key: ByteString, offset: usize },

    /// Input continues after a complete value.
    #[error("trailing data after value at offset {offset}")]
    TrailingData { offset: usize },

    #[error(transparent)]
    Wire(#[from] WireError),
}

/// Flat category of a [`DecodeError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeErrorKind {
    UnexpectedEof,
    InvalidLength,
    InvalidInteger,
    UnexpectedByte,
    TruncatedContent,
    NestingTooDeep,
    DuplicateKey,
    TrailingData,
    Io,
}

impl DecodeError {
    #[must_use]
    pub fn kind(&self) -> DecodeErrorKind {
        match self {
            Self::UnexpectedByte { .. } => DecodeErrorKind::UnexpectedByte,
            Self::NestingTooDeep { .. } => DecodeErrorKind::NestingTooDeep,
            Self::DuplicateKey { .. } => DecodeErrorKind::DuplicateKey,
            Self::TrailingData { .. } => DecodeErrorKind::TrailingData,
            Self::Wire(wire) => match wire {
                WireError::UnexpectedEof { .. } => DecodeErrorKind::UnexpectedEof,
                WireError::InvalidLength { .. } => DecodeErrorKind::InvalidLength,
                WireError::InvalidInteger { .. } => DecodeErrorKind::InvalidInteger,
                WireError::TruncatedContent { .. } => DecodeErrorKind::TruncatedContent,
                WireError::Io(_) => DecodeErrorKind::Io,
            },
        }
    }

    /// Byte offset (from the start of the input) the error refers to.
    ///
    /// `None` only for I/O failures of the underlying reader.
    #[must_use]
    pub fn offset(&self) -> Option<usize> {
        match self {
            Self::UnexpectedByte { offset, .. }
            | Self::NestingTooDeep { offset, .. }
            | Self::DuplicateKey { offset, .. }
            | Self::TrailingData { offset } => Some(*offset),
            Self::Wire(wire) => wire.offset(),
        }
    }
}

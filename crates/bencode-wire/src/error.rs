/// Lexical errors raised while reading Bencode tokens off the wire.
///
/// Every variant that can be tied to a position carries the byte offset
/// (from the start of the input) of the token that failed, so malformed
/// payloads can be located without re-parsing.
///
/// ```text
///   WireError
///   ├── UnexpectedEof      ← input ended before a token completed
///   ├── InvalidLength      ← bad `<len>` prefix on a byte string
///   ├── InvalidInteger     ← bad `i<decimal>e` body
///   ├── TruncatedContent   ← fewer content bytes than the prefix declared
///   └── Io(std::io::Error) ← from the underlying reader
/// ```
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// Input ended before a complete token could be read.
    #[error("unexpected end of input at offset {offset}")]
    UnexpectedEof { offset: usize },

    /// A byte string's length prefix is not a canonical non-negative decimal.
    #[error("invalid string length at offset {offset}: {reason}")]
    InvalidLength { offset: usize, reason: &'static str },

    /// An integer body is malformed or outside the 64-bit range.
    #[error("invalid integer at offset {offset}: {reason}")]
    InvalidInteger { offset: usize, reason: &'static str },

    /// A byte string declared more content than the input holds.
    #[error(
        "byte string at offset {offset} declares {declared} bytes but only {available} remain"
    )]
    TruncatedContent {
        offset: usize,
        declared: usize,
        available: usize,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl WireError {
    /// Byte offset the error refers to, if it has one.
    #[must_use]
    pub fn offset(&self) -> Option<usize> {
        match self {
            Self::UnexpectedEof { offset }
            | Self::InvalidLength { offset, .. }
            | Self::InvalidInteger { offset, .. }
            | Self::TruncatedContent { offset, .. } => Some(*offset),
            Self::Io(_) => None,
        }
    }
}

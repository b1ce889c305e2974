/// Grammar markers.
///
/// ```text
/// ┌──────────────┬────────────────────┬───────────────────┐
/// │ Token        │ Wire form          │ Example           │
/// ├──────────────┼────────────────────┼───────────────────┤
/// │ Byte string  │ <len>:<bytes>      │ 4:spam            │
/// │ Integer      │ i<decimal>e        │ i-42e             │
/// │ List         │ l<values>e         │ l4:spami42ee      │
/// │ Dictionary   │ d<key><value>...e  │ d3:bar4:spame     │
/// └──────────────┴────────────────────┴───────────────────┘
/// ```
pub const INTEGER_START: u8 = b'i';
pub const LIST_START: u8 = b'l';
pub const DICT_START: u8 = b'd';
pub const END: u8 = b'e';
pub const LENGTH_SEPARATOR: u8 = b':';
pub const MINUS: u8 = b'-';

/// The four self-delimiting token kinds of the grammar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    ByteString,
    Integer,
    List,
    Dict,
}

impl TokenKind {
    /// Classify a lookahead byte.
    ///
    /// Returns `None` for bytes that cannot start a value, including the
    /// container terminator `e`.
    #[must_use]
    pub fn from_lookahead(byte: u8) -> Option<Self> {
        match byte {
            b'0'..=b'9' => Some(Self::ByteString),
            INTEGER_START => Some(Self::Integer),
            LIST_START => Some(Self::List),
            DICT_START => Some(Self::Dict),
            _ => None,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::ByteString => "byte string",
            Self::Integer => "integer",
            Self::List => "list",
            Self::Dict => "dictionary",
        }
    }
}

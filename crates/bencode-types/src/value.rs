use std::collections::BTreeMap;
use std::fmt;

use crate::byte_string::ByteString;
use crate::error::TypeError;

/// A Bencode value.
///
/// ```text
/// ┌──────────┬──────────────────────────────┬──────────────────────┐
/// │ Variant  │ Rust type                    │ Wire form            │
/// ├──────────┼──────────────────────────────┼──────────────────────┤
/// │ Bytes    │ ByteString                   │ 4:spam               │
/// │ Integer  │ i64                          │ i-42e                │
/// │ Unsigned │ u64 (only above i64::MAX)    │ i9223372036854775808e│
/// │ List     │ Vec<Value>                   │ l...e                │
/// │ Dict     │ BTreeMap<ByteString, Value>  │ d...e                │
/// └──────────┴──────────────────────────────┴──────────────────────┘
/// ```
///
/// `Integer` and `Unsigned` are one wire kind. Equality between them is
/// numeric, so `Value::Integer(7) == Value::Unsigned(7)`; values built
/// through the `From` conversions and values produced by the decoder only
/// use `Unsigned` for magnitudes above `i64::MAX`.
///
/// Dictionary keys are unique and kept in byte order.
///
/// ```
/// use bencode_types::Value;
///
/// let v = Value::from(vec![Value::string("spam"), Value::from(42u8)]);
/// assert_eq!(v.as_list().map(Vec::len), Some(2));
/// assert_eq!(Value::from(7u64), Value::Integer(7));
/// ```
#[derive(Clone)]
pub enum Value {
    Bytes(ByteString),
    Integer(i64),
    Unsigned(u64),
    List(Vec<Value>),
    Dict(BTreeMap<ByteString, Value>),
}

/// Wire-level kind of a [`Value`]. Both integer variants are `Integer`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
    Bytes,
    Integer,
    List,
    Dict,
}

impl ValueKind {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Bytes => "byte string",
            Self::Integer => "integer",
            Self::List => "list",
            Self::Dict => "dictionary",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Value {
    /// Byte string holding the UTF-8 bytes of `s`.
    #[must_use]
    pub fn string(s: &str) -> Self {
        Self::Bytes(ByteString::from(s))
    }

    pub fn bytes(bytes: impl Into<ByteString>) -> Self {
        Self::Bytes(bytes.into())
    }

    /// Integer value, using `Unsigned` only when `value` exceeds `i64::MAX`.
    #[must_use]
    pub fn from_u64(value: u64) -> Self {
        i64::try_from(value).map_or(Self::Unsigned(value), Self::Integer)
    }

    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Bytes(_) => ValueKind::Bytes,
            Self::Integer(_) | Self::Unsigned(_) => ValueKind::Integer,
            Self::List(_) => ValueKind::List,
            Self::Dict(_) => ValueKind::Dict,
        }
    }

    /// The integer as `i64`, if it is an integer in signed range.
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match *self {
            Self::Integer(i) => Some(i),
            Self::Unsigned(u) => i64::try_from(u).ok(),
            _ => None,
        }
    }

    /// The integer as `u64`, if it is a non-negative integer.
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            Self::Integer(i) => u64::try_from(i).ok(),
            Self::Unsigned(u) => Some(u),
            _ => None,
        }
    }

    pub(crate) fn as_i128(&self) -> Option<i128> {
        match *self {
            Self::Integer(i) => Some(i128::from(i)),
            Self::Unsigned(u) => Some(i128::from(u)),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bytes(&self) -> Option<&ByteString> {
        match self {
            Self::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// The byte string as UTF-8, if it is a byte string holding valid UTF-8.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.as_bytes().and_then(ByteString::as_str)
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&Vec<Value>> {
        match self {
            Self::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Self::List(l) => Some(l),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_dict(&self) -> Option<&BTreeMap<ByteString, Value>> {
        match self {
            Self::Dict(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_dict_mut(&mut self) -> Option<&mut BTreeMap<ByteString, Value>> {
        match self {
            Self::Dict(d) => Some(d),
            _ => None,
        }
    }

    /// Consume the value and return its list.
    ///
    /// # Errors
    ///
    /// [`TypeError::UnexpectedKind`] if the value is not a list.
    pub fn into_list(self) -> Result<Vec<Value>, TypeError> {
        match self {
            Self::List(l) => Ok(l),
            other => Err(TypeError::UnexpectedKind {
                expected: ValueKind::List,
                found: other.kind(),
            }),
        }
    }

    /// Consume the value and return its dictionary.
    ///
    /// # Errors
    ///
    /// [`TypeError::UnexpectedKind`] if the value is not a dictionary.
    pub fn into_dict(self) -> Result<BTreeMap<ByteString, Value>, TypeError> {
        match self {
            Self::Dict(d) => Ok(d),
            other => Err(TypeError::UnexpectedKind {
                expected: ValueKind::Dict,
                found: other.kind(),
            }),
        }
    }

    /// Look up `key` if this value is a dictionary.
    #[must_use]
    pub fn get(&self, key: &[u8]) -> Option<&Value> {
        self.as_dict()?.get(key)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bytes(a), Self::Bytes(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Dict(a), Self::Dict(b)) => a == b,
            (a, b) => match (a.as_i128(), b.as_i128()) {
                (Some(x), Some(y)) => x == y,
                _ => false,
            },
        }
    }
}

impl Eq for Value {}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bytes(b) => fmt::Debug::fmt(b, f),
            Self::Integer(i) => fmt::Debug::fmt(i, f),
            Self::Unsigned(u) => write!(f, "{u}u64"),
            Self::List(l) => f.debug_list().entries(l).finish(),
            Self::Dict(d) => f.debug_map().entries(d).finish(),
        }
    }
}

//! Conversions between native Rust types and [`Value`].
//!
//! Into the model:
//!
//! ```text
//! ┌────────────────────────────────────┬─────────────────────────────┐
//! │ Native type                        │ Value                       │
//! ├────────────────────────────────────┼─────────────────────────────┤
//! │ i8 i16 i32 i64 isize               │ Integer                     │
//! │ u8 u16 u32 u64 usize               │ Integer, or Unsigned > MAX  │
//! │ &str String ByteString Bytes       │ Bytes                       │
//! │ Vec<T> &[T] [T; N]                 │ List                        │
//! │ BTreeMap<K, V> HashMap<K, V>       │ Dict (re-sorted by key)     │
//! └────────────────────────────────────┴─────────────────────────────┘
//! ```
//!
//! `Vec<u8>` is a list of integers like any other `Vec<T>`; wrap raw bytes
//! in [`ByteString`] to get a byte string. Types with no Bencode form
//! (floats, `bool`, `()`, `Option`) have no conversion, so passing one to
//! the encoder is a compile error.
//!
//! Out of the model, `TryFrom<&Value>` is implemented for every integer
//! width (range-checked), `String`, `&str`, `ByteString`, `Vec<Value>`
//! and `BTreeMap<ByteString, Value>`.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use bencode_wire::Integer;
use bytes::Bytes;

use crate::byte_string::ByteString;
use crate::error::TypeError;
use crate::value::{Value, ValueKind};

// ── Into Value ────────────────────────────────────────────────────────

macro_rules! from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for Value {
            fn from(v: $t) -> Self {
                Value::Integer(i64::from(v))
            }
        }
    )*};
}

macro_rules! from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for Value {
            fn from(v: $t) -> Self {
                Value::from_u64(u64::from(v))
            }
        }
    )*};
}

from_signed!(i8, i16, i32, i64);
from_unsigned!(u8, u16, u32, u64);

impl From<isize> for Value {
    #[allow(clippy::cast_possible_truncation)]
    fn from(v: isize) -> Self {
        Value::Integer(v as i64)
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Value::from_u64(v as u64)
    }
}

impl From<Integer> for Value {
    fn from(v: Integer) -> Self {
        match v {
            Integer::Signed(i) => Value::Integer(i),
            Integer::Unsigned(u) => Value::from_u64(u),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Bytes(ByteString::from(s))
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::string(s)
    }
}

impl From<ByteString> for Value {
    fn from(b: ByteString) -> Self {
        Value::Bytes(b)
    }
}

impl From<Bytes> for Value {
    fn from(b: Bytes) -> Self {
        Value::Bytes(ByteString::from(b))
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<Value>> From<&[T]> for Value {
    fn from(items: &[T]) -> Self {
        Value::List(items.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(items: [T; N]) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<ByteString>, V: Into<Value>> From<BTreeMap<K, V>> for Value {
    fn from(map: BTreeMap<K, V>) -> Self {
        Value::Dict(map.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K: Into<ByteString>, V: Into<Value>, S: BuildHasher> From<HashMap<K, V, S>> for Value {
    fn from(map: HashMap<K, V, S>) -> Self {
        Value::Dict(map.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::List(iter.into_iter().collect())
    }
}

// ── Out of Value ──────────────────────────────────────────────────────

fn unexpected(expected: ValueKind, found: &Value) -> TypeError {
    TypeError::UnexpectedKind {
        expected,
        found: found.kind(),
    }
}

macro_rules! try_into_integer {
    ($($t:ty),*) => {$(
        impl TryFrom<&Value> for $t {
            type Error = TypeError;

            fn try_from(value: &Value) -> Result<Self, Self::Error> {
                let wide = value
                    .as_i128()
                    .ok_or_else(|| unexpected(ValueKind::Integer, value))?;
                <$t>::try_from(wide).map_err(|_| TypeError::IntegerOutOfRange {
                    value: wide,
                    target: stringify!($t),
                })
            }
        }

        impl TryFrom<Value> for $t {
            type Error = TypeError;

            fn try_from(value: Value) -> Result<Self, Self::Error> {
                <$t>::try_from(&value)
            }
        }
    )*};
}

try_into_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl<'a> TryFrom<&'a Value> for &'a str {
    type Error = TypeError;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        let bytes = value
            .as_bytes()
            .ok_or_else(|| unexpected(ValueKind::Bytes, value))?;
        bytes.as_str().ok_or(TypeError::InvalidUtf8)
    }
}

impl TryFrom<&Value> for String {
    type Error = TypeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        <&str>::try_from(value).map(str::to_owned)
    }
}

impl TryFrom<&Value> for ByteString {
    type Error = TypeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value
            .as_bytes()
            .cloned()
            .ok_or_else(|| unexpected(ValueKind::Bytes, value))
    }
}

impl TryFrom<&Value> for Vec<Value> {
    type Error = TypeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value
            .as_list()
            .cloned()
            .ok_or_else(|| unexpected(ValueKind::List, value))
    }
}

impl TryFrom<&Value> for BTreeMap<ByteString, Value> {
    type Error = TypeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value
            .as_dict()
            .cloned()
            .ok_or_else(|| unexpected(ValueKind::Dict, value))
    }
}

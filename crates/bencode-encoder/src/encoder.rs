use std::io::Write;

use bencode_types::{ByteString, Value};
use bencode_wire::decimal::{self, MAX_INTEGER_LEN};
use bencode_wire::token::{DICT_START, END, INTEGER_START, LENGTH_SEPARATOR, LIST_START};
use tracing::{debug, trace};

use crate::error::EncodeError;

/// Canonical Bencode encoder with a reusable output buffer.
///
/// The encoder is a single depth-first walk over a [`Value`]; it never
/// backtracks and never mutates its input. Output is canonical:
///
/// ```text
/// ┌──────────────┬──────────────────────────────────────────────────┐
/// │ Value        │ Emitted bytes                                    │
/// ├──────────────┼──────────────────────────────────────────────────┤
/// │ Bytes        │ <byte length>:<raw bytes>                        │
/// │ Integer      │ i<decimal>e   (no leading zeros, "-" if negative)│
/// │ Unsigned     │ i<decimal>e                                      │
/// │ List         │ l<item><item>...e                                │
/// │ Dict         │ d<key><value>...e   keys in ascending byte order │
/// └──────────────┴──────────────────────────────────────────────────┘
/// ```
///
/// Dictionary keys are emitted in the map's iteration order. The map is a
/// `BTreeMap<ByteString, _>` ordered by raw bytes, so that order is the
/// sorted order; maps converted from `HashMap` are re-sorted on
/// conversion, never echoed in insertion order.
///
/// Reusing one `BencodeEncoder` across calls keeps its allocation:
///
/// ```rust
/// use bencode_encoder::BencodeEncoder;
/// use bencode_types::Value;
///
/// let mut encoder = BencodeEncoder::new();
/// assert_eq!(encoder.encode(&Value::from(42)), b"i42e");
/// assert_eq!(encoder.encode(&Value::string("spam")), b"4:spam");
/// ```
#[derive(Debug, Default)]
pub struct BencodeEncoder {
    buf: Vec<u8>,
}

impl BencodeEncoder {
    #[must_use]
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Encode `value`, replacing the previous contents of the buffer.
    pub fn encode(&mut self, value: &Value) -> &[u8] {
        self.buf.clear();
        self.buf.reserve(encoded_len(value));
        emit_value(&mut self.buf, value);
        debug!(bytes = self.buf.len(), "encoded bencode value");
        &self.buf
    }

    /// Encode `value` and write it to `writer`.
    ///
    /// Returns the number of bytes written.
    ///
    /// # Errors
    ///
    /// [`EncodeError::Io`] if the writer fails.
    pub fn write_to<W: Write>(&mut self, value: &Value, mut writer: W) -> Result<usize, EncodeError> {
        let bytes = self.encode(value);
        writer.write_all(bytes)?;
        debug!(bytes = bytes.len(), "wrote bencode value");
        Ok(bytes.len())
    }
}

/// Encode `value` into a fresh buffer.
///
/// ```rust
/// use std::collections::HashMap;
/// use bencode_types::Value;
///
/// let mut map = HashMap::new();
/// map.insert("b", "x");
/// map.insert("a", "z");
/// assert_eq!(bencode_encoder::encode(&Value::from(map)), b"d1:a1:z1:b1:xe");
/// ```
#[must_use]
pub fn encode(value: &Value) -> Vec<u8> {
    let mut out = Vec::with_capacity(encoded_len(value));
    emit_value(&mut out, value);
    debug!(bytes = out.len(), "encoded bencode value");
    out
}

/// Append the encoding of `value` to `out`.
pub fn encode_into(value: &Value, out: &mut Vec<u8>) {
    let start = out.len();
    emit_value(out, value);
    debug!(bytes = out.len() - start, "encoded bencode value");
}

/// Convert a native value into the model and encode it.
///
/// ```rust
/// assert_eq!(bencode_encoder::to_bytes(vec![1u8, 2, 3]), b"li1ei2ei3ee");
/// assert_eq!(bencode_encoder::to_bytes(u64::MAX), b"i18446744073709551615e");
/// ```
pub fn to_bytes<T: Into<Value>>(value: T) -> Vec<u8> {
    encode(&value.into())
}

/// Exact number of bytes [`encode`] produces for `value`.
#[must_use]
pub fn encoded_len(value: &Value) -> usize {
    match value {
        Value::Bytes(b) => string_len(b.len()),
        Value::Integer(i) => decimal::signed_len(*i) + 2,
        Value::Unsigned(u) => decimal::unsigned_len(*u) + 2,
        Value::List(items) => items.iter().map(encoded_len).sum::<usize>() + 2,
        Value::Dict(entries) => {
            entries
                .iter()
                .map(|(k, v)| string_len(k.len()) + encoded_len(v))
                .sum::<usize>()
                + 2
        }
    }
}

fn string_len(len: usize) -> usize {
    decimal::unsigned_len(len as u64) + 1 + len
}

fn emit_value(out: &mut Vec<u8>, value: &Value) {
    match value {
        Value::Bytes(b) => emit_bytes(out, b),
        Value::Integer(i) => {
            let mut scratch = [0u8; MAX_INTEGER_LEN];
            out.push(INTEGER_START);
            out.extend_from_slice(decimal::format_i64(*i, &mut scratch));
            out.push(END);
        }
        Value::Unsigned(u) => {
            let mut scratch = [0u8; MAX_INTEGER_LEN];
            out.push(INTEGER_START);
            out.extend_from_slice(decimal::format_u64(*u, &mut scratch));
            out.push(END);
        }
        Value::List(items) => {
            trace!(len = items.len(), "encoding list");
            out.push(LIST_START);
            for item in items {
                emit_value(out, item);
            }
            out.push(END);
        }
        Value::Dict(entries) => {
            trace!(len = entries.len(), "encoding dictionary");
            out.push(DICT_START);
            for (key, val) in entries {
                emit_bytes(out, key);
                emit_value(out, val);
            }
            out.push(END);
        }
    }
}

fn emit_bytes(out: &mut Vec<u8>, bytes: &ByteString) {
    let mut scratch = [0u8; MAX_INTEGER_LEN];
    out.extend_from_slice(decimal::format_u64(bytes.len() as u64, &mut scratch));
    out.push(LENGTH_SEPARATOR);
    out.extend_from_slice(bytes);
}

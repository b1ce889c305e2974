use std::collections::BTreeMap;
use std::io::BufRead;

use bencode_types::{ByteString, Value};
use bencode_wire::decimal::{self, MAX_DECIMAL_DIGITS};
use bencode_wire::token::{END, LENGTH_SEPARATOR};
use bencode_wire::{ByteReader, TokenKind, WireError};
use tracing::{debug, trace};

use crate::config::{DecoderConfig, DuplicateKeys, TrailingData};
use crate::error::DecodeError;

/// Recursive-descent Bencode decoder.
///
/// Dispatches on one byte of lookahead, never backtracks and reads the
/// input exactly once:
///
/// ```text
/// ┌────────────┬──────────────────────────────────────────────────────┐
/// │ Lookahead  │ Action                                               │
/// ├────────────┼──────────────────────────────────────────────────────┤
/// │ '0'..='9'  │ length up to ':' (≤ 20 digits), then that many bytes │
/// │ 'i'        │ body up to 'e' (≤ 20 bytes), signed then unsigned    │
/// │ 'l'        │ values until 'e'                                     │
/// │ 'd'        │ (byte-string key, value) pairs until 'e'             │
/// │ other      │ UnexpectedByte                                       │
/// │ end        │ UnexpectedEof                                        │
/// └────────────┴──────────────────────────────────────────────────────┘
/// ```
///
/// Dictionary keys are accepted in any order on input; the decoded map is
/// always sorted. The decoder is plain configuration data, so one value can
/// be shared across threads and calls.
///
/// # Example
///
/// ```rust
/// use bencode_decoder::{Decoder, DecoderConfig, DecodeErrorKind};
///
/// let strict = Decoder::new(DecoderConfig::default().with_max_depth(1));
/// assert!(strict.decode(b"li1ee").is_ok());
/// let err = strict.decode(b"lli1eee").unwrap_err();
/// assert_eq!(err.kind(), DecodeErrorKind::NestingTooDeep);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Decoder {
    config: DecoderConfig,
}

impl Decoder {
    #[must_use]
    pub fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode exactly one value from `input`.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::Wire`] for malformed tokens, truncated input or
    ///   out-of-range integers.
    /// - [`DecodeError::UnexpectedByte`] where no token can start.
    /// - [`DecodeError::NestingTooDeep`] past `max_depth`.
    /// - [`DecodeError::DuplicateKey`] under [`DuplicateKeys::Reject`].
    /// - [`DecodeError::TrailingData`] if bytes follow the value and the
    ///   policy is [`TrailingData::Reject`].
    pub fn decode(&self, input: &[u8]) -> Result<Value, DecodeError> {
        let result = self.decode_slice(input);
        if let Err(e) = &result {
            debug!(error = %e, "bencode decode failed");
        }
        result
    }

    /// Decode one value from a byte stream.
    ///
    /// Bytes after the value are left unread in `reader`; pass `&mut
    /// reader` to keep using it afterwards. The trailing-data policy does
    /// not apply here.
    ///
    /// # Errors
    ///
    /// As [`decode`](Self::decode), minus `TrailingData`, plus
    /// [`WireError::Io`] from the reader.
    pub fn decode_reader<R: BufRead>(&self, reader: R) -> Result<Value, DecodeError> {
        let mut parser = Parser::new(reader, self.config);
        let result = parser.value(0);
        match &result {
            Ok(_) => debug!(bytes = parser.reader.offset(), "decoded bencode value from reader"),
            Err(e) => debug!(error = %e, "bencode decode failed"),
        }
        result
    }

    fn decode_slice(&self, input: &[u8]) -> Result<Value, DecodeError> {
        let mut parser = Parser::new(input, self.config);
        let value = parser.value(0)?;

        let consumed = parser.reader.offset();
        if consumed < input.len() {
            match self.config.trailing_data {
                TrailingData::Reject => return Err(DecodeError::TrailingData { offset: consumed }),
                TrailingData::Ignore => {
                    debug!(consumed, ignored = input.len() - consumed, "ignoring trailing data");
                }
            }
        }
        debug!(bytes = consumed, "decoded bencode value");
        Ok(value)
    }
}

/// Decode exactly one value from `input` with the default configuration.
///
/// ```rust
/// use bencode_types::Value;
///
/// let value = bencode_decoder::decode(b"d3:cow3:moo4:spam4:eggse").unwrap();
/// assert_eq!(value.get(b"cow").and_then(Value::as_str), Some("moo"));
/// assert!(bencode_decoder::decode(b"i1ei2e").is_err());
/// ```
///
/// # Errors
///
/// See [`Decoder::decode`].
pub fn decode(input: &[u8]) -> Result<Value, DecodeError> {
    Decoder::default().decode(input)
}

/// Decode one value from `reader` with the default configuration.
///
/// # Errors
///
/// See [`Decoder::decode_reader`].
pub fn decode_from_reader<R: BufRead>(reader: R) -> Result<Value, DecodeError> {
    Decoder::default().decode_reader(reader)
}

// ── Parser ────────────────────────────────────────────────────────────

struct Parser<R> {
    reader: ByteReader<R>,
    config: DecoderConfig,
}

impl<R: BufRead> Parser<R> {
    fn new(inner: R, config: DecoderConfig) -> Self {
        Self {
            reader: ByteReader::new(inner),
            config,
        }
    }

    /// Decode one value whose enclosing container sits at `depth`.
    fn value(&mut self, depth: usize) -> Result<Value, DecodeError> {
        let offset = self.reader.offset();
        let byte = self
            .reader
            .peek()?
            .ok_or(WireError::UnexpectedEof { offset })?;

        match TokenKind::from_lookahead(byte) {
            Some(TokenKind::ByteString) => self.byte_string().map(Value::Bytes),
            Some(TokenKind::Integer) => self.integer(),
            Some(TokenKind::List) => self.list(depth + 1),
            Some(TokenKind::Dict) => self.dict(depth + 1),
            None => Err(DecodeError::UnexpectedByte {
                byte,
                offset,
                context: "value",
            }),
        }
    }

    fn byte_string(&mut self) -> Result<ByteString, DecodeError> {
        let offset = self.reader.offset();
        let digits = self
            .reader
            .read_until(LENGTH_SEPARATOR, MAX_DECIMAL_DIGITS)?
            .ok_or(WireError::InvalidLength {
                offset,
                reason: "length prefix longer than 20 digits",
            })?;
        let len = decimal::parse_length(&digits, offset)?;
        let content = self.reader.read_exact_vec(len)?;
        Ok(ByteString::from(content))
    }

    fn integer(&mut self) -> Result<Value, DecodeError> {
        let offset = self.reader.offset();
        self.reader.next_byte()?;
        let body = self
            .reader
            .read_until(END, MAX_DECIMAL_DIGITS)?
            .ok_or(WireError::InvalidInteger {
                offset,
                reason: "integer longer than 20 bytes",
            })?;
        Ok(Value::from(decimal::parse_integer(&body, offset)?))
    }

    fn enter(&mut self, depth: usize, kind: TokenKind) -> Result<(), DecodeError> {
        let offset = self.reader.offset();
        if depth > self.config.max_depth {
            return Err(DecodeError::NestingTooDeep {
                limit: self.config.max_depth,
                offset,
            });
        }
        trace!(offset, depth, kind = kind.name(), "entering container");
        self.reader.next_byte()?;
        Ok(())
    }

    /// Consume the closing `e` if it is next.
    fn at_end(&mut self) -> Result<bool, DecodeError> {
        match self.reader.peek()? {
            Some(END) => {
                self.reader.next_byte()?;
                Ok(true)
            }
            Some(_) => Ok(false),
            None => Err(WireError::UnexpectedEof {
                offset: self.reader.offset(),
            }
            .into()),
        }
    }

    fn list(&mut self, depth: usize) -> Result<Value, DecodeError> {
        self.enter(depth, TokenKind::List)?;
        let mut items = Vec::new();
        while !self.at_end()? {
            items.push(self.value(depth)?);
        }
        Ok(Value::List(items))
    }

    fn dict(&mut self, depth: usize) -> Result<Value, DecodeError> {
        self.enter(depth, TokenKind::Dict)?;
        let mut entries = BTreeMap::new();
        while !self.at_end()? {
            let offset = self.reader.offset();
            match self.reader.peek()? {
                Some(byte) if byte.is_ascii_digit() => {}
                Some(byte) => {
                    return Err(DecodeError::UnexpectedByte {
                        byte,
                        offset,
                        context: "dictionary key",
                    });
                }
                None => return Err(WireError::UnexpectedEof { offset }.into()),
            }

            let key = self.byte_string()?;
            if self.config.duplicate_keys == DuplicateKeys::Reject && entries.contains_key(&key) {
                return Err(DecodeError::DuplicateKey { key, offset });
            }
            let value = self.value(depth)?;
            entries.insert(key, value);
        }
        Ok(Value::Dict(entries))
    }
}

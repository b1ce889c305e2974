//! Edge case integration tests for the Bencode decoder.
//!
//! - **Malformed input**: every way a token can be wrong maps to one
//!   error kind, and the reported offset points at the failing token.
//! - **Integer range**: the decoder accepts exactly `i64::MIN ..= u64::MAX`.
//! - **Decoder policies**: unsorted keys, duplicate keys, trailing data
//!   and nesting depth, using the handcrafted fixtures under
//!   `tests/golden/edge_cases/`.

use bencode_decoder::{
    DEFAULT_MAX_DEPTH, DecodeError, DecodeErrorKind, Decoder, DecoderConfig, DuplicateKeys,
    TrailingData, decode, decode_from_reader,
};
use bencode_encoder::encode;
use bencode_tests::{golden, nested_lists};
use bencode_types::Value;
use bencode_wire::WireError;

fn fails_with(input: &[u8]) -> (DecodeErrorKind, Option<usize>) {
    let err = decode(input).expect_err("input should be rejected");
    (err.kind(), err.offset())
}

// ── Malformed input ───────────────────────────────────────────────────────────

#[test]
fn malformed_inputs_map_to_kinds() {
    use DecodeErrorKind as K;

    let cases: &[(&[u8], K, usize)] = &[
        (b"", K::UnexpectedEof, 0),
        (b"l", K::UnexpectedEof, 1),
        (b"li1e", K::UnexpectedEof, 4),
        (b"d1:a", K::UnexpectedEof, 4),
        (b"i42", K::UnexpectedEof, 3),
        (b"4:spa", K::TruncatedContent, 2),
        (b"01:a", K::InvalidLength, 0),
        (b"-1:a", K::UnexpectedByte, 0),
        (b"l1x:ae", K::InvalidLength, 1),
        (b"i-0e", K::InvalidInteger, 0),
        (b"i01e", K::InvalidInteger, 0),
        (b"ie", K::InvalidInteger, 0),
        (b"i-e", K::InvalidInteger, 0),
        (b"i+1e", K::InvalidInteger, 0),
        (b"li1ei 2ee", K::InvalidInteger, 4),
        (b"x", K::UnexpectedByte, 0),
        (b"le4:spam", K::TrailingData, 2),
        (b"di1ei2ee", K::UnexpectedByte, 1),
        (b"dle", K::UnexpectedByte, 1),
    ];

    for &(input, kind, offset) in cases {
        assert_eq!(
            fails_with(input),
            (kind, Some(offset)),
            "input {:?}",
            input.escape_ascii().to_string()
        );
    }
}

#[test]
fn error_messages_locate_the_problem() {
    let err = decode(b"d1:ai1e1:b").unwrap_err();
    assert_eq!(err.to_string(), "unexpected end of input at offset 10");

    let err = decode(b"l3:ab").unwrap_err();
    assert_eq!(
        err.to_string(),
        "byte string at offset 3 declares 3 bytes but only 2 remain"
    );

    let err = decode(b"di1ee").unwrap_err();
    assert_eq!(
        err.to_string(),
        "unexpected byte 'i' at offset 1 while reading dictionary key"
    );

    let err = decode(b"i007e").unwrap_err();
    assert_eq!(err.to_string(), "invalid integer at offset 0: leading zero");
}

#[test]
fn huge_declared_length_does_not_allocate_up_front() {
    let err = decode(b"99999999999:short").unwrap_err();
    assert!(matches!(
        err,
        DecodeError::Wire(WireError::TruncatedContent {
            declared: 99_999_999_999,
            available: 5,
            ..
        })
    ));
}

#[test]
fn overlong_tokens_stop_scanning() {
    let long_int = format!("i{}e", "1".repeat(64));
    assert_eq!(fails_with(long_int.as_bytes()).0, DecodeErrorKind::InvalidInteger);

    let long_len = format!("{}:x", "1".repeat(64));
    assert_eq!(fails_with(long_len.as_bytes()).0, DecodeErrorKind::InvalidLength);
}

// ── Integer range ─────────────────────────────────────────────────────────────

#[test]
fn integer_boundaries() {
    assert_eq!(decode(b"i-9223372036854775808e").unwrap(), Value::Integer(i64::MIN));
    assert_eq!(decode(b"i9223372036854775807e").unwrap(), Value::Integer(i64::MAX));
    assert!(matches!(
        decode(b"i9223372036854775808e").unwrap(),
        Value::Unsigned(9_223_372_036_854_775_808)
    ));
    assert!(matches!(
        decode(b"i18446744073709551615e").unwrap(),
        Value::Unsigned(u64::MAX)
    ));

    assert_eq!(
        fails_with(b"i-9223372036854775809e"),
        (DecodeErrorKind::InvalidInteger, Some(0))
    );
    assert_eq!(
        fails_with(b"i18446744073709551616e"),
        (DecodeErrorKind::InvalidInteger, Some(0))
    );
}

// ── Unsorted keys ─────────────────────────────────────────────────────────────

#[test]
fn unsorted_keys_are_canonicalized() {
    let bytes = golden("edge_cases/unsorted_keys");
    let value = decode(&bytes).unwrap();
    assert_eq!(value.get(b"a"), Some(&Value::Integer(1)));
    assert_eq!(value.get(b"b"), Some(&Value::Integer(2)));
    assert_eq!(encode(&value), b"d1:ai1e1:bi2ee");
}

// ── Duplicate keys ────────────────────────────────────────────────────────────

#[test]
fn duplicate_keys_last_write_wins_by_default() {
    let bytes = golden("edge_cases/duplicate_keys");
    let value = decode(&bytes).unwrap();
    assert_eq!(value.as_dict().map(|d| d.len()), Some(1));
    assert_eq!(value.get(b"a"), Some(&Value::Integer(2)));
}

#[test]
fn duplicate_keys_rejected_on_request() {
    let bytes = golden("edge_cases/duplicate_keys");
    let strict = Decoder::new(DecoderConfig::default().with_duplicate_keys(DuplicateKeys::Reject));
    let err = strict.decode(&bytes).unwrap_err();
    assert_eq!(err.kind(), DecodeErrorKind::DuplicateKey);
    assert_eq!(err.offset(), Some(7));
    assert_eq!(err.to_string(), r#"duplicate dictionary key b"a" at offset 7"#);
}

// ── Trailing data ─────────────────────────────────────────────────────────────

#[test]
fn trailing_data_rejected_by_default() {
    let bytes = golden("edge_cases/trailing_data");
    let err = decode(&bytes).unwrap_err();
    assert!(matches!(err, DecodeError::TrailingData { offset: 3 }));
}

#[test]
fn trailing_data_ignored_when_allowed() {
    let bytes = golden("edge_cases/trailing_data");
    let lenient = Decoder::new(DecoderConfig::default().with_trailing_data(TrailingData::Ignore));
    assert_eq!(lenient.decode(&bytes).unwrap(), Value::Integer(1));

    // The reader entry point never looks past the value.
    assert_eq!(decode_from_reader(bytes.as_slice()).unwrap(), Value::Integer(1));
}

// ── Nesting depth ─────────────────────────────────────────────────────────────

#[test]
fn deep_nesting_rejected_by_default() {
    let bytes = golden("edge_cases/deep_nesting");
    let err = decode(&bytes).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::NestingTooDeep {
            limit: DEFAULT_MAX_DEPTH,
            offset: DEFAULT_MAX_DEPTH
        }
    ));
}

#[test]
fn deep_nesting_accepted_with_higher_limit() {
    let bytes = golden("edge_cases/deep_nesting");
    let decoder = Decoder::new(DecoderConfig::default().with_max_depth(300));
    let value = decoder.decode(&bytes).unwrap();

    let mut depth = 0;
    let mut current = &value;
    while let Some(items) = current.as_list() {
        depth += 1;
        match items.first() {
            Some(inner) => current = inner,
            None => break,
        }
    }
    assert_eq!(depth, 300);
}

#[test]
fn depth_limit_is_inclusive() {
    assert!(decode(&nested_lists(DEFAULT_MAX_DEPTH)).is_ok());
    assert_eq!(
        fails_with(&nested_lists(DEFAULT_MAX_DEPTH + 1)).0,
        DecodeErrorKind::NestingTooDeep
    );

    let flat = Decoder::new(DecoderConfig::default().with_max_depth(0));
    assert_eq!(flat.decode(b"4:spam").unwrap(), Value::string("spam"));
    assert_eq!(
        flat.decode(b"le").unwrap_err().kind(),
        DecodeErrorKind::NestingTooDeep
    );
}

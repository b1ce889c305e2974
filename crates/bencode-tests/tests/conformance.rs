//! Conformance tests: fixed encodings every Bencode implementation agrees on.
//!
//! Two sources of truth are checked here:
//!
//!   - Encoding tables of native Rust values against their canonical byte
//!     form, covering strings measured in bytes, every integer width,
//!     lists built from mixed widths, and maps inserted out of order.
//!   - Golden fixture files under `tests/golden/`, written by
//!     `src/bin/generate_golden.rs`. Each committed payload must still
//!     equal what the encoder produces today, and must decode back to the
//!     fixture value.
//!
//! A few canonical forms are pinned as insta inline snapshots so a diff
//! shows up directly in this file.

use std::collections::HashMap;

use bencode_decoder::decode;
use bencode_encoder::{encode, to_bytes};
use bencode_tests::{binary, boundary_integers, golden, nested, sample_torrent};
use bencode_types::{ByteString, Value};
use insta::{assert_debug_snapshot, assert_snapshot};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn text(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).expect("fixture encodes to UTF-8")
}

/// Encode `value`, compare against `expected`, and decode it back.
fn check(value: impl Into<Value>, expected: &str) {
    let value = value.into();
    let encoded = encode(&value);
    assert_eq!(text(encoded.clone()), expected);
    assert_eq!(decode(&encoded).expect("conformance case decodes"), value);
}

// ── Strings ───────────────────────────────────────────────────────────────────

#[test]
fn strings_use_byte_length() {
    check("spam", "4:spam");
    check("with space", "10:with space");
    check("на русском", "19:на русском");
    check("拉面", "6:拉面");
    check(String::new(), "0:");
}

// ── Integers ──────────────────────────────────────────────────────────────────

#[test]
fn signed_integers() {
    check(1234i64, "i1234e");
    check(0i64, "i0e");
    check(-1234i64, "i-1234e");
    check(i64::MIN, "i-9223372036854775808e");
    check(i64::MAX, "i9223372036854775807e");
}

#[test]
fn every_native_width() {
    check(-8i8, "i-8e");
    check(-16i16, "i-16e");
    check(-32i32, "i-32e");
    check(-1isize, "i-1e");
    check(8u8, "i8e");
    check(u16::MAX, "i65535e");
    check(u32::MAX, "i4294967295e");
    check(64usize, "i64e");
}

#[test]
fn unsigned_integers_above_signed_range() {
    check(9_223_372_036_854_775_808u64, "i9223372036854775808e");
    check(u64::MAX, "i18446744073709551615e");
}

// ── Lists ─────────────────────────────────────────────────────────────────────

#[test]
fn list_of_strings() {
    check(vec!["spam", "spame", "spamer"], "l4:spam5:spame6:spamere");
}

#[test]
fn lists_from_mixed_widths() {
    let expected = "li1ei2ei3ee";
    check(vec![1i8, 2, 3], expected);
    check([1i16, 2, 3], expected);
    check(vec![1i32, 2, 3], expected);
    check(&[1i64, 2, 3][..], expected);
    check(vec![1u8, 2, 3], expected);
    check([1u16, 2, 3], expected);
    check(vec![1u32, 2, 3], expected);
    check(&[1u64, 2, 3][..], expected);
    check(vec![1usize, 2, 3], expected);
}

#[test]
fn list_of_lists() {
    let value: Value = vec![
        Value::from(vec![1i8, 2, 3]),
        Value::from([4u16, 5, 6]),
        Value::from(vec![7i32, 8, 9]),
        Value::from(&[1u64, 2, 3][..]),
        Value::from(vec![4usize, 5, 6]),
    ]
    .into_iter()
    .collect();
    check(
        value,
        "lli1ei2ei3eeli4ei5ei6eeli7ei8ei9eeli1ei2ei3eeli4ei5ei6eee",
    );
}

#[test]
fn list_of_dicts() {
    let mut numbers = HashMap::new();
    for (k, v) in [("e", 5), ("d", 4), ("c", 3), ("b", 2), ("a", 1)] {
        numbers.insert(k, v);
    }
    let mut letters = HashMap::new();
    for (k, v) in [("e", "p"), ("d", "q"), ("c", "y"), ("b", "x"), ("a", "z")] {
        letters.insert(k, v);
    }
    check(
        vec![Value::from(numbers), Value::from(letters)],
        "ld1:ai1e1:bi2e1:ci3e1:di4e1:ei5eed1:a1:z1:b1:x1:c1:y1:d1:q1:e1:pee",
    );
}

// ── Dictionaries ──────────────────────────────────────────────────────────────

#[test]
fn dict_of_strings() {
    let mut map = HashMap::new();
    map.insert("k2", "val2");
    map.insert("k1", "val1");
    check(map, "d2:k14:val12:k24:val2e");
}

#[test]
fn dict_of_integers() {
    let mut map = HashMap::new();
    map.insert("k2", 2u32);
    map.insert("k1", 1u32);
    check(map, "d2:k1i1e2:k2i2ee");
}

#[test]
fn dict_of_lists() {
    let mut map = HashMap::new();
    map.insert("k1234", vec![1i64, 2, 3]);
    map.insert("k1", vec![1i64, 2, 3]);
    check(map, "d2:k1li1ei2ei3ee5:k1234li1ei2ei3eee");
}

#[test]
fn dict_of_dicts() {
    let mut numbers = HashMap::new();
    for (k, v) in [("c", 3i64), ("a", 1), ("e", 5), ("b", 2), ("d", 4)] {
        numbers.insert(k, Value::from(v));
    }
    let mut letters = HashMap::new();
    for (k, v) in [("d", "q"), ("b", "x"), ("e", "p"), ("a", "z"), ("c", "y")] {
        letters.insert(k, Value::from(v));
    }
    let mut outer = HashMap::new();
    outer.insert("k2", letters);
    outer.insert("k1", numbers);
    check(
        outer,
        "d2:k1d1:ai1e1:bi2e1:ci3e1:di4e1:ei5ee2:k2d1:a1:z1:b1:x1:c1:y1:d1:q1:e1:pee",
    );
}

// ── Snapshots ─────────────────────────────────────────────────────────────────

#[test]
fn canonical_order_snapshot() {
    let mut map = HashMap::new();
    map.insert("b", "x");
    map.insert("a", "z");
    assert_snapshot!(text(to_bytes(map)), @"d1:a1:z1:b1:xe");
}

#[test]
fn nested_fixture_snapshot() {
    assert_snapshot!(
        text(encode(&nested())),
        @"d4:dictd1:ad1:bd1:c4:deepeee10:empty_dictde10:empty_listle4:listlli1ei2ei3eeli4ei5ei6eeee"
    );
}

#[test]
fn boundary_integers_snapshot() {
    assert_snapshot!(
        text(encode(&boundary_integers())),
        @"li0ei-1ei1ei9223372036854775807ei-9223372036854775808ei9223372036854775808ei18446744073709551615ee"
    );
}

#[test]
fn decoded_value_debug_snapshot() {
    let value = decode(b"d4:spaml1:a1:be3:cow3:mooe").unwrap();
    assert_debug_snapshot!(value, @r#"
    {
        b"cow": b"moo",
        b"spam": [
            b"a",
            b"b",
        ],
    }
    "#);
}

// ── Golden fixtures ───────────────────────────────────────────────────────────

fn assert_golden(fixture: &str, value: &Value) {
    let committed = golden(fixture);
    assert_eq!(
        encode(value),
        committed,
        "encoder output drifted from tests/golden/{fixture}"
    );
    assert_eq!(&decode(&committed).unwrap(), value);
}

#[test]
fn golden_torrent() {
    let torrent = sample_torrent();
    assert_golden("torrent", &torrent);

    let info = torrent.get(b"info").unwrap();
    assert_eq!(info.get(b"name").and_then(Value::as_str), Some("example.iso"));
    assert_eq!(info.get(b"pieces").and_then(Value::as_bytes).map(|p| p.len()), Some(80));
    assert_eq!(golden("torrent").len(), 275);
}

#[test]
fn golden_nested() {
    assert_golden("nested", &nested());
}

#[test]
fn golden_integers() {
    assert_golden("integers", &boundary_integers());
}

#[test]
fn golden_binary() {
    let value = binary();
    assert_golden("binary", &value);

    let committed = golden("binary");
    assert_eq!(&committed[..4], b"256:");
    let decoded = decode(&committed).unwrap();
    let bytes: &ByteString = decoded.as_bytes().unwrap();
    assert!(bytes.iter().copied().eq(0..=255u8));
    assert_eq!(decoded.as_str(), None);
}

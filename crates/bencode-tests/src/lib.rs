//! Shared fixtures for the integration tests, benchmarks and the golden
//! fixture generator.
//!
//! Every builder here is deterministic: the generator writes their
//! encodings to `tests/golden/`, and the conformance suite checks that the
//! committed bytes still match what the encoder produces today.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use bencode_types::{ByteString, Value};

/// Directory holding the committed golden fixtures.
#[must_use]
pub fn golden_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/golden")
}

/// Read `tests/golden/<fixture>/payload.bencode`.
///
/// # Panics
///
/// If the fixture file is missing.
#[must_use]
pub fn golden(fixture: &str) -> Vec<u8> {
    let path = golden_dir().join(fixture).join("payload.bencode");
    std::fs::read(&path)
        .unwrap_or_else(|e| panic!("failed to read golden fixture {}: {e}", path.display()))
}

fn dict<const N: usize>(entries: [(&str, Value); N]) -> Value {
    Value::Dict(
        entries
            .into_iter()
            .map(|(k, v)| (ByteString::from(k), v))
            .collect(),
    )
}

/// A single-file torrent metainfo dictionary.
#[must_use]
pub fn sample_torrent() -> Value {
    let pieces: Vec<u8> = (0..80).collect();
    dict([
        ("announce", Value::string("http://tracker.example.org:6969/announce")),
        ("created by", Value::string("bencode-cli 0.1.0")),
        ("creation date", Value::Integer(1_700_000_000)),
        (
            "info",
            dict([
                ("length", Value::Integer(1_048_576)),
                ("name", Value::string("example.iso")),
                ("piece length", Value::Integer(262_144)),
                ("pieces", Value::bytes(pieces)),
            ]),
        ),
    ])
}

/// Nested containers, including empty ones.
#[must_use]
pub fn nested() -> Value {
    dict([
        (
            "dict",
            dict([("a", dict([("b", dict([("c", Value::string("deep"))]))]))]),
        ),
        ("empty_dict", Value::Dict(BTreeMap::new())),
        ("empty_list", Value::List(vec![])),
        (
            "list",
            Value::from(vec![vec![1i64, 2, 3], vec![4, 5, 6]]),
        ),
    ])
}

/// Every integer boundary the codec distinguishes.
#[must_use]
pub fn boundary_integers() -> Value {
    Value::List(vec![
        Value::Integer(0),
        Value::Integer(-1),
        Value::Integer(1),
        Value::Integer(i64::MAX),
        Value::Integer(i64::MIN),
        Value::from(1u64 << 63),
        Value::from(u64::MAX),
    ])
}

/// One byte string holding every byte value once.
#[must_use]
pub fn binary() -> Value {
    Value::bytes((0..=255u8).collect::<Vec<u8>>())
}

/// Dictionary with `n` keys `key00000`, `key00001`, ... mapped to integers.
#[must_use]
pub fn wide_dict(n: usize) -> Value {
    Value::Dict(
        (0..n)
            .map(|i| (ByteString::from(format!("key{i:05}")), Value::from(i)))
            .collect(),
    )
}

/// `depth` nested empty lists, already encoded.
#[must_use]
pub fn nested_lists(depth: usize) -> Vec<u8> {
    let mut out = vec![b'l'; depth];
    out.resize(depth * 2, b'e');
    out
}

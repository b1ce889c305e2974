#![no_main]

use std::collections::BTreeMap;

use arbitrary::Arbitrary;
use bencode_types::{ByteString, Value};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum FuzzValue {
    Bytes(Vec<u8>),
    Signed(i64),
    Unsigned(u64),
    List(Vec<FuzzValue>),
    Dict(Vec<(Vec<u8>, FuzzValue)>),
}

impl FuzzValue {
    fn into_value(self) -> Value {
        match self {
            FuzzValue::Bytes(b) => Value::bytes(b),
            FuzzValue::Signed(i) => Value::Integer(i),
            FuzzValue::Unsigned(u) => Value::from_u64(u),
            FuzzValue::List(items) => items.into_iter().map(FuzzValue::into_value).collect(),
            FuzzValue::Dict(entries) => Value::Dict(
                entries
                    .into_iter()
                    .map(|(k, v)| (ByteString::from(k), v.into_value()))
                    .collect::<BTreeMap<_, _>>(),
            ),
        }
    }
}

// Fuzz target: Value -> encode -> decode roundtrip.
//
// Builds an arbitrary value tree, encodes it, decodes the bytes, and
// asserts the decoded tree equals the input and re-encodes to the same
// bytes. Trees deeper than the default depth limit must fail with
// NestingTooDeep and nothing else.
fuzz_target!(|input: FuzzValue| {
    let value = input.into_value();
    let encoded = bencode_encoder::encode(&value);

    match bencode_decoder::decode(&encoded) {
        Ok(decoded) => {
            assert_eq!(decoded, value);
            assert_eq!(bencode_encoder::encode(&decoded), encoded);
        }
        Err(e) => assert_eq!(e.kind(), bencode_decoder::DecodeErrorKind::NestingTooDeep),
    }
});

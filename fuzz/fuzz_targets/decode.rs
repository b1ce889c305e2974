#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: slice decoder on arbitrary bytes.
//
// Catches bugs in:
// - Length prefixes larger than the input
// - Integer bodies at and past the 64-bit boundaries
// - Deep nesting near the depth limit
// - Unterminated containers
//
// Anything that decodes must be canonical after one re-encode: encoding
// the decoded value and decoding that again yields the same value.
fuzz_target!(|data: &[u8]| {
    if let Ok(value) = bencode_decoder::decode(data) {
        let encoded = bencode_encoder::encode(&value);
        assert_eq!(encoded.len(), bencode_encoder::encoded_len(&value));
        let again = bencode_decoder::decode(&encoded).unwrap();
        assert_eq!(again, value);
    }
});

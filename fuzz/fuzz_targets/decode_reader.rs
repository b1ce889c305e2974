#![no_main]

use std::io::BufReader;

use libfuzzer_sys::fuzz_target;

// Fuzz target: reader decoder agrees with the slice decoder.
//
// Input format:
//   byte 0: BufReader capacity (1..=256)
//   bytes 1..: Bencode input
//
// A small buffer forces every token to straddle `fill_buf` refills.
fuzz_target!(|data: &[u8]| {
    let Some((&cap, input)) = data.split_first() else {
        return;
    };
    let capacity = usize::from(cap) + 1;

    let from_reader = bencode_decoder::decode_from_reader(BufReader::with_capacity(capacity, input));
    let lenient = bencode_decoder::Decoder::new(
        bencode_decoder::DecoderConfig::default()
            .with_trailing_data(bencode_decoder::TrailingData::Ignore),
    );
    let from_slice = lenient.decode(input);

    match (from_reader, from_slice) {
        (Ok(a), Ok(b)) => assert_eq!(a, b),
        (Err(a), Err(b)) => assert_eq!(a.kind(), b.kind()),
        (a, b) => panic!("reader and slice disagree: {a:?} vs {b:?}"),
    }
});

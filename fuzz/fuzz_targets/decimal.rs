#![no_main]

use bencode_wire::decimal::{self, Integer, MAX_INTEGER_LEN};
use libfuzzer_sys::fuzz_target;

// Fuzz target: decimal lexer against the standard library parser.
//
// Any body the lexer accepts must be canonical: parsing with `str::parse`
// gives the same number, and formatting it back gives the same bytes.
fuzz_target!(|data: &[u8]| {
    if let Ok(integer) = decimal::parse_integer(data, 0) {
        let text = std::str::from_utf8(data).unwrap();
        let mut buf = [0u8; MAX_INTEGER_LEN];
        let formatted = match integer {
            Integer::Signed(i) => {
                assert_eq!(text.parse::<i64>().unwrap(), i);
                decimal::format_i64(i, &mut buf)
            }
            Integer::Unsigned(u) => {
                assert!(u > i64::MAX as u64);
                assert_eq!(text.parse::<u64>().unwrap(), u);
                decimal::format_u64(u, &mut buf)
            }
        };
        assert_eq!(formatted, data);
    }

    if let Ok(len) = decimal::parse_length(data, 0) {
        let text = std::str::from_utf8(data).unwrap();
        assert_eq!(text.parse::<usize>().unwrap(), len);
        assert_eq!(len.to_string().as_bytes(), data);
    }
});

//! Golden fixture generator for the Bencode conformance test suite.
//!
//! This binary creates all fixture files under `tests/golden/`. Run it
//! once after changing a fixture builder to regenerate the committed
//! payloads.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin generate_golden -p bencode-tests
//! ```
//!
//! # Generated fixtures
//!
//! | Directory                  | Contents                                   |
//! |----------------------------|--------------------------------------------|
//! | torrent                    | Single-file torrent metainfo               |
//! | nested                     | Nested and empty lists and dictionaries    |
//! | integers                   | Signed and unsigned 64-bit boundaries      |
//! | binary                     | Byte string with all 256 byte values       |
//! | edge_cases/unsorted_keys   | Handcrafted: keys out of order             |
//! | edge_cases/duplicate_keys  | Handcrafted: key `a` appears twice         |
//! | edge_cases/trailing_data   | Valid integer + 4 extra bytes              |
//! | edge_cases/deep_nesting    | 300 nested empty lists                     |

#![allow(clippy::pedantic)]

use std::path::Path;

use bencode_encoder::encode;
use bencode_tests::{binary, boundary_integers, golden_dir, nested, nested_lists, sample_torrent};
use bencode_types::Value;

fn main() {
    let golden = golden_dir();

    write_value(&golden, "torrent", &sample_torrent());
    write_value(&golden, "nested", &nested());
    write_value(&golden, "integers", &boundary_integers());
    write_value(&golden, "binary", &binary());

    write_raw(&golden, "edge_cases/unsorted_keys", b"d1:bi2e1:ai1ee");
    write_raw(&golden, "edge_cases/duplicate_keys", b"d1:ai1e1:ai2ee");
    write_raw(&golden, "edge_cases/trailing_data", b"i1eJUNK");
    write_raw(&golden, "edge_cases/deep_nesting", &nested_lists(300));

    println!("All golden fixtures written to {}", golden.display());
}

fn write_value(golden: &Path, fixture: &str, value: &Value) {
    write_raw(golden, fixture, &encode(value));
}

fn write_raw(golden: &Path, fixture: &str, data: &[u8]) {
    let path = golden.join(fixture).join("payload.bencode");
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create_dir_all");
    }
    std::fs::write(&path, data).expect("write_file");
    println!("  wrote {}", path.display());
}

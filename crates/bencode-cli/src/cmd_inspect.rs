/// Implementation of `bencode inspect`.
///
/// Decodes a Bencode file and prints an indented tree, one value per line,
/// with its kind, length and (for scalars) a short rendering of its
/// content. Long containers are cut after `--max-items` children.
///
/// # Output format
///
/// ```text
/// dictionary (4 entries)
///   "announce": byte string (40 bytes) "http://tracker.example.org:6969/announce"
///   "creation date": integer 1700000000
///   "info": dictionary (4 entries)
///     "pieces": byte string (80 bytes) 0x000102030405060708090a0b0c0d0e0f…
///   …
/// ---
/// 275 bytes, 11 values, nesting depth 2
/// ```
use std::fmt::Write as _;
use std::fs;

use anyhow::{Context, Result};
use bencode_decoder::{Decoder, DecoderConfig};
use bencode_types::{ByteString, Value};

use crate::InspectArgs;
use crate::cmd_validate::measure;

/// Characters of a UTF-8 string shown before truncation.
const PREVIEW_CHARS: usize = 60;

/// Bytes of a binary string shown (as hex) before truncation.
const PREVIEW_BYTES: usize = 16;

/// Run the `bencode inspect` command.
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails to decode.
pub fn run(args: &InspectArgs, config: DecoderConfig) -> Result<()> {
    let bytes =
        fs::read(&args.file).with_context(|| format!("cannot read {}", args.file.display()))?;
    let value = Decoder::new(config)
        .decode(&bytes)
        .with_context(|| format!("failed to decode {}", args.file.display()))?;

    print!("{}", render_tree(&value, args.max_items));

    let shape = measure(&value);
    println!("---");
    println!(
        "{} bytes, {} value{}, nesting depth {}",
        bytes.len(),
        shape.values,
        if shape.values == 1 { "" } else { "s" },
        shape.depth
    );
    Ok(())
}

/// Render `value` as an indented tree, one line per value.
pub fn render_tree(value: &Value, max_items: usize) -> String {
    let mut out = String::new();
    render(&mut out, None, value, 0, max_items);
    out
}

fn render(out: &mut String, label: Option<String>, value: &Value, indent: usize, max_items: usize) {
    let pad = "  ".repeat(indent);
    let label = label.map(|l| format!("{l}: ")).unwrap_or_default();
    let _ = writeln!(out, "{pad}{label}{}", describe(value));

    match value {
        Value::List(items) => {
            for (idx, item) in items.iter().take(max_items).enumerate() {
                render(out, Some(format!("[{idx}]")), item, indent + 1, max_items);
            }
            elide(out, indent + 1, items.len(), max_items);
        }
        Value::Dict(entries) => {
            for (key, item) in entries.iter().take(max_items) {
                render(out, Some(preview(key)), item, indent + 1, max_items);
            }
            elide(out, indent + 1, entries.len(), max_items);
        }
        Value::Bytes(_) | Value::Integer(_) | Value::Unsigned(_) => {}
    }
}

fn elide(out: &mut String, indent: usize, len: usize, max_items: usize) {
    if len > max_items {
        let _ = writeln!(out, "{}… {} more", "  ".repeat(indent), len - max_items);
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::Bytes(b) => format!(
            "byte string ({} byte{}) {}",
            b.len(),
            if b.len() == 1 { "" } else { "s" },
            preview(b)
        ),
        Value::Integer(i) => format!("integer {i}"),
        Value::Unsigned(u) => format!("integer {u}"),
        Value::List(items) => format!(
            "list ({} item{})",
            items.len(),
            if items.len() == 1 { "" } else { "s" }
        ),
        Value::Dict(entries) => format!(
            "dictionary ({} entr{})",
            entries.len(),
            if entries.len() == 1 { "y" } else { "ies" }
        ),
    }
}

/// Quoted text for UTF-8 content, truncated hex otherwise.
fn preview(bytes: &ByteString) -> String {
    match bytes.as_str() {
        Some(s) if s.chars().count() > PREVIEW_CHARS => {
            let head: String = s.chars().take(PREVIEW_CHARS).collect();
            format!("{head:?}…")
        }
        Some(s) => format!("{s:?}"),
        None if bytes.len() > PREVIEW_BYTES => {
            format!("0x{}…", hex::encode(&bytes[..PREVIEW_BYTES]))
        }
        None => format!("0x{}", hex::encode(bytes)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tree_lists_every_level() {
        let value = bencode_decoder::decode(b"d4:name4:demo5:piecel2:\xff\x00i-3eee").unwrap();
        assert_eq!(
            render_tree(&value, 20),
            "dictionary (2 entries)\n\
             \x20 \"name\": byte string (4 bytes) \"demo\"\n\
             \x20 \"piece\": list (2 items)\n\
             \x20   [0]: byte string (2 bytes) 0xff00\n\
             \x20   [1]: integer -3\n"
        );
    }

    #[test]
    fn long_containers_are_elided() {
        let value = Value::from(vec![1i64, 2, 3, 4, 5]);
        let tree = render_tree(&value, 2);
        assert!(tree.starts_with("list (5 items)\n"));
        assert!(tree.contains("  [1]: integer 2\n"));
        assert!(!tree.contains("[2]"));
        assert!(tree.ends_with("  … 3 more\n"));
    }

    #[test]
    fn previews_truncate() {
        let long = ByteString::from("x".repeat(100));
        assert_eq!(preview(&long), format!("{:?}…", "x".repeat(PREVIEW_CHARS)));

        let binary = ByteString::from(vec![0xABu8; 40]);
        assert_eq!(preview(&binary), format!("0x{}…", "ab".repeat(PREVIEW_BYTES)));
    }
}

/// Implementation of `bencode validate`.
///
/// Runs a full decode with the configured limits and reports either a
/// series of success checkmarks (`✓`) or a diagnostic failure line (`✗`).
/// The command exits with code 0 on a valid file and code 1 on any error
/// (the main dispatcher in `main.rs` converts `Err` to exit code 1).
///
/// # Success output
///
/// ```text
/// ✓ Syntax: dictionary parsed from 275 bytes
/// ✓ Structure: 11 values, nesting depth 2 (limit 256)
/// ✓ Trailing data: none
/// ```
///
/// # Failure output
///
/// ```text
/// ✗ Error at offset 3: byte string at offset 3 declares 9 bytes but only 5 remain
/// ```
use std::fs;

use anyhow::{Context, Result, anyhow};
use bencode_decoder::{Decoder, DecoderConfig, TrailingData};
use bencode_types::Value;

use crate::ValidateArgs;

/// Size of a decoded value tree.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Shape {
    /// Every value in the tree, containers included. Keys are not counted.
    pub values: usize,
    /// Deepest container nesting; scalars alone are depth 0.
    pub depth: usize,
}

/// Walk `value` and measure it.
pub fn measure(value: &Value) -> Shape {
    fn walk(value: &Value, depth: usize, shape: &mut Shape) {
        shape.values += 1;
        let children: Box<dyn Iterator<Item = &Value>> = match value {
            Value::List(items) => Box::new(items.iter()),
            Value::Dict(entries) => Box::new(entries.values()),
            _ => return,
        };
        shape.depth = shape.depth.max(depth + 1);
        for child in children {
            walk(child, depth + 1, shape);
        }
    }

    let mut shape = Shape::default();
    walk(value, 0, &mut shape);
    shape
}

/// Run the `bencode validate` command.
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails to decode.
pub fn run(args: &ValidateArgs, config: DecoderConfig) -> Result<()> {
    let bytes =
        fs::read(&args.file).with_context(|| format!("cannot read {}", args.file.display()))?;

    match Decoder::new(config).decode(&bytes) {
        Ok(value) => {
            let shape = measure(&value);
            println!("✓ Syntax: {} parsed from {} bytes", value.kind(), bytes.len());
            println!(
                "✓ Structure: {} value{}, nesting depth {} (limit {})",
                shape.values,
                if shape.values == 1 { "" } else { "s" },
                shape.depth,
                config.max_depth
            );
            match config.trailing_data {
                TrailingData::Reject => println!("✓ Trailing data: none"),
                TrailingData::Ignore => println!("✓ Trailing data: ignored"),
            }
            Ok(())
        }

        Err(e) => {
            match e.offset() {
                Some(offset) => println!("✗ Error at offset {offset}: {e}"),
                None => println!("✗ Error: {e}"),
            }
            Err(anyhow!("validation failed"))
        }
    }
}

/// Implementation of `bencode decode`.
///
/// Decodes a Bencode file with the configured [`Decoder`] and renders the
/// value as JSON on stdout (or to `-o <file>`).
///
/// ```text
/// ┌──────────────────┬────────────────────────────────────────┐
/// │ Bencode          │ JSON                                   │
/// ├──────────────────┼────────────────────────────────────────┤
/// │ UTF-8 string     │ string ("0x<hex>" if it starts "0x")   │
/// │ binary string    │ "0x<hex>"                              │
/// │ integer          │ number                                 │
/// │ list             │ array                                  │
/// │ dictionary       │ object (non-UTF-8 keys as "0x<hex>")   │
/// └──────────────────┴────────────────────────────────────────┘
/// ```
use std::fs;
use std::io::{self, Write as _};

use anyhow::{Context, Result};
use bencode_decoder::{Decoder, DecoderConfig};

use crate::DecodeArgs;
use crate::json;

/// Run the `bencode decode` command.
///
/// # Errors
///
/// Returns an error if the file cannot be read, the payload is not a
/// single well-formed Bencode value, two dictionary keys render to the
/// same JSON key, or the output cannot be written.
pub fn run(args: &DecodeArgs, config: DecoderConfig) -> Result<()> {
    let bytes =
        fs::read(&args.file).with_context(|| format!("cannot read {}", args.file.display()))?;
    let value = Decoder::new(config)
        .decode(&bytes)
        .with_context(|| format!("failed to decode {}", args.file.display()))?;

    let document = json::to_json(&value)
        .with_context(|| format!("cannot render {} as JSON", args.file.display()))?;
    let mut rendered = if args.pretty {
        serde_json::to_string_pretty(&document)?
    } else {
        serde_json::to_string(&document)?
    };
    rendered.push('\n');

    match &args.output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("cannot write {}", path.display()))?,
        None => io::stdout()
            .write_all(rendered.as_bytes())
            .context("cannot write to stdout")?,
    }
    Ok(())
}

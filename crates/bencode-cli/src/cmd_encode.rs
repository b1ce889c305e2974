/// Implementation of `bencode encode`.
///
/// Parses a JSON document, converts it with [`json::from_json`] and writes
/// the canonical Bencode encoding to `-o <file>` or stdout. Object keys
/// are re-sorted by byte order, so key order in the JSON source never
/// affects the output.
///
/// ```text
/// $ echo '{"spam": ["a", "b"], "cow": "moo"}' > in.json
/// $ bencode encode in.json
/// d3:cow3:moo4:spaml1:a1:bee
/// ```
use std::fs::{self, File};
use std::io::{self, BufWriter, Write as _};

use anyhow::{Context, Result};
use bencode_encoder::BencodeEncoder;
use tracing::debug;

use crate::EncodeArgs;
use crate::json;

/// Run the `bencode encode` command.
///
/// # Errors
///
/// Returns an error if the input cannot be read or parsed as JSON, if it
/// contains a float, boolean or null, or if the output cannot be written.
pub fn run(args: &EncodeArgs) -> Result<()> {
    let source = fs::read_to_string(&args.input)
        .with_context(|| format!("cannot read {}", args.input.display()))?;
    let document: serde_json::Value = serde_json::from_str(&source)
        .with_context(|| format!("invalid JSON in {}", args.input.display()))?;
    let value = json::from_json(&document)
        .with_context(|| format!("cannot encode {}", args.input.display()))?;

    let mut encoder = BencodeEncoder::new();
    let written = match &args.output {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("cannot create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            let written = encoder.write_to(&value, &mut writer)?;
            writer
                .flush()
                .with_context(|| format!("cannot write {}", path.display()))?;
            written
        }
        None => {
            let mut stdout = io::stdout().lock();
            let written = encoder.write_to(&value, &mut stdout)?;
            stdout.flush().context("cannot write to stdout")?;
            written
        }
    };

    debug!(bytes = written, input = %args.input.display(), "encoded JSON document");
    Ok(())
}

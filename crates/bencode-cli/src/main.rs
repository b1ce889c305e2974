/// Bencode command-line tool: convert between JSON and Bencode, and
/// validate or inspect `.torrent`-style Bencode files.
///
/// # Command overview
///
/// ```text
/// bencode <COMMAND> [OPTIONS]
///
/// Commands:
///   encode     Convert a JSON document to Bencode
///   decode     Convert a Bencode file to JSON
///   validate   Check that a file holds exactly one well-formed value
///   inspect    Print an indented tree of kinds, lengths and values
///   help       Print help information
///
/// Global options:
///   -v, --verbose          Raise log level (-v debug, -vv trace)
///   --max-depth N          Maximum container nesting (default 256)
///   --reject-duplicates    Fail on repeated dictionary keys
///   --allow-trailing       Ignore bytes after the first value
///   -h, --help             Print help
///   -V, --version          Print version
/// ```
///
/// # Exit codes
///
/// | Code | Meaning                                 |
/// |------|-----------------------------------------|
/// | 0    | Success                                 |
/// | 1    | Error (I/O failure, invalid file, etc.) |
///
/// All error details and logs are written to stderr so stdout can be
/// piped cleanly.
use std::path::PathBuf;
use std::process;

use bencode_decoder::{DEFAULT_MAX_DEPTH, DecoderConfig, DuplicateKeys, TrailingData};
use clap::{ArgAction, Parser, Subcommand};
use tracing::Level;

mod cmd_decode;
mod cmd_encode;
mod cmd_inspect;
mod cmd_validate;
mod json;

// ── CLI root ──────────────────────────────────────────────────────────────────

/// The Bencode command-line tool.
#[derive(Parser)]
#[command(name = "bencode", version, about = "Bencode encoder, decoder and inspector")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Raise log verbosity (repeat for more detail).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Maximum nesting depth of lists and dictionaries.
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Fail when a dictionary repeats a key instead of keeping the last value.
    #[arg(long, global = true)]
    reject_duplicates: bool,

    /// Ignore bytes following the first value instead of failing.
    #[arg(long, global = true)]
    allow_trailing: bool,
}

impl Cli {
    fn decoder_config(&self) -> DecoderConfig {
        DecoderConfig::default()
            .with_max_depth(self.max_depth)
            .with_duplicate_keys(if self.reject_duplicates {
                DuplicateKeys::Reject
            } else {
                DuplicateKeys::LastWins
            })
            .with_trailing_data(if self.allow_trailing {
                TrailingData::Ignore
            } else {
                TrailingData::Reject
            })
    }

    fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Convert a JSON document to Bencode.
    Encode(EncodeArgs),
    /// Convert a Bencode file to JSON.
    Decode(DecodeArgs),
    /// Check that a file holds exactly one well-formed Bencode value.
    Validate(ValidateArgs),
    /// Print an indented tree of kinds, lengths and values.
    Inspect(InspectArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Arguments for `bencode encode`.
///
/// ```text
/// ┌─────────────┬────────────────────────────────────────────┐
/// │ JSON        │ Bencode                                    │
/// ├─────────────┼────────────────────────────────────────────┤
/// │ string      │ byte string (UTF-8 bytes)                  │
/// │ integer     │ integer (i64 or u64 range)                 │
/// │ array       │ list                                       │
/// │ object      │ dictionary, keys sorted                    │
/// │ float, bool,│ error naming the JSON path                 │
/// │ null        │                                            │
/// └─────────────┴────────────────────────────────────────────┘
/// ```
#[derive(clap::Args)]
pub struct EncodeArgs {
    /// Path to the JSON document.
    pub input: PathBuf,

    /// Write Bencode to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `bencode decode`.
///
/// Byte strings that are valid UTF-8 become JSON strings; anything else,
/// and any string that itself starts with `0x`, is rendered as `"0x<hex>"`.
#[derive(clap::Args)]
pub struct DecodeArgs {
    /// Path to the Bencode file.
    pub file: PathBuf,

    /// Indent the JSON output.
    #[arg(long)]
    pub pretty: bool,

    /// Write JSON to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `bencode validate`.
#[derive(clap::Args)]
pub struct ValidateArgs {
    /// Path to the Bencode file.
    pub file: PathBuf,
}

/// Arguments for `bencode inspect`.
#[derive(clap::Args)]
pub struct InspectArgs {
    /// Path to the Bencode file.
    pub file: PathBuf,

    /// Show at most this many items per list or dictionary.
    #[arg(long, default_value_t = 20)]
    pub max_items: usize,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn init_logging(level: Level) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level());
    let config = cli.decoder_config();

    let result = match cli.command {
        Commands::Encode(args) => cmd_encode::run(&args),
        Commands::Decode(args) => cmd_decode::run(&args, config),
        Commands::Validate(args) => cmd_validate::run(&args, config),
        Commands::Inspect(args) => cmd_inspect::run(&args, config),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

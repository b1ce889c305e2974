#![warn(clippy::pedantic)]

pub mod config;
pub mod decoder;
pub mod error;

pub use config::{DEFAULT_MAX_DEPTH, DecoderConfig, DuplicateKeys, TrailingData};
pub use decoder::{Decoder, decode, decode_from_reader};
pub use error::{DecodeError, DecodeErrorKind};

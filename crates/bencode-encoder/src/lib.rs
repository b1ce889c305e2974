#![warn(clippy::pedantic)]

pub mod encoder;
pub mod error;

pub use encoder::{BencodeEncoder, encode, encode_into, encoded_len, to_bytes};
pub use error::EncodeError;

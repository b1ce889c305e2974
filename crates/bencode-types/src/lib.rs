#![warn(clippy::pedantic)]

pub mod byte_string;
pub mod convert;
pub mod error;
pub mod value;

pub use byte_string::ByteString;
pub use error::TypeError;
pub use value::{Value, ValueKind};

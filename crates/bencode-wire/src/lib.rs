#![warn(clippy::pedantic)]

pub mod decimal;
pub mod error;
pub mod reader;
pub mod token;

pub use decimal::Integer;
pub use error::WireError;
pub use reader::ByteReader;
pub use token::TokenKind;

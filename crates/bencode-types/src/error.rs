use crate::value::ValueKind;

/// Errors converting a [`Value`](crate::Value) into a native Rust type.
///
/// Conversion *into* the model is infallible; these only arise when
/// narrowing out of it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypeError {
    /// The value is a different kind than the target type needs.
    #[error("expected {expected}, found {found}")]
    UnexpectedKind {
        expected: ValueKind,
        found: ValueKind,
    },

    /// The integer does not fit the requested native width.
    #[error("integer {value} does not fit in {target}")]
    IntegerOutOfRange { value: i128, target: &'static str },

    /// A byte string was requested as text but is not UTF-8.
    #[error("byte string is not valid UTF-8")]
    InvalidUtf8,
}

/// Errors that can occur while writing an encoded value to a sink.
///
/// Encoding itself is total: every [`Value`](bencode_types::Value) has
/// exactly one canonical byte form, and [`encode`](crate::encode) returns
/// it without a `Result`. The only failure is the destination refusing the
/// bytes in [`BencodeEncoder::write_to`](crate::BencodeEncoder::write_to).
///
/// ```text
///   EncodeError
///   └── Io(std::io::Error)   ← from the destination writer
/// ```
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

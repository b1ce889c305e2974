/// Nesting depth allowed by [`DecoderConfig::default`].
///
/// The top-level container counts as depth 1, so `256` accepts 256
/// nested `l`/`d` openers and rejects the 257th.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// What the slice decoder does with bytes left after the first value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TrailingData {
    /// Fail with [`DecodeError::TrailingData`](crate::DecodeError::TrailingData).
    #[default]
    Reject,
    /// Return the first value and ignore the rest.
    Ignore,
}

/// How a dictionary that repeats a key is decoded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicateKeys {
    /// The later value replaces the earlier one.
    #[default]
    LastWins,
    /// Fail with [`DecodeError::DuplicateKey`](crate::DecodeError::DuplicateKey).
    Reject,
}

/// Hardening knobs for [`Decoder`](crate::Decoder).
///
/// ```text
/// ┌────────────────┬──────────────────┬──────────────────────────────┐
/// │ Field          │ Default          │ Effect                       │
/// ├────────────────┼──────────────────┼──────────────────────────────┤
/// │ max_depth      │ 256              │ NestingTooDeep above limit   │
/// │ trailing_data  │ Reject           │ slice input only             │
/// │ duplicate_keys │ LastWins         │ Reject → DuplicateKey        │
/// └────────────────┴──────────────────┴──────────────────────────────┘
/// ```
///
/// ```rust
/// use bencode_decoder::{DecoderConfig, DuplicateKeys};
///
/// let config = DecoderConfig::default()
///     .with_max_depth(16)
///     .with_duplicate_keys(DuplicateKeys::Reject);
/// assert_eq!(config.max_depth, 16);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecoderConfig {
    pub max_depth: usize,
    pub trailing_data: TrailingData,
    pub duplicate_keys: DuplicateKeys,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            trailing_data: TrailingData::default(),
            duplicate_keys: DuplicateKeys::default(),
        }
    }
}

impl DecoderConfig {
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn with_trailing_data(mut self, trailing_data: TrailingData) -> Self {
        self.trailing_data = trailing_data;
        self
    }

    #[must_use]
    pub fn with_duplicate_keys(mut self, duplicate_keys: DuplicateKeys) -> Self {
        self.duplicate_keys = duplicate_keys;
        self
    }
}

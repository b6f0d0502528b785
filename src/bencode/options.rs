/// Default maximum nesting depth accepted by the decoder.
pub const MAX_DEPTH: usize = 256;

/// Longest digit span that can hold a signed 64-bit decimal, sign included.
pub(crate) const MAX_NUMBER_DIGITS: usize = 20;

/// Decoder configuration.
///
/// The defaults are lenient: `i-0e`, `i03e` and `03:abc` are all accepted.
/// [`DecodeOptions::strict`] enables the canonical-form checks.
///
/// # Examples
///
/// ```
/// use bdecode::bencode::{DecodeOptions, Decoder};
///
/// let lenient = Decoder::default();
/// assert_eq!(lenient.decode(b"i-0e").unwrap().as_integer(), Some(0));
///
/// let strict = Decoder::new(DecodeOptions::strict());
/// assert!(strict.decode(b"i-0e").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Maximum nesting depth before decoding fails.
    pub max_depth: usize,
    /// Reject `-0` and leading zeros in integers.
    pub strict_integers: bool,
    /// Reject leading zeros in byte-string lengths.
    pub strict_lengths: bool,
}

impl DecodeOptions {
    pub const fn new() -> Self {
        Self {
            max_depth: MAX_DEPTH,
            strict_integers: false,
            strict_lengths: false,
        }
    }

    /// Options that only accept the canonical encoding of each token.
    pub const fn strict() -> Self {
        Self {
            max_depth: MAX_DEPTH,
            strict_integers: true,
            strict_lengths: true,
        }
    }

    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub const fn with_strict_integers(mut self, strict: bool) -> Self {
        self.strict_integers = strict;
        self
    }

    pub const fn with_strict_lengths(mut self, strict: bool) -> Self {
        self.strict_lengths = strict;
        self
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self::new()
    }
}

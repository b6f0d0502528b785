use super::cursor::Cursor;
use super::error::BencodeError;
use super::options::{DecodeOptions, MAX_NUMBER_DIGITS};
use super::value::{Value, ValueRef};
use bytes::Bytes;
use std::iter::FusedIterator;
use tracing::{debug, trace};

const DEFAULT_DECODER: Decoder = Decoder::new(DecodeOptions::new());

/// Decodes one value from the start of `data`.
///
/// Bytes after the value are ignored; use [`decode_with_offset`] to find
/// out where the value ended, or [`Decoder::decode_exact`] to reject them.
///
/// # Examples
///
/// ```
/// use bdecode::bencode::{decode, Value};
///
/// assert_eq!(decode(b"i-42e").unwrap(), Value::Integer(-42));
/// assert_eq!(decode(b"3:abcxyz").unwrap(), Value::string("abc"));
/// assert!(decode(b"le").is_err());
/// ```
pub fn decode(data: &[u8]) -> Result<Value, BencodeError> {
    DEFAULT_DECODER.decode(data)
}

/// Decodes one value starting at `*offset` and moves `*offset` past it.
///
/// `*offset` is left untouched when decoding fails.
///
/// # Examples
///
/// ```
/// use bdecode::bencode::{decode_with_offset, Value};
///
/// let data = b"i1e3:two";
/// let mut offset = 0;
/// assert_eq!(decode_with_offset(data, &mut offset).unwrap(), Value::Integer(1));
/// assert_eq!(offset, 3);
/// assert_eq!(decode_with_offset(data, &mut offset).unwrap(), Value::string("two"));
/// assert_eq!(offset, data.len());
/// ```
pub fn decode_with_offset(data: &[u8], offset: &mut usize) -> Result<Value, BencodeError> {
    DEFAULT_DECODER.decode_with_offset(data, offset)
}

/// Zero-copy form of [`decode`]: byte strings borrow from `data`.
pub fn decode_ref(data: &[u8]) -> Result<ValueRef<'_>, BencodeError> {
    DEFAULT_DECODER.decode_ref(data)
}

/// Zero-copy form of [`decode_with_offset`].
pub fn decode_ref_with_offset<'a>(
    data: &'a [u8],
    offset: &mut usize,
) -> Result<ValueRef<'a>, BencodeError> {
    DEFAULT_DECODER.decode_ref_with_offset(data, offset)
}

/// A bencode decoder with a fixed set of [`DecodeOptions`].
///
/// The free functions in this module use `Decoder::default()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Decoder {
    options: DecodeOptions,
}

impl Decoder {
    pub const fn new(options: DecodeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    pub fn decode(&self, data: &[u8]) -> Result<Value, BencodeError> {
        let (value, _) = self.scan(data, 0)?;
        to_owned_value(value)
    }

    pub fn decode_with_offset(
        &self,
        data: &[u8],
        offset: &mut usize,
    ) -> Result<Value, BencodeError> {
        let (value, end) = self.scan(data, *offset)?;
        let value = to_owned_value(value)?;
        *offset = end;
        Ok(value)
    }

    pub fn decode_ref<'a>(&self, data: &'a [u8]) -> Result<ValueRef<'a>, BencodeError> {
        self.scan(data, 0).map(|(value, _)| value)
    }

    pub fn decode_ref_with_offset<'a>(
        &self,
        data: &'a [u8],
        offset: &mut usize,
    ) -> Result<ValueRef<'a>, BencodeError> {
        let (value, end) = self.scan(data, *offset)?;
        *offset = end;
        Ok(value)
    }

    /// Decodes one value and fails if any bytes follow it.
    ///
    /// # Examples
    ///
    /// ```
    /// use bdecode::bencode::{Decoder, ErrorKind};
    ///
    /// let decoder = Decoder::default();
    /// assert!(decoder.decode_exact(b"i42e").is_ok());
    ///
    /// let err = decoder.decode_exact(b"i42eextra").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::TrailingData);
    /// assert_eq!(err.offset(), Some(4));
    /// ```
    pub fn decode_exact(&self, data: &[u8]) -> Result<Value, BencodeError> {
        let (value, end) = self.scan(data, 0)?;
        if end != data.len() {
            debug!("trailing data after bencode value at offset {}", end);
            return Err(BencodeError::TrailingData { offset: end });
        }
        to_owned_value(value)
    }

    /// Returns an iterator over consecutive values in `data`.
    ///
    /// The iterator ends when the input is exhausted, or right after
    /// yielding the first error.
    ///
    /// # Examples
    ///
    /// ```
    /// use bdecode::bencode::{Decoder, Value};
    ///
    /// let values: Vec<_> = Decoder::default()
    ///     .iter(b"i1e1:ai-2e")
    ///     .collect::<Result<_, _>>()
    ///     .unwrap();
    /// assert_eq!(values, vec![Value::Integer(1), Value::string("a"), Value::Integer(-2)]);
    /// ```
    pub fn iter<'a>(&self, data: &'a [u8]) -> Values<'a> {
        Values {
            decoder: *self,
            data,
            offset: 0,
            done: false,
        }
    }

    fn scan<'a>(
        &self,
        data: &'a [u8],
        offset: usize,
    ) -> Result<(ValueRef<'a>, usize), BencodeError> {
        let mut cursor = Cursor::new(data, offset).ok_or(BencodeError::InvalidOffset {
            offset,
            len: data.len(),
        })?;

        match dispatch(&mut cursor, 0, &self.options) {
            Ok(value) => {
                trace!("decoded bencode token at {}..{}", offset, cursor.pos());
                Ok((value, cursor.pos()))
            }
            Err(e) => {
                debug!("failed to decode bencode value at offset {}: {}", offset, e);
                Err(e)
            }
        }
    }
}

/// Iterator over consecutive top-level values, created by [`Decoder::iter`].
#[derive(Debug, Clone)]
pub struct Values<'a> {
    decoder: Decoder,
    data: &'a [u8],
    offset: usize,
    done: bool,
}

impl Values<'_> {
    /// Offset of the first byte not yet consumed.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl Iterator for Values<'_> {
    type Item = Result<Value, BencodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.offset >= self.data.len() {
            return None;
        }
        let result = self.decoder.decode_with_offset(self.data, &mut self.offset);
        self.done = result.is_err();
        Some(result)
    }
}

impl FusedIterator for Values<'_> {}

/// Decodes the value at the cursor, `depth` levels below the top.
///
/// On success the cursor points just past the consumed token.
pub(super) fn dispatch<'a>(
    cursor: &mut Cursor<'a>,
    depth: usize,
    options: &DecodeOptions,
) -> Result<ValueRef<'a>, BencodeError> {
    let depth = depth.saturating_add(1);
    if depth > options.max_depth {
        return Err(BencodeError::DepthExceeded { depth });
    }

    match cursor.peek() {
        None => Err(BencodeError::Empty {
            offset: cursor.pos(),
        }),
        Some(b'i') => read_integer(cursor, options),
        // A bare ':' is a byte string with a missing length.
        Some(b'0'..=b'9' | b':') => read_byte_string(cursor, options),
        Some(byte) => Err(BencodeError::UnknownType {
            offset: cursor.pos(),
            byte,
        }),
    }
}

fn read_integer<'a>(
    cursor: &mut Cursor<'a>,
    options: &DecodeOptions,
) -> Result<ValueRef<'a>, BencodeError> {
    let start = cursor.pos();
    let overflow = BencodeError::Overflow { offset: start };

    let end = cursor.find(start + 1, b'e').ok_or(overflow.clone())?;
    let digits = cursor.slice(start + 1..end).ok_or(overflow)?;

    let value = parse_integer(digits, options.strict_integers).map_err(|reason| {
        BencodeError::MalformedNumber {
            offset: start,
            reason,
        }
    })?;

    cursor.advance_to(end + 1);
    Ok(ValueRef::Integer(value))
}

fn read_byte_string<'a>(
    cursor: &mut Cursor<'a>,
    options: &DecodeOptions,
) -> Result<ValueRef<'a>, BencodeError> {
    let start = cursor.pos();
    let overflow = BencodeError::Overflow { offset: start };

    let colon = cursor.find(start, b':').ok_or(overflow.clone())?;
    let header = cursor.slice(start..colon).ok_or(overflow)?;

    let len = parse_length(header, options.strict_lengths).map_err(|reason| {
        BencodeError::MalformedNumber {
            offset: start,
            reason,
        }
    })?;

    let payload_start = colon + 1;
    let out_of_bounds = BencodeError::LengthOutOfBounds {
        offset: start,
        len,
        available: cursor.len() - payload_start,
    };
    let end = payload_start
        .checked_add(len)
        .filter(|&end| end <= cursor.len())
        .ok_or(out_of_bounds.clone())?;
    let payload = cursor.slice(payload_start..end).ok_or(out_of_bounds)?;

    cursor.advance_to(end);
    Ok(ValueRef::Bytes(payload))
}

/// Parses the digit span of an integer token.
fn parse_integer(digits: &[u8], strict: bool) -> Result<i64, &'static str> {
    if digits.is_empty() {
        return Err("empty integer");
    }
    if digits.len() > MAX_NUMBER_DIGITS {
        return Err("integer too long");
    }
    if digits[0] == b'+' {
        return Err("explicit plus sign");
    }

    let magnitude = digits.strip_prefix(b"-").unwrap_or(digits);
    if magnitude.is_empty() {
        return Err("missing digits after sign");
    }
    if !magnitude.iter().all(u8::is_ascii_digit) {
        return Err("non-digit character");
    }
    if strict {
        if digits == b"-0" {
            return Err("negative zero");
        }
        if magnitude.len() > 1 && magnitude[0] == b'0' {
            return Err("leading zero");
        }
    }

    let s = std::str::from_utf8(digits).map_err(|_| "non-digit character")?;
    s.parse::<i64>().map_err(|_| "integer out of range")
}

/// Parses the length prefix of a byte string.
fn parse_length(header: &[u8], strict: bool) -> Result<usize, &'static str> {
    if header.is_empty() {
        return Err("missing string length");
    }
    if header.len() > MAX_NUMBER_DIGITS {
        return Err("string length too long");
    }
    if !header.iter().all(u8::is_ascii_digit) {
        return Err("non-digit character in string length");
    }
    if strict && header.len() > 1 && header[0] == b'0' {
        return Err("leading zero in string length");
    }

    let s = std::str::from_utf8(header).map_err(|_| "non-digit character in string length")?;
    let len: u64 = s.parse().map_err(|_| "string length out of range")?;
    usize::try_from(len).map_err(|_| "string length out of range")
}

fn to_owned_value(value: ValueRef<'_>) -> Result<Value, BencodeError> {
    match value {
        ValueRef::Integer(i) => Ok(Value::Integer(i)),
        ValueRef::Bytes(payload) => copy_payload(payload).map(Value::Bytes),
    }
}

/// Copies a payload out of the input, reporting allocator refusal as an error.
fn copy_payload(payload: &[u8]) -> Result<Bytes, BencodeError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(payload.len())
        .map_err(|_| BencodeError::OutOfMemory { len: payload.len() })?;
    buf.extend_from_slice(payload);
    Ok(Bytes::from(buf))
}

//! Bencode scalar decoding ([BEP-3]).
//!
//! Bencode is the serialization format used throughout BitTorrent for storing
//! and transmitting structured data, including `.torrent` files and tracker
//! responses. This module decodes its two scalar forms from untrusted input.
//!
//! # Data Types
//!
//! | Type | Format | Example |
//! |------|--------|---------|
//! | Integer | `i<number>e` | `i42e` → 42 |
//! | Byte String | `<length>:<data>` | `4:spam` → "spam" |
//!
//! Lists (`l...e`) and dictionaries (`d...e`) are not decoded; a value that
//! starts with `l` or `d` fails with [`BencodeError::UnknownType`].
//!
//! # Examples
//!
//! ## Decoding a single value
//!
//! ```
//! use bdecode::bencode::{decode, Value};
//!
//! let value = decode(b"i42e").unwrap();
//! assert_eq!(value.as_integer(), Some(42));
//!
//! let value = decode(b"4:spam").unwrap();
//! assert_eq!(value.as_str(), Some("spam"));
//! ```
//!
//! ## Resuming from an offset
//!
//! The decoder consumes exactly one value. [`decode_with_offset`] reports
//! where it stopped, so trailing data can be detected or decoded in turn:
//!
//! ```
//! use bdecode::bencode::{decode_with_offset, Value};
//!
//! let data = b"i7e2:hi";
//! let mut offset = 0;
//! let first = decode_with_offset(data, &mut offset).unwrap();
//! assert_eq!(first, Value::Integer(7));
//! assert!(offset < data.len());
//! ```
//!
//! ## Zero-copy decoding
//!
//! ```
//! use bdecode::bencode::{decode_ref, ValueRef};
//!
//! let data = b"5:hello";
//! assert_eq!(decode_ref(data).unwrap(), ValueRef::Bytes(b"hello"));
//! ```
//!
//! ## Canonical form
//!
//! By default the decoder is lenient about `i-0e` and leading zeros. A
//! [`Decoder`] built from [`DecodeOptions::strict`] rejects both.
//!
//! # Error Handling
//!
//! - [`BencodeError::Overflow`] - Input ended inside a token
//! - [`BencodeError::Empty`] - No value left to decode
//! - [`BencodeError::MalformedNumber`] - Bad integer or length prefix
//! - [`BencodeError::LengthOutOfBounds`] - Byte string runs past the input
//! - [`BencodeError::UnknownType`] - Unrecognized leading byte
//! - [`BencodeError::DepthExceeded`] - Recursion limit exceeded (max 256 levels)
//! - [`BencodeError::OutOfMemory`] - Payload allocation refused
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

mod cursor;
mod decode;
mod error;
mod options;
mod value;

pub use decode::{decode, decode_ref, decode_ref_with_offset, decode_with_offset, Decoder, Values};
pub use error::{BencodeError, ErrorKind};
pub use options::{DecodeOptions, MAX_DEPTH};
pub use value::{Released, Value, ValueRef};

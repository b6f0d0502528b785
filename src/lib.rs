//! bdecode - A bounds-checked bencode decoder
//!
//! Decodes single bencode integers and byte strings from untrusted byte
//! buffers and reports where each value ends, so callers can resume or
//! reject trailing data.
//!
//! # Modules
//!
//! - [`bencode`] - BEP-3 integer and byte-string decoding

pub mod bencode;

pub use bencode::{
    decode, decode_ref, decode_ref_with_offset, decode_with_offset, BencodeError, DecodeOptions,
    Decoder, ErrorKind, Value, ValueRef,
};

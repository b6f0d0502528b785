#![no_main]

use bdecode::bencode::{decode_ref_with_offset, decode_with_offset, DecodeOptions, Decoder};
use libfuzzer_sys::fuzz_target;

// Fuzz target: single-value decode from raw bytes.
//
// Checks that the owned and zero-copy forms agree, that a successful decode
// moves the offset forward without passing the end, and that the strict
// decoder never accepts anything the lenient one rejects.
fuzz_target!(|data: &[u8]| {
    let mut offset = 0;
    let owned = decode_with_offset(data, &mut offset);

    let mut ref_offset = 0;
    let borrowed = decode_ref_with_offset(data, &mut ref_offset);

    match (&owned, &borrowed) {
        (Ok(value), Ok(value_ref)) => {
            assert_eq!(*value, value_ref.to_value());
            assert_eq!(offset, ref_offset);
            assert!(offset > 0 && offset <= data.len());
        }
        (Err(a), Err(b)) => {
            assert_eq!(a, b);
            assert_eq!(offset, 0);
        }
        _ => panic!("owned and borrowed decoders disagree"),
    }

    if Decoder::new(DecodeOptions::strict()).decode(data).is_ok() {
        assert!(owned.is_ok());
    }
});

#![no_main]

use bdecode::bencode::Decoder;
use libfuzzer_sys::fuzz_target;

// Fuzz target: decode consecutive values until the input runs out or the
// first error, checking that every step makes progress.
fuzz_target!(|data: &[u8]| {
    let decoder = Decoder::default();
    let mut values = decoder.iter(data);
    let mut last = 0;
    while let Some(result) = values.next() {
        if result.is_ok() {
            assert!(values.offset() > last);
            last = values.offset();
        }
    }
    assert!(values.offset() <= data.len());
});

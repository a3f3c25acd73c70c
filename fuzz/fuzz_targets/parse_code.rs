#![no_main]

use libfuzzer_sys::fuzz_target;
use redeemcode::{Alphabet, Codec, KeyTable};

fuzz_target!(|data: &[u8]| {
    // Fuzz the parser with arbitrary input; it must reject without panicking.
    let Ok(input) = core::str::from_utf8(data) else {
        return;
    };
    let table = KeyTable::new([[7u16; 8]; 16]).expect("fixed table validates");
    let codec = Codec::new(table, Alphabet::standard());
    let _ = codec.parse(input);
});

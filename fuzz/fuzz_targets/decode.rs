#![no_main]

use libfuzzer_sys::fuzz_target;
use lzw::decoder::LzwDecoder;
use lzw::Decoder;

fuzz_target!(|data: &[u8]| {
    let mut stream: Vec<u8> = Vec::new();
    let mut decoder = LzwDecoder::new(data, &mut stream);
    let _ = decoder.decode();
});

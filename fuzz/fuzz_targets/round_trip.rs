#![no_main]

use libfuzzer_sys::fuzz_target;
use lzw::decoder::LzwDecoder;
use lzw::encoder::LzwEncoder;
use lzw::{Decoder, Encoder};

fuzz_target!(|data: &[u8]| {
    let mut compressed: Vec<u8> = Vec::new();

    {
        let mut encoder = LzwEncoder::new(data, &mut compressed);
        let written = encoder.encode().unwrap();
        assert_eq!(written, compressed.len());
    }

    let mut decompressed: Vec<u8> = Vec::new();
    {
        let mut decoder = LzwDecoder::new(&compressed, &mut decompressed);
        let (consumed, written) = decoder.decode().unwrap();
        assert_eq!(consumed, compressed.len());
        assert_eq!(written, decompressed.len());
    }
    assert_eq!(decompressed, data);
});

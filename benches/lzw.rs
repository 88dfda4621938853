//! Benchmark for the LZW encoder and decoder.

fn get_large_array(items: usize) -> Vec<u8> {
    let mut input = Vec::new();
    let mut v = 0;
    for i in 0..items {
        v += 3;
        input.push(((i ^ v) % 61) as u8);
    }
    input
}

fn encode_large_buffer() {
    let input = get_large_array(1_000_000);
    let mut compressed = Vec::new();
    let written = LzwEncoder::new(&input, &mut compressed).encode().unwrap();
    black_box(written);
}

fn round_trip_small_buffer() {
    let input = get_large_array(1_000);
    let mut compressed = Vec::new();
    let _ = LzwEncoder::new(&input, &mut compressed).encode().unwrap();
    let mut decompressed = Vec::new();
    let res = LzwDecoder::new(&compressed, &mut decompressed).decode();
    black_box(res.unwrap());
}

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lzw::decoder::LzwDecoder;
use lzw::encoder::LzwEncoder;
use lzw::{Decoder, Encoder};

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("round_trip_small_buffer", |b| {
        b.iter(round_trip_small_buffer)
    });
    c.bench_function("encode_large_buffer", |b| b.iter(encode_large_buffer));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

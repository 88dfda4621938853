//! A benchmark for the bit buffer.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lzw::bitbuffer::BitBuffer;

fn test_write_9bits() {
    let mut bv = BitBuffer::new();
    for i in 0..1_000_000 {
        bv.write_code(i, 9);
    }
    bv.flush();

    black_box(bv.len());
}

fn test_write_n_bits() {
    let mut bv = BitBuffer::new();
    for i in 0..1_000_000 {
        bv.write_code(i, 1 + i % 20);
    }
    bv.flush();

    black_box(bv.len());
}

fn test_read_n_bits() {
    let mut bv = BitBuffer::new();
    for i in 0..1_000_000 {
        bv.write_code(i, 9 + i % 12);
    }
    bv.flush();
    let packed = bv.take_output();

    let mut width = 9;
    let mut sum = 0u64;
    for byte in packed {
        bv.feed_byte(byte);
        while let Some(code) = bv.read_code(width) {
            sum += code as u64;
            width = 9 + (width - 8) % 12;
        }
    }

    black_box(sum);
}

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("write 9 bits", |b| b.iter(test_write_9bits));
    c.bench_function("write n bits", |b| b.iter(test_write_n_bits));
    c.bench_function("read n bits", |b| b.iter(test_read_n_bits));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

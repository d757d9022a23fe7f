use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pp_codec::{decode, encode, Lz78Codec};

fn generate_input(size_kb: usize) -> Vec<u8> {
    let base = b"the quick brown fox jumps over the lazy dog. pack my box with five dozen liquor jugs. sphinx of black quartz, judge my vow. ";
    let mut input = Vec::with_capacity(size_kb * 1024);
    while input.len() < size_kb * 1024 {
        input.extend_from_slice(base);
    }
    input.truncate(size_kb * 1024);
    input
}

fn bench_encode(c: &mut Criterion) {
    for &size_kb in &[1usize, 10, 100] {
        let input = generate_input(size_kb);
        c.bench_function(&format!("encode_{size_kb}kb"), |b| {
            b.iter(|| black_box(encode(black_box(&input))))
        });
    }
}

fn bench_decode(c: &mut Criterion) {
    let input = generate_input(10);
    let tokens = encode(&input);
    c.bench_function("decode_10kb", |b| {
        b.iter(|| black_box(decode(black_box(&tokens)).unwrap()))
    });
}

fn bench_roundtrip_capped(c: &mut Criterion) {
    let input = generate_input(10);
    let codec = Lz78Codec::capped(4096);
    c.bench_function("roundtrip_capped_10kb", |b| {
        b.iter(|| {
            let summary = codec.compress(black_box(&input));
            black_box(codec.decompress(&summary.tokens).unwrap())
        })
    });
}

criterion_group!(benches, bench_encode, bench_decode, bench_roundtrip_capped);
criterion_main!(benches);

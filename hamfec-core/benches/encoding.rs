use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hamfec_core::{decode, encode, nibble::decode_nibble};

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for size in [16usize, 64, 128, 255] {
        let payload = vec![0x42u8; size];

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &payload, |b, data| {
            b.iter(|| encode(black_box(data)).unwrap());
        });
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for size in [16usize, 64, 128, 255] {
        let payload = vec![0x42u8; size];
        let encoded = encode(&payload).unwrap();

        group.throughput(Throughput::Bytes(encoded.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &encoded, |b, data| {
            b.iter(|| decode(black_box(data)).unwrap());
        });
    }

    group.finish();
}

fn bench_decode_noisy(c: &mut Criterion) {
    // One flipped bit in every codeword forces the correction path everywhere.
    let payload = vec![0x42u8; 255];
    let mut encoded = encode(&payload).unwrap().to_vec();
    for cw in 0..2 * (payload.len() + 1) {
        let bit = cw * 7 + cw % 7;
        encoded[bit / 8] ^= 0x80 >> (bit % 8);
    }

    c.bench_function("decode_noisy_255", |b| {
        b.iter(|| decode(black_box(&encoded)).unwrap());
    });
}

fn bench_nibble(c: &mut Criterion) {
    c.bench_function("decode_nibble_all_words", |b| {
        b.iter(|| {
            for word in 0u8..128 {
                black_box(decode_nibble(black_box(word)));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_encode,
    bench_decode,
    bench_decode_noisy,
    bench_nibble
);
criterion_main!(benches);

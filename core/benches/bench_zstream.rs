use criterion::{black_box, criterion_group, criterion_main, Criterion};
use zstream_core::{compress, decompress_into, CompressStream, DecompressStream};

fn generate_payload(size_kb: usize) -> Vec<u8> {
    let base = b"The session manager drives an external block codec through bounded-memory \
incremental compress and decompress operations over arbitrarily large byte sequences. ";
    let mut data = Vec::with_capacity(size_kb * 1024);
    while data.len() < size_kb * 1024 {
        data.extend_from_slice(base);
    }
    data.truncate(size_kb * 1024);
    data
}

fn bench_oneshot(c: &mut Criterion) {
    let payload_1k = generate_payload(1);
    let payload_100k = generate_payload(100);

    c.bench_function("oneshot_compress_1kb", |b| {
        b.iter(|| black_box(compress(black_box(&payload_1k), 1)))
    });
    c.bench_function("oneshot_compress_100kb", |b| {
        b.iter(|| black_box(compress(black_box(&payload_100k), 1)))
    });

    let compressed = compress(&payload_100k, 1).expect("compression should succeed");
    c.bench_function("oneshot_decompress_100kb", |b| {
        let mut dst = vec![0u8; payload_100k.len()];
        b.iter(|| black_box(decompress_into(black_box(&compressed), &mut dst)))
    });
}

fn bench_stream(c: &mut Criterion) {
    let payload_1m = generate_payload(1024);

    c.bench_function("stream_compress_1mb", |b| {
        let mut session = CompressStream::create().expect("session create should succeed");
        b.iter(|| {
            session.arm(payload_1m.clone()).expect("arm should succeed");
            loop {
                let pulled = session.pull().expect("pull should succeed");
                black_box(&pulled.chunk);
                if pulled.complete {
                    break;
                }
            }
        })
    });

    let compressed = compress(&payload_1m, 1).expect("compression should succeed");
    c.bench_function("stream_decompress_1mb", |b| {
        let mut session = DecompressStream::create().expect("session create should succeed");
        b.iter(|| {
            session.arm(compressed.clone()).expect("arm should succeed");
            loop {
                let pulled = session.pull().expect("pull should succeed");
                black_box(&pulled.chunk);
                if pulled.complete {
                    break;
                }
            }
        })
    });
}

criterion_group!(benches, bench_oneshot, bench_stream);
criterion_main!(benches);

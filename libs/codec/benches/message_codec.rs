//! Benchmarks for message serialization/deserialization performance.
//!
//! These cover the real hot paths: every message sent or received goes
//! through `encode_message`/`decode_message`, and every header touches the
//! fixed-width integer conversion five times (checksum, id, offset, both
//! timestamps). Payload sizes mirror production traffic: 100 B control
//! messages, 1 KiB typical events, 10 KiB batched payloads.

use codec::{
    decode_message, encode_header, encode_message_into, encode_partitioning, BufferPool,
    MessageBuilder,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use types::{Message, Partitioning};

fn build_message(payload_len: usize) -> Message {
    let payload: Vec<u8> = (0..payload_len).map(|i| (i % 256) as u8).collect();
    MessageBuilder::new()
        .with_id(1)
        .with_offset(100)
        .with_timestamp(1_700_000_000_000_000)
        .with_payload(payload)
        .build()
        .expect("benchmark message must build")
}

/// Complete message serialization through a reused pooled buffer.
/// This runs for every message send operation.
fn bench_encode_message(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_message");
    let pool = BufferPool::default();

    for (label, payload_len) in [("small", 100), ("medium", 1024), ("large", 10240)] {
        let message = build_message(payload_len);
        group.bench_with_input(
            BenchmarkId::from_parameter(label),
            &message,
            |b, message| {
                b.iter(|| {
                    let mut buf = pool.acquire();
                    encode_message_into(black_box(message), &mut buf)
                        .expect("encode must succeed");
                    black_box(buf.len())
                });
            },
        );
    }
    group.finish();
}

/// Message header serialization separately; the header carries all five
/// fixed-width integer fields.
fn bench_encode_header(c: &mut Criterion) {
    let message = build_message(100);
    let mut out = Vec::with_capacity(64);

    c.bench_function("encode_header", |b| {
        b.iter(|| {
            out.clear();
            encode_header(black_box(&message.header), &mut out);
            black_box(out.len())
        });
    });
}

/// The busiest primitive: u64 and u128 fixed-width conversion.
fn bench_fixed_width_conversion(c: &mut Criterion) {
    c.bench_function("encode_u64", |b| {
        b.iter(|| black_box(codec::encode_u64(black_box(123_456_789u64))));
    });

    c.bench_function("encode_u128", |b| {
        b.iter(|| black_box(codec::encode_u128(black_box(123_456_789u128))));
    });

    c.bench_function("decode_u64", |b| {
        let bytes = codec::encode_u64(123_456_789);
        b.iter(|| black_box(codec::decode_u64(black_box(bytes))));
    });
}

/// Partitioning directive serialization on the publish path.
fn bench_encode_partitioning(c: &mut Criterion) {
    let partitioning = Partitioning::partition_id(123);
    let mut out = Vec::with_capacity(16);

    c.bench_function("encode_partitioning", |b| {
        b.iter(|| {
            out.clear();
            encode_partitioning(black_box(&partitioning), &mut out)
                .expect("encode must succeed");
            black_box(out.len())
        });
    });
}

/// The receive-path mirror of encode_message.
fn bench_decode_message(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_message");

    for (label, payload_len) in [("small", 100), ("medium", 1024), ("large", 10240)] {
        let message = build_message(payload_len);
        let encoded = codec::encode_message(&message).expect("encode must succeed");
        group.bench_with_input(
            BenchmarkId::from_parameter(label),
            &encoded,
            |b, encoded| {
                b.iter(|| {
                    let (decoded, consumed) =
                        decode_message(black_box(encoded)).expect("decode must succeed");
                    black_box((decoded.header.id, consumed))
                });
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_encode_message,
    bench_encode_header,
    bench_fixed_width_conversion,
    bench_encode_partitioning,
    bench_decode_message
);
criterion_main!(benches);

//! Criterion benchmarks for the Stream codec.
//!
//! Run with:
//!   cargo bench --bench stream

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

mod corpus {
    include!("corpus.rs");
}

fn bench_stream_compress_decompress(c: &mut Criterion) {
    let mut group = c.benchmark_group("stream_compress_decompress");

    for &chunk_size in &[65_536usize, 262_144] {
        let chunk = corpus::synthetic_data(chunk_size);
        let bound = blazer_codec::stream::compress::compress_bound(chunk_size);

        {
            let mut dst = vec![0u8; bound];
            group.throughput(Throughput::Bytes(chunk_size as u64));
            group.bench_with_input(BenchmarkId::new("compress", chunk_size), &chunk, |b, chunk| {
                let mut table = blazer_codec::stream::types::HashTable::new();
                b.iter(|| blazer_codec::stream::compress::compress_into(chunk, &mut dst, &mut table))
            });
        }

        {
            let mut table = blazer_codec::stream::types::HashTable::new();
            let mut tmp = vec![0u8; bound];
            let n = blazer_codec::stream::compress::compress_into(&chunk, &mut tmp, &mut table);
            let compressed = tmp[..n].to_vec();
            let mut decomp_dst = vec![0u8; chunk_size];

            group.throughput(Throughput::Bytes(chunk_size as u64));
            group.bench_with_input(BenchmarkId::new("decompress", chunk_size), &compressed, |b, compressed| {
                b.iter(|| blazer_codec::stream::decompress::decompress_into(compressed, &mut decomp_dst).unwrap())
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_stream_compress_decompress);
criterion_main!(benches);

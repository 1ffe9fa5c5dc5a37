use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use randq::StreamChooseK;

fn bench_stream_choose_k(c: &mut Criterion) {
    let mut group = c.benchmark_group("stream_choose_k");
    let stream_len = 100_000u64;
    group.throughput(Throughput::Elements(stream_len));

    for &k in &[1usize, 10, 100, 1_000] {
        group.bench_with_input(BenchmarkId::new("update", k), &k, |b, &k| {
            b.iter(|| {
                let mut sampler = StreamChooseK::with_seed(k, 7);
                for i in 0..stream_len {
                    sampler.update(i);
                }
                black_box(sampler.collection().len())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_stream_choose_k);
criterion_main!(benches);

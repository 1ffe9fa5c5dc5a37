use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use randq::RandomizedQueue;

fn bench_enqueue_dequeue(c: &mut Criterion) {
    let mut group = c.benchmark_group("randomized_queue");

    for &size in &[1_000usize, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("fill_and_drain", size), &size, |b, &n| {
            b.iter(|| {
                let mut queue = RandomizedQueue::with_seed(42);
                for i in 0..n {
                    queue.enqueue(i);
                }
                while let Ok(item) = queue.dequeue() {
                    black_box(item);
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("sample", size), &size, |b, &n| {
            let mut queue = RandomizedQueue::with_seed(42);
            queue.extend(0..n);
            b.iter(|| black_box(*queue.sample().unwrap()));
        });

        group.bench_with_input(BenchmarkId::new("iter", size), &size, |b, &n| {
            let mut queue = RandomizedQueue::with_seed(42);
            queue.extend(0..n);
            b.iter(|| black_box(queue.iter().copied().sum::<usize>()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_enqueue_dequeue);
criterion_main!(benches);

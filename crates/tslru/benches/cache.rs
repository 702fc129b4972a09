use std::sync::Arc;
use std::thread;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tslru::ThreadSafeLru;

fn bench_cached_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("cached_get");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("get_1kb_hit", |b| {
        let cache = ThreadSafeLru::new(1000).unwrap();
        let data = vec![b'x'; 1024];

        for id in 0..100u64 {
            cache.put(id, data.clone());
        }

        let mut counter = 0u64;
        b.iter(|| {
            black_box(cache.get(&(counter % 100)).unwrap());
            counter += 1;
        });
    });

    group.finish();
}

fn bench_mixed_50_50(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("50_read_50_write", |b| {
        let cache = ThreadSafeLru::new(1000).unwrap();

        for id in 0..100u64 {
            cache.put(id, id);
        }

        let mut counter = 0u64;
        b.iter(|| {
            if counter % 2 == 0 {
                black_box(cache.get(&(counter % 100)).ok());
            } else {
                cache.put(counter % 2000, counter);
            }
            counter += 1;
        });
    });

    group.finish();
}

fn bench_cache_miss(c: &mut Criterion) {
    let mut group = c.benchmark_group("cache_miss");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("get_miss", |b| {
        let cache = ThreadSafeLru::new(10).unwrap(); // Small cache

        // Pre-populate with more than cache size
        for id in 0..100u64 {
            cache.put(id, id);
        }

        let mut counter = 0u64;
        b.iter(|| {
            // Keys 0..90 were evicted
            black_box(cache.get(&(counter % 90)).is_err());
            counter += 1;
        });
    });

    group.finish();
}

fn bench_contended(c: &mut Criterion) {
    const OPS_PER_THREAD: u64 = 1_000;

    let mut group = c.benchmark_group("contended");
    group.sample_size(20);

    for threads in [2u64, 4, 8] {
        group.throughput(Throughput::Elements(threads * OPS_PER_THREAD));
        group.bench_with_input(BenchmarkId::from_parameter(threads), &threads, |b, &threads| {
            let cache = Arc::new(ThreadSafeLru::new(10).unwrap());

            b.iter(|| {
                let handles: Vec<_> = (0..threads)
                    .map(|t| {
                        let cache = Arc::clone(&cache);
                        thread::spawn(move || {
                            // 60% get, 30% put, 10% remove over 21 keys
                            for i in 0..OPS_PER_THREAD {
                                let op = (t * 37 + i * 53) % 100;
                                let key = (t * 7 + i * 13) % 21;
                                if op < 60 {
                                    black_box(cache.get(&key).ok());
                                } else if op < 90 {
                                    cache.put(key, i);
                                } else {
                                    black_box(cache.remove(&key));
                                }
                            }
                        })
                    })
                    .collect();

                for handle in handles {
                    handle.join().unwrap();
                }
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_cached_get,
    bench_mixed_50_50,
    bench_cache_miss,
    bench_contended
);
criterion_main!(benches);

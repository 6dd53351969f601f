use assoc_array::AssocArray;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::seq::SliceRandom;
use std::hint::black_box;

fn set(c: &mut Criterion) {
    let mut group = c.benchmark_group("AssocArray: set");
    for size in [16_u64, 256, 4096] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let mut array: AssocArray<u64, u64> = AssocArray::new();
                for i in 0..size {
                    assert!(array.set(i, i).is_ok());
                }
                array
            });
        });
    }
    group.finish();
}

fn get_shuffled(c: &mut Criterion) {
    let mut group = c.benchmark_group("AssocArray: get, shuffled");
    for size in [16_u64, 256, 4096] {
        let array: AssocArray<u64, u64> = (0..size).map(|i| (i, i)).collect();
        let mut keys: Vec<u64> = (0..size).collect();
        keys.shuffle(&mut rand::rng());
        group.bench_with_input(BenchmarkId::from_parameter(size), &keys, |b, keys| {
            b.iter(|| {
                for k in keys {
                    assert_eq!(array.get(black_box(k)), Ok(k));
                }
            });
        });
    }
    group.finish();
}

fn remove_swap(c: &mut Criterion) {
    c.bench_function("AssocArray: remove, front to back", |b| {
        b.iter_batched(
            || (0..1024_u64).map(|i| (i, i)).collect::<AssocArray<u64, u64>>(),
            |mut array| {
                for i in 0..1024_u64 {
                    array.remove(&i);
                }
                assert!(array.is_empty());
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

fn clone(c: &mut Criterion) {
    let array: AssocArray<u64, u64> = (0..4096).map(|i| (i, i)).collect();
    c.bench_function("AssocArray: clone", |b| {
        b.iter(|| black_box(&array).clone());
    });
}

criterion_group!(assoc_array, set, get_shuffled, remove_swap, clone);
criterion_main!(assoc_array);

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use stockline_allocation::{Batch, OrderLine};

const SKU: &str = "SMALL-TABLE";

/// Batch pre-loaded with `lines` allocations of quantity 1, with room for more.
fn loaded_batch(lines: usize) -> Batch {
    let mut batch = Batch::new("batch-001", SKU, (lines as u64) * 2 + 10, None);
    for i in 0..lines {
        batch
            .allocate(OrderLine::new(format!("order-{i}"), SKU, 1))
            .unwrap();
    }
    batch
}

/// Benchmark: allocate + deallocate cycle against batches of growing size.
///
/// `available_quantity` is derived from the allocation set, so the cost grows
/// with the number of allocated lines.
fn bench_allocate_deallocate_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("allocate_deallocate_cycle");

    for &size in &[0usize, 10, 100, 1_000] {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut batch = loaded_batch(size);
            let line = OrderLine::new("order-bench", SKU, 1);

            b.iter(|| {
                batch.allocate(black_box(line.clone())).unwrap();
                batch.deallocate(black_box(&line));
            });
        });
    }

    group.finish();
}

/// Benchmark: `can_allocate` rejection paths (sku mismatch vs insufficient stock).
fn bench_can_allocate(c: &mut Criterion) {
    let mut group = c.benchmark_group("can_allocate");
    let batch = loaded_batch(100);

    let fits = OrderLine::new("order-fits", SKU, 1);
    let too_big = OrderLine::new("order-big", SKU, 10_000);
    let wrong_sku = OrderLine::new("order-other", "BLUE-VASE", 1);

    group.bench_function("fits", |b| b.iter(|| batch.can_allocate(black_box(&fits))));
    group.bench_function("insufficient", |b| {
        b.iter(|| batch.can_allocate(black_box(&too_big)))
    });
    group.bench_function("sku_mismatch", |b| {
        b.iter(|| batch.can_allocate(black_box(&wrong_sku)))
    });

    group.finish();
}

criterion_group!(benches, bench_allocate_deallocate_cycle, bench_can_allocate);
criterion_main!(benches);

//! Benchmarks comparing the two stores side by side.
//!
//! | Question | Benchmarks |
//! |----------|------------|
//! | Exact lookup | `table_find` vs `linear_find` |
//! | Highest profit | `heap_peek` vs `table_scan` |
//! | Build cost | `build_table` vs `build_heap` |
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//!
//! # Run one group
//! cargo bench -- highest_profit
//! ```
//!
//! Results are saved to `target/criterion/` with HTML reports.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use sales_index::analytics::{by_country, highest_profit_record, top_items};
use sales_index::{KeyedTable, PriorityStore, SalesRecord};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

// ============================================================================
// HELPER FUNCTIONS - Deterministic record generation
// ============================================================================

fn generate_records(count: usize, seed: u64) -> Vec<SalesRecord> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let countries = ["Chad", "Peru", "Laos", "Fiji", "Mali", "Oman"];
    let items = ["Cereal", "Snacks", "Meat", "Fruits", "Clothes"];

    (0..count)
        .map(|i| SalesRecord {
            order_id: format!("{}", 200_000_000 + i * 104_729),
            country: countries[rng.gen_range(0..countries.len())].to_string(),
            item_type: items[rng.gen_range(0..items.len())].to_string(),
            units_sold: rng.gen_range(1..=10_000),
            total_profit: rng.gen_range(-50_000.0..2_000_000.0),
            ..SalesRecord::default()
        })
        .collect()
}

fn build_table(records: &[SalesRecord]) -> KeyedTable {
    let mut table = KeyedTable::with_capacity(records.len());
    for r in records {
        table.insert(r.clone());
    }
    table
}

fn build_heap(records: &[SalesRecord]) -> PriorityStore {
    let mut heap = PriorityStore::with_capacity(records.len());
    for r in records {
        heap.insert(r.clone());
    }
    heap
}

// ============================================================================
// BENCHMARKS
// ============================================================================

fn bench_exact_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("exact_lookup");

    for size in SIZES {
        let records = generate_records(size, 42);
        let table = build_table(&records);
        let target = records[size / 2].order_id.clone();

        group.bench_with_input(BenchmarkId::new("table_find", size), &target, |b, id| {
            b.iter(|| table.find(black_box(id)))
        });
        group.bench_with_input(BenchmarkId::new("linear_find", size), &target, |b, id| {
            b.iter(|| records.iter().find(|r| r.order_id == *black_box(id)))
        });
    }

    group.finish();
}

fn bench_highest_profit(c: &mut Criterion) {
    let mut group = c.benchmark_group("highest_profit");

    for size in SIZES {
        let records = generate_records(size, 7);
        let table = build_table(&records);
        let heap = build_heap(&records);

        group.bench_function(BenchmarkId::new("heap_peek", size), |b| {
            b.iter(|| black_box(&heap).peek_max())
        });
        group.bench_function(BenchmarkId::new("table_scan", size), |b| {
            b.iter(|| highest_profit_record(black_box(&table).iter()))
        });
    }

    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for size in SIZES {
        let records = generate_records(size, 3);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("build_table", size), &records, |b, r| {
            b.iter(|| build_table(black_box(r)))
        });
        group.bench_with_input(BenchmarkId::new("build_heap", size), &records, |b, r| {
            b.iter(|| build_heap(black_box(r)))
        });
    }

    group.finish();
}

fn bench_aggregation(c: &mut Criterion) {
    let records = generate_records(100_000, 11);
    let table = build_table(&records);

    c.bench_function("by_country_100k", |b| b.iter(|| by_country(black_box(&table).iter())));
    c.bench_function("top_items_5_100k", |b| b.iter(|| top_items(black_box(&table).iter(), 5)));
}

criterion_group!(
    benches,
    bench_exact_lookup,
    bench_highest_profit,
    bench_build,
    bench_aggregation
);
criterion_main!(benches);

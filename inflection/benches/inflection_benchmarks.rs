//! Performance benchmarks for rule table lookups
//!
//! Run with: cargo bench --bench inflection_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use inflection::{loader, Inflector};
use std::hint::black_box;

const WORDS: &[&str] = &[
    "star", "STAR", "query", "child", "person", "equipment", "diagnosis", "salesperson",
];

/// Benchmark single-word lookups in both directions
fn bench_lookups(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookups");
    let inflector = Inflector::english();

    for word in WORDS {
        group.bench_with_input(BenchmarkId::new("pluralize", word), word, |b, word| {
            b.iter(|| inflector.pluralize(black_box(word)));
        });

        let plural = inflector.pluralize(word);
        group.bench_with_input(
            BenchmarkId::new("singularize", &plural),
            &plural,
            |b, plural| {
                b.iter(|| inflector.singularize(black_box(plural)));
            },
        );
    }

    group.finish();
}

/// Benchmark building both tables from the embedded rule data
fn bench_table_build(c: &mut Criterion) {
    let sources = loader::english_sources().unwrap();

    c.bench_function("build_english_tables", |b| {
        b.iter(|| Inflector::from_sources(black_box(&sources)).unwrap());
    });
}

criterion_group!(benches, bench_lookups, bench_table_build);
criterion_main!(benches);

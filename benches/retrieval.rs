//! Performance benchmarks for boolret
//!
//! Run with: cargo bench

use boolret::index::build_index;
use boolret::query::{QueryExecutor, parse_query};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

const WORDS: &[&str] = &[
    "index", "query", "term", "boolean", "retrieval", "document", "sentence", "matrix",
    "vocabulary", "presence", "union", "intersection", "difference", "operator", "token",
    "search",
];

/// Synthetic documents of a few sentences each
fn create_documents(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let sentences: Vec<String> = (0..4)
                .map(|s| {
                    (0..8)
                        .map(|w| WORDS[(i * 7 + s * 3 + w * 5) % WORDS.len()])
                        .collect::<Vec<_>>()
                        .join(" ")
                })
                .collect();
            format!("{} doc{}.", sentences.join(". "), i)
        })
        .collect()
}

fn bench_index_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_build");
    for count in [10, 100, 1000] {
        let docs = create_documents(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &docs, |b, docs| {
            b.iter(|| build_index(black_box(docs)))
        });
    }
    group.finish();
}

fn bench_query_parsing(c: &mut Criterion) {
    let queries = vec![
        "simple",
        "two words",
        "index AND query",
        "term OR token NOT matrix",
        "boolean retrieval OR search NOT union AND presence",
    ];

    let mut group = c.benchmark_group("query_parsing");
    for query in queries {
        group.bench_with_input(BenchmarkId::from_parameter(query), &query, |b, &q| {
            b.iter(|| parse_query(black_box(q)))
        });
    }
    group.finish();
}

fn bench_query_execution(c: &mut Criterion) {
    let docs = create_documents(1000);
    let index = build_index(&docs);
    let executor = QueryExecutor::new(&index);

    let queries = vec![
        "index",
        "index AND query",
        "term OR token NOT matrix",
        "missing OR search",
    ];

    let mut group = c.benchmark_group("query_execution");
    for query in queries {
        let parsed = parse_query(query);
        group.bench_with_input(BenchmarkId::from_parameter(query), &parsed, |b, q| {
            b.iter(|| executor.execute(black_box(q)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_index_build,
    bench_query_parsing,
    bench_query_execution
);
criterion_main!(benches);

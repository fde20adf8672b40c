//! Benchmarks for index construction and lookup.
use criterion::{Criterion, criterion_group, criterion_main};
use serde_json::{Value, json};
use std::hint::black_box;

use jsonindex::{JsonIndex, build_index};

/// A synthetic collection of nested plan documents.
fn corpus(len: usize) -> Value {
    let docs: Vec<Value> = (0..len)
        .map(|i| {
            json!({
                "name": format!("Plan {i} Gold"),
                "tags": ["Basic", format!("tier_{}", i % 7)],
                "details": {
                    "desc": "Comprehensive coverage, Co-Pay: $20/visit",
                    "limits": [{ "kind": "dental", "amount": i }, "vision care"]
                },
                "active": i % 2 == 0
            })
        })
        .collect();
    Value::Array(docs)
}

fn bench_build(c: &mut Criterion) {
    let root = corpus(1_000);
    let docs = root.as_array().expect("corpus is an array");
    c.bench_function("build 1k documents", |b| {
        b.iter(|| build_index(black_box(docs)).expect("valid corpus"));
    });
}

fn bench_search(c: &mut Criterion) {
    let root = corpus(1_000);
    let index = JsonIndex::from_root(&root).expect("valid corpus");
    c.bench_function("search common term", |b| {
        b.iter(|| index.search(black_box("Basic")));
    });
    c.bench_function("search missing term", |b| {
        b.iter(|| index.search(black_box("nonexistent")));
    });
}

criterion_group!(benches, bench_build, bench_search);
criterion_main!(benches);

//! Benchmarks for text normalization and corpus rendering.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use iramuteq_prep::{CorpusFormatter, CorpusOptions, SourceDocument};

const PARAGRAPH: &str = "Em 2019, a prefeitura investiu R$ 1.250.000,50 em obras. \
    Segundo o relatório, 37,5% dos moradores encontraram-se satisfeitos e \
    pediram-lhe mais investimentos no bairro-modelo... \"Precisamos fazê-lo já\", \
    disse o secretário.";

/// Creates a synthetic page dump with a running header.
fn create_test_document(page_count: usize) -> SourceDocument {
    let pages = (0..page_count).map(|i| {
        format!(
            "Relatório Municipal de Obras Públicas\n1. INTRODUÇÃO\n{}\n\n{}\n{}",
            PARAGRAPH,
            PARAGRAPH,
            i + 1
        )
    });
    SourceDocument::from_pages("bench", pages)
}

/// Benchmark individual normalization stages.
fn bench_normalize(c: &mut Criterion) {
    c.bench_function("expand_numerals", |b| {
        b.iter(|| iramuteq_prep::expand_numerals(black_box(PARAGRAPH)));
    });

    c.bench_function("rewrite_enclisis", |b| {
        b.iter(|| iramuteq_prep::rewrite_enclisis(black_box(PARAGRAPH)));
    });

    c.bench_function("sanitize", |b| {
        b.iter(|| iramuteq_prep::sanitize(black_box(PARAGRAPH), false));
    });
}

/// Benchmark full corpus rendering at various sizes.
fn bench_corpus(c: &mut Criterion) {
    let mut group = c.benchmark_group("corpus_rendering");

    for page_count in [1, 10, 50].iter() {
        let source = create_test_document(*page_count);
        let formatter = CorpusFormatter::new(CorpusOptions::default());

        group.bench_function(format!("{}_pages", page_count), |b| {
            b.iter(|| {
                let doc = iramuteq_prep::structure_document(black_box(&source));
                formatter.render(&doc)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_normalize, bench_corpus);
criterion_main!(benches);

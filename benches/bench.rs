//! Criterion benchmarks for tokenkit.
//!
//! Covers each splitting strategy on a single document, plus sequential
//! versus parallel batch tokenization.

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use tokenkit::analysis::strategy::SplitStrategy;
use tokenkit::analysis::tokenizer::StrategyTokenizer;

/// Generate test documents for benchmarking.
fn generate_test_documents(count: usize) -> Vec<String> {
    let words = [
        "search", "engine", "full", "text", "index", "query", "document", "field", "term",
        "phrase", "boolean", "vector", "analysis", "tokenization", "stemming", "ranking",
    ];
    let separators = [" ", ". ", ", ", "\n", "  ", "#", "!? "];

    let mut documents = Vec::with_capacity(count);
    for i in 0..count {
        let doc_length = 50 + (i % 100); // Variable length documents
        let mut doc = String::new();

        for j in 0..doc_length {
            let word_idx = (i * 7 + j * 13) % words.len(); // Pseudo-random distribution
            doc.push_str(words[word_idx]);
            doc.push_str(separators[(i + j * 3) % separators.len()]);
        }

        documents.push(doc);
    }

    documents
}

fn tokenizer_for(strategy: SplitStrategy) -> StrategyTokenizer {
    let delimiters = strategy.requires_delimiters().then_some("#,\n");
    StrategyTokenizer::new(strategy, delimiters).unwrap()
}

/// Benchmark every strategy on a single document.
fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("strategies");
    let texts = generate_test_documents(1);

    group.throughput(Throughput::Bytes(texts[0].len() as u64));
    for strategy in SplitStrategy::ALL {
        let tokenizer = tokenizer_for(strategy);
        group.bench_function(strategy.as_str(), |b| {
            b.iter(|| black_box(tokenizer.tokenize(black_box(&texts[0]))))
        });
    }

    group.finish();
}

/// Benchmark batch tokenization.
fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    let texts = generate_test_documents(1000);
    let tokenizer = tokenizer_for(SplitStrategy::SpecialChars);

    group.throughput(Throughput::Elements(texts.len() as u64));
    group.bench_function("parallel_batch", |b| {
        b.iter(|| black_box(tokenizer.tokenize_batch(black_box(&texts))))
    });

    // Sequential tokenization for comparison
    group.bench_function("sequential_batch", |b| {
        b.iter(|| {
            let tokens: Vec<_> = texts.iter().map(|text| tokenizer.tokenize(text)).collect();
            black_box(tokens)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_strategies, bench_batch);

criterion_main!(benches);

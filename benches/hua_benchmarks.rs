//! Hua Benchmarks
//!
//! Benchmarks for loading and querying the Hua Trie, using the Criterion
//! framework for statistical analysis and regression detection.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::time::Duration;

use hua_lib::data_structures::hua_trie::{CandidateStrategy, HuaTrie};

/// Deterministic pseudo-words over a 26-letter alphabet.
fn generate_words(count: usize) -> Vec<String> {
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    (0..count)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let len = 3 + (state % 8) as usize;
            (0..len)
                .map(|i| (b'a' + ((state >> (i * 5)) % 26) as u8) as char)
                .collect()
        })
        .collect()
}

fn build_trie(words: &[String]) -> HuaTrie {
    let mut trie = HuaTrie::new();
    trie.insert_all(words).unwrap();
    trie
}

/// Benchmark loading words into the trie
fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("hua_trie_insert");
    group.measurement_time(Duration::from_secs(2));

    for size in [1_000, 10_000, 50_000].iter() {
        let words = generate_words(*size);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("insert_all", size), &words, |b, words| {
            b.iter(|| build_trie(black_box(words)));
        });
    }

    group.finish();
}

/// Benchmark the three query operations on a populated trie
fn bench_queries(c: &mut Criterion) {
    let words = generate_words(50_000);
    let trie = build_trie(&words);
    let queries: Vec<&String> = words.iter().step_by(500).collect();

    let mut group = c.benchmark_group("hua_trie_query");
    group.measurement_time(Duration::from_secs(2));

    group.bench_function("contains_word", |b| {
        b.iter(|| {
            for query in &queries {
                black_box(trie.contains_word(query));
            }
        });
    });

    group.bench_function("autocomplete", |b| {
        b.iter(|| {
            for query in &queries {
                black_box(trie.autocomplete(&query[..2]));
            }
        });
    });

    for strategy in [CandidateStrategy::Exhaustive, CandidateStrategy::TrieGuided] {
        group.bench_with_input(
            BenchmarkId::new("close_matches", format!("{strategy:?}")),
            &strategy,
            |b, &strategy| {
                b.iter(|| {
                    for query in &queries {
                        black_box(trie.close_matches_with(query, strategy));
                    }
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_insert, bench_queries);
criterion_main!(benches);

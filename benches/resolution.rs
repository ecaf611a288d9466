//! Performance benchmarks for chain resolution.
//!
//! Run with: `cargo bench --bench resolution`
//!
//! Resolution is a single pass plus a constant number of guarded branches,
//! so throughput should scale linearly with chain length and stay well under
//! a microsecond for realistic chains.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use kinship_kernel::RelationshipResolver;

/// Build a cousin-style chain of the given half-length.
fn make_cousin_chain(half: usize) -> Vec<String> {
    let mut chain = vec!["father".to_string(); half];
    chain.extend(std::iter::repeat("son".to_string()).take(half));
    chain
}

fn bench_short_chains(c: &mut Criterion) {
    let resolver = RelationshipResolver::default();
    let cases: [(&str, &[&str]); 4] = [
        ("single_parent", &["mother"]),
        ("uncle", &["mother", "brother"]),
        ("first_cousin", &["father", "father", "son", "son"]),
        ("sibling_in_law", &["spouse", "brother"]),
    ];

    let mut group = c.benchmark_group("resolve_short");
    for (name, chain) in cases {
        group.bench_function(name, |b| {
            b.iter(|| resolver.resolve(black_box(chain)));
        });
    }
    group.finish();
}

fn bench_chain_length_scaling(c: &mut Criterion) {
    let resolver = RelationshipResolver::default();

    let mut group = c.benchmark_group("resolve_scaling");
    for half in [2usize, 8, 32, 128] {
        let chain = make_cousin_chain(half);
        group.throughput(Throughput::Elements(chain.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(chain.len()), &chain, |b, chain| {
            b.iter(|| resolver.resolve(black_box(chain)));
        });
    }
    group.finish();
}

fn bench_normalization(c: &mut Criterion) {
    let resolver = RelationshipResolver::default();
    let aliased = ["  MOM ", "Dad", "BRO", "kids", "stranger"];

    c.bench_function("resolve_aliased_tokens", |b| {
        b.iter(|| resolver.resolve(black_box(&aliased)));
    });
}

criterion_group!(
    benches,
    bench_short_chains,
    bench_chain_length_scaling,
    bench_normalization
);
criterion_main!(benches);

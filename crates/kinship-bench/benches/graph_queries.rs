//! Group 3: graph queries (`shortest_path`, `ancestors_of`,
//! `detect_ancestry_cycles`, `suggest_coparent_edges`).
#![allow(clippy::expect_used)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use kinship_bench::{SizeTier, generate_family};
use kinship_core::{
    KinshipGraph, ancestors_of, build_graph, detect_ancestry_cycles, shortest_path,
    suggest_coparent_edges,
};

const TIERS: [(&str, SizeTier); 4] = [
    ("S", SizeTier::Small),
    ("M", SizeTier::Medium),
    ("L", SizeTier::Large),
    ("XL", SizeTier::XLarge),
];

fn graph_for(tier: SizeTier, inject_cycles: bool) -> (KinshipGraph, String, String) {
    let config = kinship_bench::GeneratorConfig {
        inject_cycles,
        ..tier.config(42)
    };
    let family = generate_family(&config);
    let graph = build_graph(&family.people, &family.relationships);
    let id_at = |i: usize| {
        family.people[i]
            .id
            .as_ref()
            .expect("generated people have ids")
            .to_string()
    };
    let founder = id_at(0);
    let newest = id_at(family.people.len() - 1);
    (graph, founder, newest)
}

fn bench_shortest_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_path");
    for (name, tier) in TIERS {
        let (graph, founder, newest) = graph_for(tier, false);
        group.bench_function(BenchmarkId::from_parameter(name), |b| {
            b.iter(|| shortest_path(&graph, &founder, &newest).expect("known ids"));
        });
    }
    group.finish();
}

fn bench_ancestors(c: &mut Criterion) {
    let mut group = c.benchmark_group("ancestors_of");
    for (name, tier) in TIERS {
        let (graph, _, newest) = graph_for(tier, false);
        group.bench_function(BenchmarkId::from_parameter(name), |b| {
            b.iter(|| ancestors_of(&graph, &newest).expect("known id"));
        });
    }
    group.finish();
}

fn bench_cycles(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect_ancestry_cycles");
    for (name, tier) in TIERS {
        let (acyclic, _, _) = graph_for(tier, false);
        let (cyclic, _, _) = graph_for(tier, true);
        group.bench_function(BenchmarkId::new("acyclic", name), |b| {
            b.iter(|| detect_ancestry_cycles(&acyclic));
        });
        group.bench_function(BenchmarkId::new("cyclic", name), |b| {
            b.iter(|| detect_ancestry_cycles(&cyclic));
        });
    }
    group.finish();
}

fn bench_completion(c: &mut Criterion) {
    let mut group = c.benchmark_group("suggest_coparent_edges");
    for (name, tier) in TIERS {
        let (graph, _, _) = graph_for(tier, false);
        group.bench_function(BenchmarkId::from_parameter(name), |b| {
            b.iter(|| suggest_coparent_edges(&graph));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_shortest_path,
    bench_ancestors,
    bench_cycles,
    bench_completion
);
criterion_main!(benches);

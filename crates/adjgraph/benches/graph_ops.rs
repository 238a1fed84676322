//! Graph operation benchmarks.
//!
//! Measures the two O(N^2) paths:
//! - matrix resize on node insert/remove
//! - depth-first reachability on chain and dense graphs

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use adjgraph::{Graph, NodeId};

/// Chain 0 - 2 - 4 - ... on an undirected graph (odd ids left free).
fn chain(n: u64) -> Graph {
    let mut g = Graph::undirected();
    for id in 0..n {
        g.add_node(NodeId(id * 2));
    }
    for id in 1..n {
        g.add_link(NodeId((id - 1) * 2), NodeId(id * 2));
    }
    g
}

/// Benchmark node insert and remove at the front, middle, and end
fn bench_resize(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph/resize");

    for size in [64u64, 256, 512] {
        let base = chain(size);
        for (label, id) in [("front", 1), ("middle", size - 1), ("end", size * 2 + 1)] {
            group.bench_with_input(BenchmarkId::new(label, size), &id, |b, &id| {
                let mut g = base.clone();
                b.iter(|| {
                    g.add_node(NodeId(id));
                    g.remove_node(NodeId(id));
                    black_box(g.node_count());
                });
            });
        }
    }

    group.finish();
}

/// Benchmark reachability queries
fn bench_has_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph/has_path");

    for size in [64u64, 256, 512] {
        let g = chain(size);
        let last = NodeId((size - 1) * 2);
        group.bench_with_input(BenchmarkId::new("chain", size), &g, |b, g| {
            b.iter(|| black_box(g.has_path(NodeId(0), last)));
        });

        let mut dense = Graph::directed();
        for id in 0..size {
            dense.add_node(NodeId(id));
        }
        for a in 0..size - 1 {
            for b in 0..size - 1 {
                dense.add_link(NodeId(a), NodeId(b));
            }
        }
        // Last node is unreachable, forcing a full scan.
        let target = NodeId(size - 1);
        group.bench_with_input(BenchmarkId::new("dense_miss", size), &dense, |b, g| {
            b.iter(|| black_box(g.has_path(NodeId(0), target)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_resize, bench_has_path);
criterion_main!(benches);

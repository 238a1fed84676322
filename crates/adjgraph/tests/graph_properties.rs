//! Property tests over random operation sequences.

use adjgraph::{Graph, GraphKind, NodeId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SEEDS: [u64; 4] = [1, 7, 42, 1234];

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Apply `steps` random node/link operations drawn from a small id space.
fn random_graph(kind: GraphKind, seed: u64, steps: usize) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut g = Graph::new(kind);

    for _ in 0..steps {
        let a = NodeId(rng.gen_range(0..24));
        let b = NodeId(rng.gen_range(0..24));
        match rng.gen_range(0..10) {
            0..=3 => g.add_node(a),
            4 => g.remove_node(a),
            5..=7 => g.add_weighted_link(a, b, rng.gen_range(-3..=3)),
            8 => g.remove_link(a, b),
            _ => g.add_link(a, b),
        }
    }

    g
}

fn all_kinds() -> [GraphKind; 4] {
    [
        GraphKind::UNDIRECTED,
        GraphKind::DIRECTED,
        GraphKind::WEIGHTED,
        GraphKind::WEIGHTED_DIRECTED,
    ]
}

#[test]
fn test_rank_correspondence() {
    init_tracing();
    for kind in all_kinds() {
        for seed in SEEDS {
            let g = random_graph(kind, seed, 400);
            let nodes: Vec<NodeId> = g.nodes().collect();

            for (expected, &id) in nodes.iter().enumerate() {
                assert_eq!(g.rank_of(id), Some(expected));
            }
            for pair in nodes.windows(2) {
                assert!(g.rank_of(pair[0]) < g.rank_of(pair[1]));
            }
            assert_eq!(g.matrix().dim(), g.node_count());
            assert!(g.validate().is_ok(), "{:?}", g.validate());
        }
    }
}

#[test]
fn test_add_then_remove_restores_matrix() {
    for kind in all_kinds() {
        for seed in SEEDS {
            let mut g = random_graph(kind, seed, 300);
            let before = g.matrix().clone();

            let fresh = (0..).map(NodeId).find(|&id| !g.contains(id)).unwrap();
            g.add_node(fresh);
            assert_eq!(g.matrix().dim(), before.dim() + 1);
            g.remove_node(fresh);

            assert_eq!(g.matrix(), &before);
        }
    }
}

#[test]
fn test_undirected_symmetry() {
    for kind in [GraphKind::UNDIRECTED, GraphKind::WEIGHTED] {
        for seed in SEEDS {
            let g = random_graph(kind, seed, 500);
            for a in g.nodes() {
                for b in g.nodes() {
                    assert_eq!(g.weight(a, b), g.weight(b, a));
                }
            }
        }
    }
}

#[test]
fn test_directed_asymmetry() {
    let mut g = Graph::directed();
    for id in 0..6 {
        g.add_node(NodeId(id));
    }
    for (a, b) in [(0, 1), (1, 2), (2, 3), (4, 5)] {
        g.add_link(NodeId(a), NodeId(b));
    }

    for (a, b) in [(0, 1), (1, 2), (2, 3), (4, 5)] {
        assert_eq!(g.weight(NodeId(b), NodeId(a)), Some(0));
    }

    g.add_link(NodeId(5), NodeId(4));
    assert_eq!(g.weight(NodeId(5), NodeId(4)), Some(1));
}

#[test]
fn test_undirected_reachability_is_transitive() {
    for seed in SEEDS {
        let g = random_graph(GraphKind::UNDIRECTED, seed, 200);
        let nodes: Vec<NodeId> = g.nodes().collect();

        for &a in &nodes {
            for &b in &nodes {
                if !g.has_path(a, b) {
                    continue;
                }
                assert!(g.has_path(b, a));
                for &c in &nodes {
                    if g.has_path(b, c) {
                        assert!(g.has_path(a, c), "{} -> {} -> {}", a, b, c);
                    }
                }
            }
        }
    }
}

#[test]
fn test_sentinel_immunity() {
    for kind in all_kinds() {
        let mut g = random_graph(kind, 99, 200);
        let nodes: Vec<NodeId> = g.nodes().collect();
        let matrix = g.matrix().clone();
        let some = nodes.first().copied().unwrap_or(NodeId(0));

        g.add_node(NodeId::INVALID);
        g.remove_node(NodeId::INVALID);
        g.add_link(NodeId::INVALID, some);
        g.add_link(some, NodeId::INVALID);
        g.add_weighted_link(NodeId::INVALID, NodeId::INVALID, 5);
        g.set_link_weight(some, NodeId::INVALID, 3);
        g.remove_link(NodeId::INVALID, some);

        assert_eq!(g.nodes().collect::<Vec<_>>(), nodes);
        assert_eq!(g.matrix().as_bytes(), matrix.as_bytes());
        assert!(!g.has_path(NodeId::INVALID, some));
        assert!(g.neighbours(NodeId::INVALID).is_empty());
    }
}

#[test]
fn test_sentinel_on_empty_graph() {
    let mut g = Graph::undirected();
    g.add_node(NodeId(u64::MAX));
    assert_eq!(g.node_count(), 0);
}

#[test]
fn test_neighbours_match_weights() {
    for kind in all_kinds() {
        for seed in SEEDS {
            let g = random_graph(kind, seed, 300);
            for a in g.nodes() {
                let expected: Vec<NodeId> = g.nodes().filter(|&b| g.has_link(a, b)).collect();
                assert_eq!(g.neighbours(a), expected);
                for &b in &expected {
                    assert!(g.has_path(a, b));
                }
            }
        }
    }
}

#[test]
fn test_remove_all_nodes_empties_matrix() {
    let mut g = random_graph(GraphKind::WEIGHTED_DIRECTED, 5, 300);
    let nodes: Vec<NodeId> = g.nodes().collect();
    for id in nodes {
        g.remove_node(id);
        assert!(g.validate().is_ok());
    }
    assert!(g.is_empty());
    assert!(g.matrix().is_empty());
}

//! Fuzz target for graph mutations.
//!
//! Applies random operation sequences to every link configuration and
//! checks the registry/matrix pairing after each step.

#![no_main]

use adjgraph::{Graph, GraphKind, NodeId};
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

/// Operations that can be performed on a graph.
#[derive(Debug, Arbitrary)]
enum GraphOp {
    AddNode(u8),
    RemoveNode(u8),
    AddLink { from: u8, to: u8 },
    AddWeightedLink { from: u8, to: u8, weight: i32 },
    RemoveLink { from: u8, to: u8 },
    /// Operate on the sentinel id.
    Sentinel { target: u8 },
    HasPath { from: u8, to: u8 },
    Neighbours(u8),
    Clear,
}

/// Fuzz input: configuration and operation sequence.
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    directed: bool,
    weighted: bool,
    ops: Vec<GraphOp>,
}

fn id(raw: u8) -> NodeId {
    NodeId(raw as u64)
}

fuzz_target!(|input: FuzzInput| {
    // Limit operations
    if input.ops.len() > 300 {
        return;
    }

    let kind = match (input.directed, input.weighted) {
        (false, false) => GraphKind::UNDIRECTED,
        (true, false) => GraphKind::DIRECTED,
        (false, true) => GraphKind::WEIGHTED,
        (true, true) => GraphKind::WEIGHTED_DIRECTED,
    };
    let mut graph = Graph::new(kind);

    for op in &input.ops {
        match *op {
            GraphOp::AddNode(n) => {
                if graph.contains(id(n)) {
                    graph.add_node(id(n));
                } else {
                    // Insert then remove must restore the matrix.
                    let before = graph.matrix().clone();
                    graph.add_node(id(n));
                    assert!(graph.neighbours(id(n)).is_empty());
                    graph.remove_node(id(n));
                    assert_eq!(graph.matrix(), &before);
                    graph.add_node(id(n));
                }
            }
            GraphOp::RemoveNode(n) => graph.remove_node(id(n)),
            GraphOp::AddLink { from, to } => graph.add_link(id(from), id(to)),
            GraphOp::AddWeightedLink { from, to, weight } => {
                graph.add_weighted_link(id(from), id(to), weight)
            }
            GraphOp::RemoveLink { from, to } => graph.remove_link(id(from), id(to)),
            GraphOp::Sentinel { target } => {
                let before = graph.matrix().clone();
                let count = graph.node_count();
                graph.add_node(NodeId::INVALID);
                graph.remove_node(NodeId::INVALID);
                graph.add_link(NodeId::INVALID, id(target));
                graph.remove_link(id(target), NodeId::INVALID);
                assert_eq!(graph.node_count(), count);
                assert_eq!(graph.matrix(), &before);
            }
            GraphOp::HasPath { from, to } => {
                let found = graph.has_path(id(from), id(to));
                if graph.has_link(id(from), id(to)) {
                    assert!(found);
                }
            }
            GraphOp::Neighbours(n) => {
                let neighbours = graph.neighbours(id(n));
                assert!(neighbours.windows(2).all(|w| w[0] < w[1]));
            }
            GraphOp::Clear => graph.clear(),
        }

        if let Err(e) = graph.validate() {
            panic!("invariant broken after {:?}: {}", op, e);
        }
    }
});

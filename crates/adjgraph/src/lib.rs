//! Dense adjacency-matrix graph container.
//!
//! This crate stores a graph over caller-chosen `u64` node identifiers in a
//! square weight matrix that is resized as nodes come and go. It includes:
//!
//! - **Registry**: sorted identifiers and their matrix ranks
//! - **Adjacency matrix**: dense rank-indexed weights with row/column resize
//! - **DFS**: reachability over nonzero links
//! - **Link policy**: directed/undirected and weighted/unweighted writes
//! - **Dump**: plain-text diagnostic rendering
//!
//! # Example
//!
//! ```
//! use adjgraph::{Graph, NodeId};
//!
//! let mut graph = Graph::undirected();
//! for id in [1, 2, 3] {
//!     graph.add_node(NodeId(id));
//! }
//! graph.add_link(NodeId(1), NodeId(3));
//!
//! assert!(graph.has_path(NodeId(3), NodeId(1)));
//! assert!(!graph.has_path(NodeId(1), NodeId(2)));
//! assert_eq!(graph.neighbours(NodeId(1)), vec![NodeId(3)]);
//! ```
//!
//! `u64::MAX` ([`NodeId::INVALID`]) is reserved; passing it to any
//! operation does nothing.

pub mod algorithms;
pub mod config;
pub mod dump;
pub mod graph;
pub mod models;
pub mod policy;

// Re-export main types
pub use algorithms::dfs::{has_path_by_rank, reachable_by_rank};
pub use config::{load_config, load_config_from_str, GraphConfig};
pub use dump::{print_graph, write_graph, GraphDump};
pub use graph::Graph;
pub use models::{AdjacencyMatrix, NodeId, NodeRegistry, Weight};
pub use policy::{Directedness, GraphKind, WeightPolicy};

/// Graph error types.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// Matrix dimension does not match the registry.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Registry order or rank map is broken.
    #[error("Invalid registry: {0}")]
    UnsortedRegistry(String),

    /// Undirected graph with differing `[a][b]` and `[b][a]`.
    #[error("Asymmetric link between {from} and {to}")]
    AsymmetricLink { from: NodeId, to: NodeId },

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
}

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

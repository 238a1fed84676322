//! Graph engine.
//!
//! [`Graph`] owns a [`NodeRegistry`] and an [`AdjacencyMatrix`] and keeps
//! them paired: the matrix dimension always equals the number of registered
//! identifiers, and row/column `r` always belongs to the identifier of rank
//! `r`.
//!
//! Public operations take [`NodeId`]s, translate them to ranks, and work on
//! the matrix by rank. Invalid input is absorbed: unknown identifiers and
//! [`NodeId::INVALID`] turn mutators into no-ops and queries into empty or
//! `false` results.

use tracing::{debug, trace};

use crate::algorithms::{has_path_by_rank, reachable_by_rank};
use crate::config::GraphConfig;
use crate::dump::GraphDump;
use crate::models::{AdjacencyMatrix, NodeId, NodeRegistry, Weight};
use crate::policy::GraphKind;
use crate::{GraphError, Result};

/// In-memory graph over caller-chosen node identifiers.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    kind: GraphKind,
    registry: NodeRegistry,
    matrix: AdjacencyMatrix,
}

impl Graph {
    /// Create an empty graph with the given link semantics.
    pub fn new(kind: GraphKind) -> Self {
        Self {
            kind,
            registry: NodeRegistry::new(),
            matrix: AdjacencyMatrix::new(),
        }
    }

    /// Undirected, unweighted graph.
    pub fn undirected() -> Self {
        Self::new(GraphKind::UNDIRECTED)
    }

    /// Directed, unweighted graph.
    pub fn directed() -> Self {
        Self::new(GraphKind::DIRECTED)
    }

    /// Undirected graph keeping arbitrary weights.
    pub fn weighted() -> Self {
        Self::new(GraphKind::WEIGHTED)
    }

    /// Directed graph keeping arbitrary weights.
    pub fn weighted_directed() -> Self {
        Self::new(GraphKind::WEIGHTED_DIRECTED)
    }

    /// Create an empty graph from configuration.
    pub fn from_config(config: &GraphConfig) -> Self {
        Self::new(config.kind())
    }

    /// Link semantics of this graph.
    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    // ------------------------------------------------------------------
    // Nodes
    // ------------------------------------------------------------------

    /// Add a node with no links.
    ///
    /// No-op for the sentinel or an identifier that is already present.
    pub fn add_node(&mut self, id: NodeId) {
        if !id.is_valid() {
            debug!("ignoring add of sentinel node id");
            return;
        }

        let Some(rank) = self.registry.insert(id) else {
            trace!(node = %id, "node already present");
            return;
        };
        self.matrix.insert_at(rank);

        debug!(node = %id, rank, nodes = self.registry.len(), "node added");
    }

    /// Remove a node and every link touching it.
    ///
    /// No-op for the sentinel or an unknown identifier.
    pub fn remove_node(&mut self, id: NodeId) {
        // The rank must be taken while `id` is still registered, and the
        // matrix shrunk before the registry shifts the later ranks.
        let Some(rank) = self.registry.rank_of(id) else {
            debug!(node = %id, "ignoring removal of unknown node");
            return;
        };
        self.matrix.remove_at(rank);
        self.registry.remove(id);

        debug!(node = %id, rank, nodes = self.registry.len(), "node removed");
    }

    /// Remove all nodes and links.
    pub fn clear(&mut self) {
        self.registry.clear();
        self.matrix.clear();
        debug!("graph cleared");
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.registry.len()
    }

    /// Check if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Check if a node is present.
    pub fn contains(&self, id: NodeId) -> bool {
        self.registry.contains(id)
    }

    /// Node identifiers in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.registry.iter()
    }

    /// Current rank of `id`.
    ///
    /// Ranks follow ascending identifier order and shift whenever a smaller
    /// identifier is added or removed.
    pub fn rank_of(&self, id: NodeId) -> Option<usize> {
        self.registry.rank_of(id)
    }

    // ------------------------------------------------------------------
    // Links
    // ------------------------------------------------------------------

    /// Write one matrix cell, without any mirroring.
    ///
    /// No-op if either endpoint is unknown.
    pub(crate) fn set_weight(&mut self, from: NodeId, to: NodeId, value: Weight) {
        let (Some(i), Some(j)) = (self.registry.rank_of(from), self.registry.rank_of(to)) else {
            return;
        };
        self.matrix.set(i, j, value);
        trace!(from = %from, to = %to, value, "cell written");
    }

    fn write_link(&mut self, from: NodeId, to: NodeId, weight: Weight) {
        if !self.contains(from) || !self.contains(to) {
            return;
        }
        for (a, b, value) in self.kind.link_writes(from, to, weight) {
            self.set_weight(a, b, value);
        }
    }

    /// Link `from` to `to` with weight 1.
    ///
    /// Undirected graphs link both ways.
    pub fn add_link(&mut self, from: NodeId, to: NodeId) {
        self.write_link(from, to, 1);
    }

    /// Link `from` to `to` with weight `weight`.
    ///
    /// Unweighted graphs store any nonzero weight as 1, and a zero weight
    /// removes the link. Undirected graphs store the same weight both ways.
    pub fn add_weighted_link(&mut self, from: NodeId, to: NodeId, weight: Weight) {
        self.write_link(from, to, weight);
    }

    /// Change the weight of the link `from -> to`, creating it if needed.
    pub fn set_link_weight(&mut self, from: NodeId, to: NodeId, weight: Weight) {
        self.write_link(from, to, weight);
    }

    /// Remove the link `from -> to` (both ways on undirected graphs).
    pub fn remove_link(&mut self, from: NodeId, to: NodeId) {
        self.write_link(from, to, 0);
    }

    /// Stored weight of `from -> to`; `Some(0)` means no link.
    pub fn weight(&self, from: NodeId, to: NodeId) -> Option<Weight> {
        let i = self.registry.rank_of(from)?;
        let j = self.registry.rank_of(to)?;
        self.matrix.get(i, j)
    }

    /// Check if a direct link `from -> to` exists.
    pub fn has_link(&self, from: NodeId, to: NodeId) -> bool {
        self.weight(from, to).is_some_and(|w| w != 0)
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Check if `to` can be reached from `from` along nonzero links.
    ///
    /// `has_path(a, a)` is true only if `a` has a self-loop or lies on a
    /// cycle.
    pub fn has_path(&self, from: NodeId, to: NodeId) -> bool {
        match (self.registry.rank_of(from), self.registry.rank_of(to)) {
            (Some(i), Some(j)) => has_path_by_rank(&self.matrix, i, j),
            _ => false,
        }
    }

    /// Direct successors of `id`, ascending. Empty if `id` is unknown.
    pub fn neighbours(&self, id: NodeId) -> Vec<NodeId> {
        let Some(rank) = self.registry.rank_of(id) else {
            return Vec::new();
        };
        self.matrix
            .successors(rank)
            .filter_map(|k| self.registry.id_at(k))
            .collect()
    }

    /// Every node reachable from `id` over one or more links, ascending.
    pub fn reachable_from(&self, id: NodeId) -> Vec<NodeId> {
        let Some(rank) = self.registry.rank_of(id) else {
            return Vec::new();
        };
        reachable_by_rank(&self.matrix, rank)
            .into_iter()
            .enumerate()
            .filter(|&(_, reached)| reached)
            .filter_map(|(k, _)| self.registry.id_at(k))
            .collect()
    }

    // ------------------------------------------------------------------
    // Inspection
    // ------------------------------------------------------------------

    /// Read-only view of the identifier registry.
    pub fn registry(&self) -> &NodeRegistry {
        &self.registry
    }

    /// Read-only view of the adjacency matrix.
    pub fn matrix(&self) -> &AdjacencyMatrix {
        &self.matrix
    }

    /// Text rendering of nodes and matrix.
    pub fn dump(&self) -> GraphDump<'_> {
        GraphDump::new(&self.registry, &self.matrix)
    }

    /// Check the registry/matrix pairing invariants.
    pub fn validate(&self) -> Result<()> {
        self.registry.validate()?;
        self.matrix.validate()?;

        if self.matrix.dim() != self.registry.len() {
            return Err(GraphError::DimensionMismatch {
                expected: self.registry.len(),
                actual: self.matrix.dim(),
            });
        }

        if !self.kind.is_directed() {
            if let Some((i, j)) = self.matrix.find_asymmetry() {
                return Err(GraphError::AsymmetricLink {
                    from: self.registry.id_at(i).unwrap_or(NodeId::INVALID),
                    to: self.registry.id_at(j).unwrap_or(NodeId::INVALID),
                });
            }
        }

        Ok(())
    }
}

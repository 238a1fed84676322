//! Identifier registry and rank translation.
//!
//! The registry keeps every live [`NodeId`] in ascending order. A node's
//! *rank* is its 0-based position in that order and doubles as its row and
//! column index in the [`AdjacencyMatrix`](super::AdjacencyMatrix).
//!
//! Two structures are kept in step:
//! - `ids[rank]` = identifier at that rank
//! - `ranks[id]` = rank of that identifier
//!
//! Inserting or removing an identifier shifts the rank of everything sorted
//! after it, so a rank is never a durable handle across mutation.

use std::collections::HashMap;

use super::node::NodeId;
use crate::{GraphError, Result};

/// Ordered, duplicate-free set of node identifiers with O(1) rank lookup.
#[derive(Debug, Clone, Default)]
pub struct NodeRegistry {
    /// Identifiers in ascending order.
    ids: Vec<NodeId>,
    /// Identifier to rank.
    ranks: HashMap<NodeId, usize>,
}

impl NodeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered identifiers.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Check if an identifier is registered.
    pub fn contains(&self, id: NodeId) -> bool {
        self.ranks.contains_key(&id)
    }

    /// Rank of `id`, or `None` if it is not registered.
    ///
    /// The sentinel is never registered, so it always resolves to `None`.
    pub fn rank_of(&self, id: NodeId) -> Option<usize> {
        self.ranks.get(&id).copied()
    }

    /// Identifier currently at `rank`.
    pub fn id_at(&self, rank: usize) -> Option<NodeId> {
        self.ids.get(rank).copied()
    }

    /// Identifiers in ascending order.
    pub fn as_slice(&self) -> &[NodeId] {
        &self.ids
    }

    /// Iterate identifiers in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.ids.iter().copied()
    }

    /// Register `id` and return its rank.
    ///
    /// Returns `None` without changing anything if `id` is the sentinel or
    /// already present.
    pub fn insert(&mut self, id: NodeId) -> Option<usize> {
        if !id.is_valid() {
            return None;
        }

        let rank = match self.ids.binary_search(&id) {
            Ok(_) => return None,
            Err(pos) => pos,
        };

        self.ids.insert(rank, id);
        for shifted in &self.ids[rank + 1..] {
            if let Some(r) = self.ranks.get_mut(shifted) {
                *r += 1;
            }
        }
        self.ranks.insert(id, rank);

        Some(rank)
    }

    /// Unregister `id` and return the rank it had.
    pub fn remove(&mut self, id: NodeId) -> Option<usize> {
        let rank = self.ranks.remove(&id)?;

        self.ids.remove(rank);
        for shifted in &self.ids[rank..] {
            if let Some(r) = self.ranks.get_mut(shifted) {
                *r -= 1;
            }
        }

        Some(rank)
    }

    /// Remove every identifier.
    pub fn clear(&mut self) {
        self.ids.clear();
        self.ranks.clear();
    }

    /// Validate ordering and the rank map.
    pub fn validate(&self) -> Result<()> {
        if self.ranks.len() != self.ids.len() {
            return Err(GraphError::DimensionMismatch {
                expected: self.ids.len(),
                actual: self.ranks.len(),
            });
        }

        for pair in self.ids.windows(2) {
            if pair[0] >= pair[1] {
                return Err(GraphError::UnsortedRegistry(format!(
                    "{} is not below {}",
                    pair[0], pair[1]
                )));
            }
        }

        for (rank, id) in self.ids.iter().enumerate() {
            if !id.is_valid() {
                return Err(GraphError::UnsortedRegistry(format!(
                    "sentinel registered at rank {}",
                    rank
                )));
            }
            if self.ranks.get(id) != Some(&rank) {
                return Err(GraphError::UnsortedRegistry(format!(
                    "rank map disagrees for {} at rank {}",
                    id, rank
                )));
            }
        }

        Ok(())
    }
}

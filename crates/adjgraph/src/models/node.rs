//! Node identifier types.
//!
//! - [`NodeId`]: caller-chosen identifier for a graph vertex
//! - [`Weight`]: value stored in an adjacency matrix cell

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Edge weight stored in the adjacency matrix. `0` means "no link".
pub type Weight = i32;

/// Node identifier (vertex ID).
///
/// Identifiers are chosen by the caller and only need to be unique within
/// one graph. `u64::MAX` is reserved as [`NodeId::INVALID`] and is never
/// stored; every operation given it is a no-op.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize,
)]
#[repr(transparent)]
#[serde(transparent)]
pub struct NodeId(pub u64);

impl NodeId {
    /// Largest identifier that can be stored in a graph.
    pub const MAX: NodeId = NodeId(u64::MAX - 1);

    /// Invalid/sentinel node ID.
    pub const INVALID: NodeId = NodeId(u64::MAX);

    /// Create a new node ID.
    pub const fn new(id: u64) -> Self {
        NodeId(id)
    }

    /// Check if this is a valid node ID.
    pub const fn is_valid(&self) -> bool {
        self.0 != u64::MAX
    }

    /// Get the inner value.
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl From<u64> for NodeId {
    fn from(id: u64) -> Self {
        NodeId(id)
    }
}

impl From<u32> for NodeId {
    fn from(id: u32) -> Self {
        NodeId(id as u64)
    }
}

impl From<NodeId> for u64 {
    fn from(id: NodeId) -> Self {
        id.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// SAFETY: NodeId is #[repr(transparent)] over u64
unsafe impl Zeroable for NodeId {}
unsafe impl Pod for NodeId {}

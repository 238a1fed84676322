//! Link semantics.
//!
//! A graph's link behaviour is fixed at construction by two independent
//! switches:
//! - [`Directedness`]: whether a link write is mirrored to the reverse cell
//! - [`WeightPolicy`]: whether weights are stored as given or as 0/1
//!
//! All four combinations go through [`GraphKind::link_writes`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::Weight;

/// Whether links have a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Directedness {
    /// `a - b` writes both `[a][b]` and `[b][a]`.
    #[default]
    Undirected,
    /// `a -> b` writes only `[a][b]`.
    Directed,
}

/// How link weights are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightPolicy {
    /// Any nonzero weight is stored as `1`.
    #[default]
    Boolean,
    /// Weights are stored as given.
    Arbitrary,
}

impl WeightPolicy {
    /// Value actually stored for a requested weight.
    pub const fn normalize(&self, weight: Weight) -> Weight {
        match self {
            WeightPolicy::Boolean => (weight != 0) as Weight,
            WeightPolicy::Arbitrary => weight,
        }
    }
}

/// Link configuration of a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GraphKind {
    /// Mirroring rule.
    pub directedness: Directedness,
    /// Stored value rule.
    pub weight_policy: WeightPolicy,
}

impl GraphKind {
    /// Undirected, unweighted.
    pub const UNDIRECTED: GraphKind =
        GraphKind::new(Directedness::Undirected, WeightPolicy::Boolean);
    /// Directed, unweighted.
    pub const DIRECTED: GraphKind = GraphKind::new(Directedness::Directed, WeightPolicy::Boolean);
    /// Undirected, weighted.
    pub const WEIGHTED: GraphKind =
        GraphKind::new(Directedness::Undirected, WeightPolicy::Arbitrary);
    /// Directed, weighted.
    pub const WEIGHTED_DIRECTED: GraphKind =
        GraphKind::new(Directedness::Directed, WeightPolicy::Arbitrary);

    /// Create a kind from its two switches.
    pub const fn new(directedness: Directedness, weight_policy: WeightPolicy) -> Self {
        Self {
            directedness,
            weight_policy,
        }
    }

    /// Check if links are directed.
    pub const fn is_directed(&self) -> bool {
        matches!(self.directedness, Directedness::Directed)
    }

    /// Check if arbitrary weights are kept.
    pub const fn is_weighted(&self) -> bool {
        matches!(self.weight_policy, WeightPolicy::Arbitrary)
    }

    /// Cell writes `(from, to, value)` needed to set the link `from -> to`
    /// to `weight`.
    ///
    /// Undirected kinds mirror the same value into the reverse cell, for
    /// weighted graphs too. A self-link yields a single write.
    pub fn link_writes<T: Copy + PartialEq>(
        &self,
        from: T,
        to: T,
        weight: Weight,
    ) -> LinkWrites<T> {
        let value = self.weight_policy.normalize(weight);
        let reverse = match self.directedness {
            Directedness::Undirected if from != to => Some((to, from, value)),
            _ => None,
        };

        LinkWrites {
            forward: Some((from, to, value)),
            reverse,
        }
    }
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dir = match self.directedness {
            Directedness::Undirected => "undirected",
            Directedness::Directed => "directed",
        };
        let weight = match self.weight_policy {
            WeightPolicy::Boolean => "unweighted",
            WeightPolicy::Arbitrary => "weighted",
        };
        write!(f, "{} {}", dir, weight)
    }
}

/// At most two cell writes produced by [`GraphKind::link_writes`].
#[derive(Debug, Clone)]
pub struct LinkWrites<T> {
    forward: Option<(T, T, Weight)>,
    reverse: Option<(T, T, Weight)>,
}

impl<T> Iterator for LinkWrites<T> {
    type Item = (T, T, Weight);

    fn next(&mut self) -> Option<Self::Item> {
        self.forward.take().or_else(|| self.reverse.take())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(WeightPolicy::Boolean.normalize(0), 0);
        assert_eq!(WeightPolicy::Boolean.normalize(7), 1);
        assert_eq!(WeightPolicy::Boolean.normalize(-2), 1);
        assert_eq!(WeightPolicy::Arbitrary.normalize(-2), -2);
    }

    #[test]
    fn test_undirected_writes_mirror() {
        let writes: Vec<_> = GraphKind::UNDIRECTED.link_writes(1, 3, 1).collect();
        assert_eq!(writes, vec![(1, 3, 1), (3, 1, 1)]);
    }

    #[test]
    fn test_directed_writes_forward_only() {
        let writes: Vec<_> = GraphKind::DIRECTED.link_writes(1, 3, 1).collect();
        assert_eq!(writes, vec![(1, 3, 1)]);
    }

    #[test]
    fn test_weighted_undirected_mirrors_weight() {
        let writes: Vec<_> = GraphKind::WEIGHTED.link_writes(2, 0, 9).collect();
        assert_eq!(writes, vec![(2, 0, 9), (0, 2, 9)]);
    }

    #[test]
    fn test_weighted_directed() {
        let writes: Vec<_> = GraphKind::WEIGHTED_DIRECTED.link_writes(2, 0, 9).collect();
        assert_eq!(writes, vec![(2, 0, 9)]);
        assert!(GraphKind::WEIGHTED_DIRECTED.is_directed());
        assert!(GraphKind::WEIGHTED_DIRECTED.is_weighted());
    }

    #[test]
    fn test_self_link_single_write() {
        let writes: Vec<_> = GraphKind::UNDIRECTED.link_writes(4, 4, 1).collect();
        assert_eq!(writes, vec![(4, 4, 1)]);
    }

    #[test]
    fn test_default_kind() {
        assert_eq!(GraphKind::default(), GraphKind::UNDIRECTED);
        assert_eq!(GraphKind::default().to_string(), "undirected unweighted");
        assert_eq!(GraphKind::WEIGHTED_DIRECTED.to_string(), "directed weighted");
    }
}

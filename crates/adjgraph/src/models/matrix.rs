//! Dense adjacency matrix.
//!
//! Memory layout:
//! - `cells[i * dim + j]` = weight of the link from rank `i` to rank `j`
//! - `0` means "no link"
//!
//! The matrix is indexed by rank, never by identifier. Growing and
//! shrinking happen one row/column at a time through [`insert_at`] and
//! [`remove_at`], which keep every untouched cell attached to the same pair
//! of nodes.
//!
//! [`insert_at`]: AdjacencyMatrix::insert_at
//! [`remove_at`]: AdjacencyMatrix::remove_at

use super::node::Weight;
use crate::{GraphError, Result};

/// Square `dim x dim` table of edge weights stored row-major.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    /// Number of rows (and columns).
    dim: usize,
    /// Row-major cells (length = dim * dim).
    cells: Vec<Weight>,
}

impl AdjacencyMatrix {
    /// Create an empty 0x0 matrix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an all-zero matrix of the given dimension.
    pub fn zeroed(dim: usize) -> Self {
        Self {
            dim,
            cells: vec![0; dim * dim],
        }
    }

    /// Number of rows (equals number of columns).
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Check if the matrix has no rows.
    pub fn is_empty(&self) -> bool {
        self.dim == 0
    }

    /// Weight at `[from][to]`, or `None` if either rank is out of range.
    pub fn get(&self, from: usize, to: usize) -> Option<Weight> {
        if from >= self.dim || to >= self.dim {
            return None;
        }
        Some(self.cells[from * self.dim + to])
    }

    /// Write `weight` at `[from][to]`.
    ///
    /// Returns false and leaves the matrix untouched if either rank is out
    /// of range.
    pub fn set(&mut self, from: usize, to: usize, weight: Weight) -> bool {
        if from >= self.dim || to >= self.dim {
            return false;
        }
        self.cells[from * self.dim + to] = weight;
        true
    }

    /// Get one row (empty if out of range).
    pub fn row(&self, rank: usize) -> &[Weight] {
        if rank >= self.dim {
            return &[];
        }
        let start = rank * self.dim;
        &self.cells[start..start + self.dim]
    }

    /// Iterate rows in rank order.
    pub fn rows(&self) -> impl Iterator<Item = &[Weight]> + '_ {
        self.cells.chunks(self.dim.max(1))
    }

    /// Column ranks with a nonzero weight in row `rank`, ascending.
    pub fn successors(&self, rank: usize) -> impl Iterator<Item = usize> + '_ {
        self.row(rank)
            .iter()
            .enumerate()
            .filter(|&(_, &w)| w != 0)
            .map(|(col, _)| col)
    }

    /// Raw row-major cells as bytes.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.cells)
    }

    /// Grow by one, inserting an all-zero row and column at `rank`.
    ///
    /// Old ranks below `rank` keep their position, old ranks at or above it
    /// move up by one. `rank` may equal the current dimension (append).
    ///
    /// # Panics
    ///
    /// Panics if `rank > dim`.
    pub fn insert_at(&mut self, rank: usize) {
        assert!(
            rank <= self.dim,
            "insert rank {} beyond dimension {}",
            rank,
            self.dim
        );

        let old_dim = self.dim;
        let new_dim = old_dim + 1;
        let shift = |old: usize| if old >= rank { old + 1 } else { old };

        let mut cells = vec![0; new_dim * new_dim];
        for i in 0..old_dim {
            let row = shift(i) * new_dim;
            for j in 0..old_dim {
                cells[row + shift(j)] = self.cells[i * old_dim + j];
            }
        }

        self.dim = new_dim;
        self.cells = cells;
    }

    /// Shrink by one, deleting row and column `rank`.
    ///
    /// Ranks above `rank` move down by one, ranks below it are unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `rank >= dim`.
    pub fn remove_at(&mut self, rank: usize) {
        assert!(
            rank < self.dim,
            "remove rank {} beyond dimension {}",
            rank,
            self.dim
        );

        let old_dim = self.dim;
        let new_dim = old_dim - 1;
        let shift = |old: usize| if old > rank { old - 1 } else { old };

        let mut cells = vec![0; new_dim * new_dim];
        for i in (0..old_dim).filter(|&i| i != rank) {
            let row = shift(i) * new_dim;
            for j in (0..old_dim).filter(|&j| j != rank) {
                cells[row + shift(j)] = self.cells[i * old_dim + j];
            }
        }

        self.dim = new_dim;
        self.cells = cells;
    }

    /// Drop every row and column.
    pub fn clear(&mut self) {
        self.dim = 0;
        self.cells.clear();
    }

    /// First pair `(i, j)` with `[i][j] != [j][i]`, if any.
    pub fn find_asymmetry(&self) -> Option<(usize, usize)> {
        for i in 0..self.dim {
            for j in i + 1..self.dim {
                if self.cells[i * self.dim + j] != self.cells[j * self.dim + i] {
                    return Some((i, j));
                }
            }
        }
        None
    }

    /// Validate storage length against the dimension.
    pub fn validate(&self) -> Result<()> {
        if self.cells.len() != self.dim * self.dim {
            return Err(GraphError::DimensionMismatch {
                expected: self.dim * self.dim,
                actual: self.cells.len(),
            });
        }
        Ok(())
    }
}

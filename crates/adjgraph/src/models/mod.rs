//! Graph data models.
//!
//! This module provides the storage behind a [`Graph`](crate::Graph):
//! - [`NodeRegistry`]: sorted identifiers and their ranks
//! - [`AdjacencyMatrix`]: dense rank-indexed weight table
//! - [`NodeId`], [`Weight`]: node and edge value types

pub mod matrix;
pub mod node;
pub mod registry;

pub use matrix::AdjacencyMatrix;
pub use node::{NodeId, Weight};
pub use registry::NodeRegistry;

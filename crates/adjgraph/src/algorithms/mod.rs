//! Graph algorithms.
//!
//! - [`dfs`]: Depth-first reachability over the adjacency matrix

pub mod dfs;

pub use dfs::{has_path_by_rank, reachable_by_rank};

//! Depth-first reachability search.
//!
//! Answers "is there a nonzero-weight path from rank A to rank B" directly
//! on an [`AdjacencyMatrix`]. A node with a nonzero cell in the target's
//! column ends the search; otherwise every unvisited successor is explored.
//!
//! The start node is not treated as trivially connected to itself: a query
//! with `from == to` succeeds only through a self-loop or a cycle back to it.

use tracing::trace;

use crate::models::AdjacencyMatrix;

/// Check whether `to` is reachable from `from` over nonzero edges.
///
/// Ranks out of range yield `false`. Runs in O(N^2) worst case, scanning
/// one matrix row per visited node. Uses an explicit stack instead of
/// recursion, so long chains cannot overflow the call stack.
pub fn has_path_by_rank(adj: &AdjacencyMatrix, from: usize, to: usize) -> bool {
    let n = adj.dim();
    if from >= n || to >= n {
        return false;
    }

    let mut visited = vec![false; n];
    let mut stack = vec![from];

    while let Some(current) = stack.pop() {
        if visited[current] {
            continue;
        }
        visited[current] = true;

        if adj.get(current, to).unwrap_or(0) != 0 {
            trace!(from, to, via = current, "path found");
            return true;
        }

        stack.extend(adj.successors(current).filter(|&next| !visited[next]));
    }

    trace!(from, to, "no path");
    false
}

/// Ranks reachable from `from` over one or more nonzero edges.
///
/// `from` itself is included only if it lies on a cycle.
pub fn reachable_by_rank(adj: &AdjacencyMatrix, from: usize) -> Vec<bool> {
    let n = adj.dim();
    let mut reached = vec![false; n];
    if from >= n {
        return reached;
    }

    let mut expanded = vec![false; n];
    let mut stack = vec![from];

    while let Some(current) = stack.pop() {
        if expanded[current] {
            continue;
        }
        expanded[current] = true;

        for next in adj.successors(current) {
            reached[next] = true;
            if !expanded[next] {
                stack.push(next);
            }
        }
    }

    reached
}

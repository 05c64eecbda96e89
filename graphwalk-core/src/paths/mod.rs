//! Single-source path search.
//!
//! Both searches record, for every vertex they discover, the edge that
//! discovered it first (`edge_to`). Following those edges back from a
//! target and reversing gives a path from the source.
//!
//! - [`BreadthFirstPaths`]: shortest paths by edge count
//! - [`DepthFirstPaths`]: some path, explicit-stack DFS

mod bfs;
mod dfs;

pub use bfs::BreadthFirstPaths;
pub use dfs::DepthFirstPaths;

use crate::common::Vertex;

/// Walk `edge_to` from `target` back to `source`, then reverse.
///
/// Callers only pass targets that were discovered from `source`.
fn trace_path(edge_to: &[Option<Vertex>], source: Vertex, target: Vertex) -> Vec<Vertex> {
    let mut path = vec![target];
    let mut x = target;
    while x != source {
        match edge_to[x] {
            Some(parent) => {
                path.push(parent);
                x = parent;
            }
            None => break,
        }
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_path() {
        // 0 -> 2 -> 1 -> 3
        let edge_to = [None, Some(2), Some(0), Some(1)];
        assert_eq!(trace_path(&edge_to, 0, 3), vec![0, 2, 1, 3]);
        assert_eq!(trace_path(&edge_to, 0, 0), vec![0]);
    }
}

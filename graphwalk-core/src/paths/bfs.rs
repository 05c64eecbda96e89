//! Breadth-first shortest paths.
//!
//! The frontier is a FIFO queue, so vertices are dequeued in non-decreasing
//! distance from the source and the first edge to reach a vertex lies on a
//! shortest path to it. Time and space O(V + E).

use std::collections::VecDeque;

use tracing::debug;

use super::trace_path;
use crate::common::{GraphTraversal, Vertex};
use crate::error::GraphResult;

#[derive(Debug, Clone)]
pub struct BreadthFirstPaths {
    source: Vertex,
    marked: Vec<bool>,
    edge_to: Vec<Option<Vertex>>,
    dist_to: Vec<Option<usize>>,
}

impl BreadthFirstPaths {
    /// Search from `source`. Fails with `VertexOutOfRange` if it is not a vertex.
    pub fn new<G: GraphTraversal>(graph: &G, source: Vertex) -> GraphResult<Self> {
        graph.check_vertex(source)?;
        let n = graph.vertex_count();
        let mut marked = vec![false; n];
        let mut edge_to = vec![None; n];
        let mut dist_to = vec![None; n];
        let mut queue = VecDeque::new();

        marked[source] = true;
        dist_to[source] = Some(0);
        queue.push_back(source);

        while let Some(v) = queue.pop_front() {
            let next = dist_to[v].map(|d| d + 1);
            for &w in graph.neighbors(v) {
                if !marked[w] {
                    marked[w] = true;
                    edge_to[w] = Some(v);
                    dist_to[w] = next;
                    queue.push_back(w);
                }
            }
        }

        debug!(source, vertices = n, "breadth-first search finished");
        Ok(Self {
            source,
            marked,
            edge_to,
            dist_to,
        })
    }

    pub fn source(&self) -> Vertex {
        self.source
    }

    pub fn has_path_to(&self, v: Vertex) -> bool {
        self.marked.get(v).copied().unwrap_or(false)
    }

    /// Shortest path from the source to `v`, both ends included.
    pub fn path_to(&self, v: Vertex) -> Option<Vec<Vertex>> {
        self.has_path_to(v)
            .then(|| trace_path(&self.edge_to, self.source, v))
    }

    /// Number of edges on the shortest path to `v`.
    pub fn dist_to(&self, v: Vertex) -> Option<usize> {
        self.dist_to.get(v).copied().flatten()
    }

    pub fn vertex_count(&self) -> usize {
        self.marked.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;
    use crate::graph::{Digraph, Graph};

    /// tinyCG from the standard textbook data set
    #[rustfmt::skip]
    fn tiny_cg() -> Graph {
        let edges = [
            (0, 5), (2, 4), (2, 3), (1, 2),
            (0, 1), (3, 4), (3, 5), (0, 2),
        ];
        Graph::from_edges(6, edges).unwrap()
    }

    #[test]
    fn test_shortest_paths_tiny_cg() {
        let paths = BreadthFirstPaths::new(&tiny_cg(), 0).unwrap();
        assert_eq!(paths.path_to(0), Some(vec![0]));
        assert_eq!(paths.path_to(1), Some(vec![0, 1]));
        assert_eq!(paths.path_to(2), Some(vec![0, 2]));
        assert_eq!(paths.path_to(3), Some(vec![0, 5, 3]));
        assert_eq!(paths.path_to(4), Some(vec![0, 2, 4]));
        assert_eq!(paths.path_to(5), Some(vec![0, 5]));
        assert_eq!(paths.dist_to(3), Some(2));
        assert_eq!(paths.dist_to(0), Some(0));
    }

    #[test]
    fn test_unreachable_is_none() {
        let d = Digraph::from_edges(3, [(0, 1)]).unwrap();
        let paths = BreadthFirstPaths::new(&d, 1).unwrap();
        assert!(!paths.has_path_to(0));
        assert_eq!(paths.path_to(0), None);
        assert_eq!(paths.dist_to(2), None);
        assert!(!paths.has_path_to(10));
        assert_eq!(paths.path_to(10), None);
    }

    #[test]
    fn test_out_of_range_source() {
        let err = BreadthFirstPaths::new(&Graph::new(2), 2).unwrap_err();
        assert!(matches!(err, GraphError::VertexOutOfRange { vertex: 2, .. }));
    }

    #[test]
    fn test_prefers_fewer_edges_over_insertion_order() {
        // 0 -> 1 -> 2 -> 3 inserted before the direct 0 -> 3
        let d = Digraph::from_edges(4, [(0, 1), (1, 2), (2, 3), (0, 3)]).unwrap();
        let paths = BreadthFirstPaths::new(&d, 0).unwrap();
        assert_eq!(paths.path_to(3), Some(vec![0, 3]));
    }
}

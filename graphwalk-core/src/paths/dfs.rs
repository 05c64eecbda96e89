//! Depth-first paths with an explicit work stack.
//!
//! Gives *some* path to every reachable vertex, not necessarily a shortest
//! one. `edge_to[w]` is written only when `w` is first discovered, so the
//! recorded edges always form a single tree rooted at the source.

use tracing::debug;

use super::trace_path;
use crate::common::{Frame, GraphTraversal, Vertex};
use crate::error::GraphResult;

#[derive(Debug, Clone)]
pub struct DepthFirstPaths {
    source: Vertex,
    marked: Vec<bool>,
    edge_to: Vec<Option<Vertex>>,
}

impl DepthFirstPaths {
    /// Search from `source`. Fails with `VertexOutOfRange` if it is not a vertex.
    pub fn new<G: GraphTraversal>(graph: &G, source: Vertex) -> GraphResult<Self> {
        graph.check_vertex(source)?;
        let n = graph.vertex_count();
        let mut marked = vec![false; n];
        let mut edge_to = vec![None; n];

        marked[source] = true;
        let mut stack = vec![Frame::enter(source)];
        while let Some(frame) = stack.last_mut() {
            let v = frame.vertex;
            match frame.next_neighbor(graph) {
                Some(w) if !marked[w] => {
                    marked[w] = true;
                    edge_to[w] = Some(v);
                    stack.push(Frame::enter(w));
                }
                Some(_) => {}
                None => {
                    stack.pop();
                }
            }
        }

        debug!(source, vertices = n, "depth-first search finished");
        Ok(Self {
            source,
            marked,
            edge_to,
        })
    }

    pub fn source(&self) -> Vertex {
        self.source
    }

    pub fn has_path_to(&self, v: Vertex) -> bool {
        self.marked.get(v).copied().unwrap_or(false)
    }

    /// A path from the source to `v`, both ends included.
    pub fn path_to(&self, v: Vertex) -> Option<Vec<Vertex>> {
        self.has_path_to(v)
            .then(|| trace_path(&self.edge_to, self.source, v))
    }

    pub fn vertex_count(&self) -> usize {
        self.marked.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Digraph, Graph};

    #[rustfmt::skip]
    fn tiny_cg() -> Graph {
        let edges = [
            (0, 5), (2, 4), (2, 3), (1, 2),
            (0, 1), (3, 4), (3, 5), (0, 2),
        ];
        Graph::from_edges(6, edges).unwrap()
    }

    #[test]
    fn test_paths_follow_depth_first_tree() {
        let paths = DepthFirstPaths::new(&tiny_cg(), 0).unwrap();
        // 0 -> 5 -> 3 -> 2 -> 4, then 2 -> 1
        assert_eq!(paths.path_to(5), Some(vec![0, 5]));
        assert_eq!(paths.path_to(3), Some(vec![0, 5, 3]));
        assert_eq!(paths.path_to(4), Some(vec![0, 5, 3, 2, 4]));
        assert_eq!(paths.path_to(1), Some(vec![0, 5, 3, 2, 1]));
        assert_eq!(paths.path_to(0), Some(vec![0]));
    }

    #[test]
    fn test_rediscovery_keeps_first_parent() {
        // 1 is first reached from 0 directly; 2 -> 1 must not re-parent it
        let d = Digraph::from_edges(3, [(0, 1), (0, 2), (2, 1)]).unwrap();
        let paths = DepthFirstPaths::new(&d, 0).unwrap();
        assert_eq!(paths.path_to(1), Some(vec![0, 1]));
        assert_eq!(paths.path_to(2), Some(vec![0, 2]));
    }

    #[test]
    fn test_unreachable_and_out_of_range() {
        let d = Digraph::from_edges(3, [(1, 0)]).unwrap();
        let paths = DepthFirstPaths::new(&d, 0).unwrap();
        assert!(!paths.has_path_to(1));
        assert_eq!(paths.path_to(2), None);
        assert_eq!(paths.path_to(3), None);
        assert!(DepthFirstPaths::new(&d, 3).is_err());
    }

    #[test]
    fn test_long_path_does_not_overflow() {
        let n = 200_000;
        let g = Graph::from_edges(n, (0..n - 1).map(|v| (v, v + 1))).unwrap();
        let paths = DepthFirstPaths::new(&g, 0).unwrap();
        assert_eq!(paths.path_to(n - 1).map(|p| p.len()), Some(n));
    }
}

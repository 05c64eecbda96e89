//! Shared graph traversal abstraction.
//!
//! Every analysis depends on [`GraphTraversal`] instead of a concrete graph
//! type, so the same walk runs over undirected and directed graphs. Analyses
//! that need edge directions flipped additionally require [`Reversible`].

use crate::error::{GraphError, GraphResult};

/// Vertices are positional indices in `[0, V)`.
pub type Vertex = usize;

/// Capability interface for adjacency-list graphs.
///
/// # Example
/// ```ignore
/// impl GraphTraversal for Digraph {
///     fn vertex_count(&self) -> usize { self.vertex_count }
///     fn edge_count(&self) -> usize { self.edge_count }
///     fn neighbors(&self, v: Vertex) -> &[Vertex] { &self.adjacency[v] }
/// }
///
/// // Use default reachability walk
/// let marked = digraph.reachable_from([0, 3]);
/// ```
pub trait GraphTraversal {
    /// Number of vertices `V`.
    fn vertex_count(&self) -> usize;

    /// Number of `add_edge` calls that succeeded.
    fn edge_count(&self) -> usize;

    /// Neighbors of `v` in insertion order. Empty for out-of-range `v`.
    fn neighbors(&self, v: Vertex) -> &[Vertex];

    /// Checks if the graph contains a vertex.
    fn contains_vertex(&self, v: Vertex) -> bool {
        v < self.vertex_count()
    }

    /// Returns `VertexOutOfRange` unless `v` is in `[0, V)`.
    fn check_vertex(&self, v: Vertex) -> GraphResult<()> {
        if self.contains_vertex(v) {
            Ok(())
        } else {
            Err(GraphError::out_of_range(v, self.vertex_count()))
        }
    }

    /// Marks every vertex reachable from any of `roots`.
    ///
    /// Depth-first with a vertex work stack; each vertex is pushed at most
    /// once, so the walk is O(V + E) regardless of the number of roots.
    /// Out-of-range roots are skipped.
    fn reachable_from<I>(&self, roots: I) -> Vec<bool>
    where
        I: IntoIterator<Item = Vertex>,
    {
        let mut marked = vec![false; self.vertex_count()];
        let mut stack = Vec::new();

        for root in roots {
            if self.contains_vertex(root) && !marked[root] {
                marked[root] = true;
                stack.push(root);
            }
        }

        while let Some(v) = stack.pop() {
            for &w in self.neighbors(v) {
                if !marked[w] {
                    marked[w] = true;
                    stack.push(w);
                }
            }
        }

        marked
    }

    /// Single-root convenience wrapper around `reachable_from`.
    fn reachable_from_single(&self, root: Vertex) -> Vec<bool> {
        self.reachable_from(std::iter::once(root))
    }
}

/// Directed graphs that can produce their edge-reversed copy.
pub trait Reversible: GraphTraversal + Sized {
    /// New graph with the same vertices and every edge flipped.
    fn reverse(&self) -> Self;
}

//! Adjacency-list graph model.
//!
//! Two concrete variants implement [`GraphTraversal`]:
//! - [`Graph`]: undirected; each edge is stored in both endpoints' lists
//! - [`Digraph`]: directed; each edge is stored once, forward
//!
//! Vertex count is fixed at construction. Neighbor lists keep insertion
//! order; self-loops and parallel edges are kept as given. Every stored
//! neighbor lies in `[0, V)` because `add_edge` rejects anything else.
//!
//! Performance characteristics:
//! - Build: O(V + E)
//! - `add_edge`: O(1) amortized
//! - `neighbors`: O(1) to obtain, O(degree) to iterate
//! - `Digraph::reverse`: O(V + E)

use std::fmt;

use crate::common::{GraphTraversal, Reversible, Vertex};
use crate::error::{GraphError, GraphResult};

fn check_endpoints(v: Vertex, w: Vertex, vertex_count: usize) -> GraphResult<()> {
    for x in [v, w] {
        if x >= vertex_count {
            return Err(GraphError::out_of_range(x, vertex_count));
        }
    }
    Ok(())
}

fn write_adjacency(
    f: &mut fmt::Formatter<'_>,
    vertex_count: usize,
    edge_count: usize,
    adjacency: &[Vec<Vertex>],
) -> fmt::Result {
    writeln!(f, "{} vertices, {} edges", vertex_count, edge_count)?;
    for (v, list) in adjacency.iter().enumerate() {
        write!(f, "{}:", v)?;
        for w in list {
            write!(f, " {}", w)?;
        }
        writeln!(f)?;
    }
    Ok(())
}

// ============================================================================
// Undirected graph
// ============================================================================

/// Undirected graph over vertices `0..V`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Graph {
    edge_count: usize,
    adjacency: Vec<Vec<Vertex>>,
}

impl Graph {
    /// Create a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            edge_count: 0,
            adjacency: vec![Vec::new(); vertex_count],
        }
    }

    /// Build a graph from an edge list, stopping at the first bad edge.
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = (Vertex, Vertex)>,
    {
        let mut graph = Self::new(vertex_count);
        for (v, w) in edges {
            graph.add_edge(v, w)?;
        }
        Ok(graph)
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Add the undirected edge `v-w`.
    ///
    /// Appends `w` to `v`'s list and `v` to `w`'s list, so a self-loop shows
    /// up twice in its own list. The edge count grows by one either way.
    pub fn add_edge(&mut self, v: Vertex, w: Vertex) -> GraphResult<()> {
        check_endpoints(v, w, self.vertex_count())?;
        self.adjacency[v].push(w);
        self.adjacency[w].push(v);
        self.edge_count += 1;
        Ok(())
    }

    /// Vertices adjacent to `v` in insertion order.
    pub fn neighbors(&self, v: Vertex) -> &[Vertex] {
        self.adjacency.get(v).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of list entries for `v` (a self-loop counts twice).
    pub fn degree(&self, v: Vertex) -> usize {
        self.neighbors(v).len()
    }

    /// Every edge once, reported from its lower endpoint.
    pub fn edges(&self) -> impl Iterator<Item = (Vertex, Vertex)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(v, list)| {
            // A self-loop is stored twice in its own list; emit every other copy.
            let mut loops_seen = 0usize;
            list.iter().filter_map(move |&w| {
                if w == v {
                    loops_seen += 1;
                    (loops_seen % 2 == 1).then_some((v, w))
                } else {
                    (v < w).then_some((v, w))
                }
            })
        })
    }
}

impl GraphTraversal for Graph {
    fn vertex_count(&self) -> usize {
        Graph::vertex_count(self)
    }

    fn edge_count(&self) -> usize {
        Graph::edge_count(self)
    }

    fn neighbors(&self, v: Vertex) -> &[Vertex] {
        Graph::neighbors(self, v)
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_adjacency(f, self.vertex_count(), self.edge_count, &self.adjacency)
    }
}

// ============================================================================
// Directed graph
// ============================================================================

/// Directed graph over vertices `0..V`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Digraph {
    edge_count: usize,
    adjacency: Vec<Vec<Vertex>>,
    in_degree: Vec<usize>,
}

impl Digraph {
    /// Create a digraph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            edge_count: 0,
            adjacency: vec![Vec::new(); vertex_count],
            in_degree: vec![0; vertex_count],
        }
    }

    /// Build a digraph from an edge list, stopping at the first bad edge.
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = (Vertex, Vertex)>,
    {
        let mut digraph = Self::new(vertex_count);
        for (v, w) in edges {
            digraph.add_edge(v, w)?;
        }
        Ok(digraph)
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Add the directed edge `v->w`.
    pub fn add_edge(&mut self, v: Vertex, w: Vertex) -> GraphResult<()> {
        check_endpoints(v, w, self.vertex_count())?;
        self.adjacency[v].push(w);
        self.in_degree[w] += 1;
        self.edge_count += 1;
        Ok(())
    }

    /// Vertices `v` points to, in insertion order.
    pub fn neighbors(&self, v: Vertex) -> &[Vertex] {
        self.adjacency.get(v).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn out_degree(&self, v: Vertex) -> usize {
        self.neighbors(v).len()
    }

    pub fn in_degree(&self, v: Vertex) -> usize {
        self.in_degree.get(v).copied().unwrap_or(0)
    }

    /// Every edge `v->w` grouped by tail in vertex order.
    pub fn edges(&self) -> impl Iterator<Item = (Vertex, Vertex)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(v, list)| list.iter().map(move |&w| (v, w)))
    }

    /// Copy of this digraph with every edge direction flipped.
    ///
    /// Vertex and edge counts are preserved. Neighbor lists come out in
    /// tail-vertex order, which is a valid adjacency but not the source
    /// insertion order.
    pub fn reverse(&self) -> Digraph {
        let n = self.vertex_count();
        let mut reversed = Digraph {
            edge_count: self.edge_count,
            adjacency: vec![Vec::new(); n],
            in_degree: self.adjacency.iter().map(Vec::len).collect(),
        };
        for (v, list) in self.adjacency.iter().enumerate() {
            for &w in list {
                reversed.adjacency[w].push(v);
            }
        }
        reversed
    }
}

impl GraphTraversal for Digraph {
    fn vertex_count(&self) -> usize {
        Digraph::vertex_count(self)
    }

    fn edge_count(&self) -> usize {
        Digraph::edge_count(self)
    }

    fn neighbors(&self, v: Vertex) -> &[Vertex] {
        Digraph::neighbors(self, v)
    }
}

impl Reversible for Digraph {
    fn reverse(&self) -> Self {
        Digraph::reverse(self)
    }
}

impl fmt::Display for Digraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_adjacency(f, self.vertex_count(), self.edge_count, &self.adjacency)
    }
}

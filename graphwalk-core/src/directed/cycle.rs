//! Directed cycle detection.
//!
//! Depth-first search from every unmarked vertex. Each vertex moves through
//! Unvisited -> OnStack -> Done; meeting a neighbor that is still OnStack is
//! a back edge, and the `edge_to` chain from the current vertex back to that
//! neighbor is the cycle. The first cycle found ends the search.
//!
//! Time O(V + E), space O(V).

use tracing::debug;

use crate::common::{Frame, GraphTraversal, Reversible, Vertex};

/// Finds one directed cycle, if any exists.
///
/// Only directed graphs qualify; every undirected edge would read as a
/// two-vertex cycle.
///
/// ```compile_fail
/// use graphwalk_core::{DirectedCycle, Graph};
///
/// let graph = Graph::from_edges(2, [(0, 1)]).unwrap();
/// DirectedCycle::new(&graph);
/// ```
#[derive(Debug, Clone)]
pub struct DirectedCycle {
    marked: Vec<bool>,
    edge_to: Vec<Option<Vertex>>,
    on_stack: Vec<bool>,
    /// `[w, ..., v, w]` in edge order
    cycle: Option<Vec<Vertex>>,
}

impl DirectedCycle {
    /// Run the search over every component of `graph`.
    pub fn new<G: Reversible>(graph: &G) -> Self {
        let n = graph.vertex_count();
        let mut finder = Self {
            marked: vec![false; n],
            edge_to: vec![None; n],
            on_stack: vec![false; n],
            cycle: None,
        };

        for root in 0..n {
            if finder.cycle.is_some() {
                break;
            }
            if !finder.marked[root] {
                finder.search(graph, root);
            }
        }

        debug!(
            vertices = n,
            edges = graph.edge_count(),
            has_cycle = finder.cycle.is_some(),
            "directed cycle search finished"
        );
        finder
    }

    fn search<G: GraphTraversal>(&mut self, graph: &G, root: Vertex) {
        self.marked[root] = true;
        self.on_stack[root] = true;
        let mut stack = vec![Frame::enter(root)];

        while let Some(frame) = stack.last_mut() {
            let v = frame.vertex;
            match frame.next_neighbor(graph) {
                Some(w) if !self.marked[w] => {
                    self.edge_to[w] = Some(v);
                    self.marked[w] = true;
                    self.on_stack[w] = true;
                    stack.push(Frame::enter(w));
                }
                Some(w) if self.on_stack[w] => {
                    self.cycle = Some(self.witness(v, w));
                    return;
                }
                // Cross or forward edge into a finished vertex
                Some(_) => {}
                None => {
                    self.on_stack[v] = false;
                    stack.pop();
                }
            }
        }
    }

    /// Cycle closed by the back edge `v -> w`, where `w` is on the stack.
    fn witness(&self, v: Vertex, w: Vertex) -> Vec<Vertex> {
        let mut path = Vec::new();
        let mut x = v;
        while x != w {
            path.push(x);
            match self.edge_to[x] {
                Some(parent) => x = parent,
                None => break,
            }
        }

        let mut cycle = Vec::with_capacity(path.len() + 2);
        cycle.push(w);
        cycle.extend(path.into_iter().rev());
        cycle.push(w);
        cycle
    }

    pub fn has_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    /// The witness: first and last vertices are equal, and each consecutive
    /// pair is an edge of the graph. `None` when the graph is acyclic.
    pub fn cycle(&self) -> Option<&[Vertex]> {
        self.cycle.as_deref()
    }
}

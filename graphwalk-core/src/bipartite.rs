//! Bipartiteness by depth-first two-coloring.
//!
//! Every component root gets `false`; each tree edge flips the color. An
//! edge between two marked vertices of the same color proves an odd cycle
//! and clears the bipartite flag for good. All components are scanned, so
//! a graph is bipartite only if every component is.

use tracing::debug;

use crate::common::{Frame, GraphTraversal, Vertex};

#[derive(Debug, Clone)]
pub struct Bipartite {
    marked: Vec<bool>,
    color: Vec<bool>,
    is_bipartite: bool,
}

impl Bipartite {
    pub fn new<G: GraphTraversal>(graph: &G) -> Self {
        let n = graph.vertex_count();
        let mut marked = vec![false; n];
        let mut color = vec![false; n];
        let mut is_bipartite = true;
        let mut stack = Vec::new();

        for root in 0..n {
            if marked[root] {
                continue;
            }
            marked[root] = true;
            stack.push(Frame::enter(root));

            while let Some(frame) = stack.last_mut() {
                let v = frame.vertex;
                match frame.next_neighbor(graph) {
                    Some(w) if !marked[w] => {
                        marked[w] = true;
                        color[w] = !color[v];
                        stack.push(Frame::enter(w));
                    }
                    Some(w) => {
                        if color[w] == color[v] {
                            is_bipartite = false;
                        }
                    }
                    None => {
                        stack.pop();
                    }
                }
            }
        }

        debug!(vertices = n, is_bipartite, "two-coloring finished");
        Self {
            marked,
            color,
            is_bipartite,
        }
    }

    pub fn is_bipartite(&self) -> bool {
        self.is_bipartite
    }

    /// Side assigned to `v`. Only a valid two-coloring when the graph is
    /// bipartite.
    pub fn color(&self, v: Vertex) -> Option<bool> {
        if self.marked.get(v).copied().unwrap_or(false) {
            Some(self.color[v])
        } else {
            None
        }
    }

    pub fn colors(&self) -> &[bool] {
        &self.color
    }
}

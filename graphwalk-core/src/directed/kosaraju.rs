//! Kosaraju's linear-time strongly connected components.
//!
//! 1. Reverse the digraph.
//! 2. Take the reverse postorder of a depth-first walk over the reverse.
//! 3. Walk the original digraph, choosing roots in that order; each root
//!    opens a new component and everything its walk marks belongs to it.
//!
//! A walk launched in step 3 never leaves its own component: every
//! component it could escape into was already marked by an earlier root.
//! Time O(V + E), space O(V + E).

use tracing::debug;

use super::{DepthFirstOrder, StrongComponents};
use crate::common::{Frame, Reversible};

#[derive(Debug, Clone)]
pub struct KosarajuScc {
    id: Vec<usize>,
    count: usize,
}

impl KosarajuScc {
    pub fn new<G: Reversible>(graph: &G) -> Self {
        let n = graph.vertex_count();
        let order = DepthFirstOrder::new(&graph.reverse());

        let mut marked = vec![false; n];
        let mut id = vec![0; n];
        let mut count = 0;
        let mut stack = Vec::new();

        for root in order.reverse_post() {
            if marked[root] {
                continue;
            }
            marked[root] = true;
            id[root] = count;
            stack.push(Frame::enter(root));

            while let Some(frame) = stack.last_mut() {
                match frame.next_neighbor(graph) {
                    Some(w) if !marked[w] => {
                        marked[w] = true;
                        id[w] = count;
                        stack.push(Frame::enter(w));
                    }
                    Some(_) => {}
                    None => {
                        stack.pop();
                    }
                }
            }
            count += 1;
        }

        debug!(
            vertices = n,
            edges = graph.edge_count(),
            components = count,
            "kosaraju scc finished"
        );
        Self { id, count }
    }
}

impl StrongComponents for KosarajuScc {
    fn ids(&self) -> &[usize] {
        &self.id
    }

    fn count(&self) -> usize {
        self.count
    }
}

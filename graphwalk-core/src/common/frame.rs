//! Work-stack frames for depth-first walks without call-stack recursion.
//!
//! A `Frame` stands in for one recursive call: pushing it is the entering
//! event, [`Frame::next_neighbor`] resumes the neighbor loop where it left
//! off, and popping it once the neighbors run out is the returning event.
//!
//! ```ignore
//! let mut stack = vec![Frame::enter(root)];
//! while let Some(frame) = stack.last_mut() {
//!     let v = frame.vertex;
//!     match frame.next_neighbor(graph) {
//!         Some(w) if !marked[w] => { marked[w] = true; stack.push(Frame::enter(w)); }
//!         Some(_) => {}
//!         None => { stack.pop(); /* postorder work for v */ }
//!     }
//! }
//! ```

use super::graph_trait::{GraphTraversal, Vertex};

/// One suspended depth-first visit: the vertex and how far its neighbor
/// list has been scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub vertex: Vertex,
    cursor: usize,
}

impl Frame {
    /// Frame for a vertex whose neighbors have not been scanned yet.
    pub fn enter(vertex: Vertex) -> Self {
        Self { vertex, cursor: 0 }
    }

    /// Next unscanned neighbor, or `None` once the list is exhausted.
    pub fn next_neighbor<G>(&mut self, graph: &G) -> Option<Vertex>
    where
        G: GraphTraversal + ?Sized,
    {
        let w = graph.neighbors(self.vertex).get(self.cursor).copied()?;
        self.cursor += 1;
        Some(w)
    }
}

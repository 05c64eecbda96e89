//! Depth-first vertex orderings.
//!
//! Preorder is the order frames are entered, postorder the order they
//! return. Reverse postorder is a topological order on a DAG and the root
//! order Kosaraju's second pass consumes.

use crate::common::{Frame, GraphTraversal, Vertex};

#[derive(Debug, Clone)]
pub struct DepthFirstOrder {
    pre: Vec<Vertex>,
    post: Vec<Vertex>,
}

impl DepthFirstOrder {
    /// Walk every vertex, taking roots in index order.
    pub fn new<G: GraphTraversal>(graph: &G) -> Self {
        let n = graph.vertex_count();
        let mut marked = vec![false; n];
        let mut pre = Vec::with_capacity(n);
        let mut post = Vec::with_capacity(n);
        let mut stack = Vec::new();

        for root in 0..n {
            if marked[root] {
                continue;
            }
            marked[root] = true;
            pre.push(root);
            stack.push(Frame::enter(root));

            while let Some(frame) = stack.last_mut() {
                let v = frame.vertex;
                match frame.next_neighbor(graph) {
                    Some(w) if !marked[w] => {
                        marked[w] = true;
                        pre.push(w);
                        stack.push(Frame::enter(w));
                    }
                    Some(_) => {}
                    None => {
                        stack.pop();
                        post.push(v);
                    }
                }
            }
        }

        Self { pre, post }
    }

    pub fn pre(&self) -> &[Vertex] {
        &self.pre
    }

    pub fn post(&self) -> &[Vertex] {
        &self.post
    }

    pub fn reverse_post(&self) -> Vec<Vertex> {
        self.post.iter().rev().copied().collect()
    }
}

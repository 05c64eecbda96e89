//! Topological order of a directed acyclic graph.

use super::{DepthFirstOrder, DirectedCycle};
use crate::common::{Reversible, Vertex};

/// Reverse postorder when the digraph is acyclic; nothing otherwise.
///
/// ```compile_fail
/// use graphwalk_core::{Graph, Topological};
///
/// let graph = Graph::from_edges(2, [(0, 1)]).unwrap();
/// Topological::new(&graph);
/// ```
#[derive(Debug, Clone)]
pub struct Topological {
    order: Option<Vec<Vertex>>,
    rank: Vec<Option<usize>>,
}

impl Topological {
    pub fn new<G: Reversible>(graph: &G) -> Self {
        let n = graph.vertex_count();
        if DirectedCycle::new(graph).has_cycle() {
            return Self {
                order: None,
                rank: vec![None; n],
            };
        }

        let order = DepthFirstOrder::new(graph).reverse_post();
        let mut rank = vec![None; n];
        for (i, &v) in order.iter().enumerate() {
            rank[v] = Some(i);
        }
        Self {
            order: Some(order),
            rank,
        }
    }

    pub fn has_order(&self) -> bool {
        self.order.is_some()
    }

    pub fn order(&self) -> Option<&[Vertex]> {
        self.order.as_deref()
    }

    /// Position of `v` in the order.
    pub fn rank(&self, v: Vertex) -> Option<usize> {
        self.rank.get(v).copied().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Digraph;

    #[test]
    fn test_dag_order_respects_edges() {
        #[rustfmt::skip]
        let edges = [
            (2, 3), (0, 6), (0, 1), (2, 0), (11, 12), (9, 12), (9, 10), (9, 11),
            (3, 5), (8, 7), (5, 4), (0, 5), (6, 4), (6, 9), (7, 6),
        ];
        let d = Digraph::from_edges(13, edges).unwrap();
        let topo = Topological::new(&d);
        assert!(topo.has_order());
        assert_eq!(topo.order().map(<[Vertex]>::len), Some(13));
        for (v, w) in edges {
            assert!(topo.rank(v) < topo.rank(w), "{} must precede {}", v, w);
        }
    }

    #[test]
    fn test_cyclic_digraph_has_no_order() {
        let d = Digraph::from_edges(3, [(0, 1), (1, 2), (2, 1)]).unwrap();
        let topo = Topological::new(&d);
        assert!(!topo.has_order());
        assert!(topo.order().is_none());
        assert_eq!(topo.rank(0), None);
    }
}

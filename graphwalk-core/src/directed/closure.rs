//! Transitive closure: all-pairs reachability.
//!
//! Runs one reachability walk per vertex at construction, then answers
//! `reachable(v, w)` in O(1). Construction is O(V(V + E)) and the table is
//! O(V^2), so this is meant for small and medium graphs.

use tracing::debug;

use crate::common::{GraphTraversal, Vertex};

#[derive(Debug, Clone)]
pub struct TransitiveClosure {
    rows: Vec<Vec<bool>>,
}

impl TransitiveClosure {
    pub fn new<G: GraphTraversal>(graph: &G) -> Self {
        let n = graph.vertex_count();
        let rows = (0..n).map(|v| graph.reachable_from_single(v)).collect();
        debug!(vertices = n, edges = graph.edge_count(), "transitive closure built");
        Self { rows }
    }

    /// True iff a directed path leads from `v` to `w`. Every vertex reaches
    /// itself; non-vertices reach nothing.
    pub fn reachable(&self, v: Vertex, w: Vertex) -> bool {
        self.rows
            .get(v)
            .and_then(|row| row.get(w))
            .copied()
            .unwrap_or(false)
    }

    /// Vertices reachable from `v`, ascending.
    pub fn reachable_set(&self, v: Vertex) -> Vec<Vertex> {
        self.rows
            .get(v)
            .map(|row| {
                row.iter()
                    .enumerate()
                    .filter_map(|(w, &r)| r.then_some(w))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn vertex_count(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Digraph;

    #[test]
    fn test_chain_reachability() {
        let d = Digraph::from_edges(4, [(0, 1), (1, 2)]).unwrap();
        let tc = TransitiveClosure::new(&d);
        assert!(tc.reachable(0, 2));
        assert!(!tc.reachable(2, 0));
        assert!(tc.reachable(3, 3));
        assert!(!tc.reachable(0, 3));
        assert_eq!(tc.reachable_set(0), vec![0, 1, 2]);
        assert_eq!(tc.vertex_count(), 4);
    }

    #[test]
    fn test_out_of_range_is_unreachable() {
        let d = Digraph::from_edges(2, [(0, 1)]).unwrap();
        let tc = TransitiveClosure::new(&d);
        assert!(!tc.reachable(0, 2));
        assert!(!tc.reachable(5, 0));
        assert!(tc.reachable_set(5).is_empty());
    }

    #[test]
    fn test_cycle_reaches_everything_in_it() {
        let d = Digraph::from_edges(3, [(0, 1), (1, 2), (2, 0)]).unwrap();
        let tc = TransitiveClosure::new(&d);
        for v in 0..3 {
            for w in 0..3 {
                assert!(tc.reachable(v, w));
            }
        }
    }
}

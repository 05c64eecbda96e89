//! Query surface shared by the strong-component algorithms.

use crate::common::Vertex;

/// Partition of `[0, V)` into strongly connected components.
///
/// Implementors provide the per-vertex id array and the component count;
/// every other query is derived from those.
pub trait StrongComponents {
    /// Component id of every vertex, each in `[0, count())`.
    fn ids(&self) -> &[usize];

    /// Number of strongly connected components.
    fn count(&self) -> usize;

    /// Component id of `v`, or `None` if `v` is not a vertex.
    fn id(&self, v: Vertex) -> Option<usize> {
        self.ids().get(v).copied()
    }

    /// True iff `v` and `w` are mutually reachable.
    fn strongly_connected(&self, v: Vertex, w: Vertex) -> bool {
        match (self.id(v), self.id(w)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Members of each component, indexed by id, in ascending vertex order.
    fn components(&self) -> Vec<Vec<Vertex>> {
        let mut components = vec![Vec::new(); self.count()];
        for (v, &id) in self.ids().iter().enumerate() {
            components[id].push(v);
        }
        components
    }
}

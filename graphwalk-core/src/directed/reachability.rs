//! Single- and multi-source directed reachability.

use crate::common::{GraphTraversal, Vertex};
use crate::error::GraphResult;

/// Vertices reachable from a set of sources.
#[derive(Debug, Clone)]
pub struct DirectedReachability {
    marked: Vec<bool>,
    count: usize,
}

impl DirectedReachability {
    /// Fails with `VertexOutOfRange` if `source` is not a vertex.
    pub fn new<G: GraphTraversal>(graph: &G, source: Vertex) -> GraphResult<Self> {
        Self::from_sources(graph, [source])
    }

    /// Fails with `VertexOutOfRange` on the first source that is not a vertex.
    pub fn from_sources<G, I>(graph: &G, sources: I) -> GraphResult<Self>
    where
        G: GraphTraversal,
        I: IntoIterator<Item = Vertex>,
    {
        let sources: Vec<Vertex> = sources.into_iter().collect();
        for &s in &sources {
            graph.check_vertex(s)?;
        }
        let marked = graph.reachable_from(sources);
        let count = marked.iter().filter(|&&m| m).count();
        Ok(Self { marked, count })
    }

    /// True if `v` is reachable from some source. False for non-vertices.
    pub fn marked(&self, v: Vertex) -> bool {
        self.marked.get(v).copied().unwrap_or(false)
    }

    /// Number of reachable vertices (sources included).
    pub fn count(&self) -> usize {
        self.count
    }

    /// Reachable vertices in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.marked
            .iter()
            .enumerate()
            .filter_map(|(v, &m)| m.then_some(v))
    }
}

//! Strongly connected components by all-pairs reachability.
//!
//! One reachability walk per vertex fills a `V x V` matrix; two vertices
//! share a component iff each reaches the other. Time O(V(V + E)), space
//! O(V^2). Kept as the baseline that [`super::KosarajuScc`] is checked
//! against.

use tracing::debug;

use super::StrongComponents;
use crate::common::GraphTraversal;

const UNASSIGNED: usize = usize::MAX;

#[derive(Debug, Clone)]
pub struct BruteForceScc {
    id: Vec<usize>,
    count: usize,
}

impl BruteForceScc {
    pub fn new<G: GraphTraversal>(graph: &G) -> Self {
        let n = graph.vertex_count();
        let reach: Vec<Vec<bool>> = (0..n).map(|v| graph.reachable_from_single(v)).collect();
        let mutual = |v: usize, w: usize| reach[v][w] && reach[w][v];

        let mut id = vec![UNASSIGNED; n];
        let mut count = 0;

        for v in 0..n {
            if id[v] != UNASSIGNED {
                continue;
            }
            id[v] = count;
            for w in 0..n {
                if w == v || !mutual(v, w) {
                    continue;
                }
                if id[w] == UNASSIGNED {
                    id[w] = count;
                } else {
                    // Mutual reachability is transitive, so anything already
                    // grouped and mutual with v must be in v's group.
                    debug_assert_eq!(
                        id[w], count,
                        "mutual reachability is not transitive at ({}, {})",
                        v, w
                    );
                }
            }
            count += 1;
        }

        debug!(vertices = n, components = count, "brute-force scc finished");
        Self { id, count }
    }
}

impl StrongComponents for BruteForceScc {
    fn ids(&self) -> &[usize] {
        &self.id
    }

    fn count(&self) -> usize {
        self.count
    }
}

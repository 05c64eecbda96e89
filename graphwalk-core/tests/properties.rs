//! Property tests on random small digraphs.
//!
//! petgraph serves as an independent oracle for strong components and
//! cycle detection.

use std::collections::BTreeSet;

use graphwalk_core::prelude::*;
use petgraph::graph::{DiGraph, NodeIndex};
use proptest::prelude::*;

fn arb_edges() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1usize..12).prop_flat_map(|n| (Just(n), prop::collection::vec((0..n, 0..n), 0..30)))
}

fn to_petgraph(n: usize, edges: &[(usize, usize)]) -> DiGraph<(), ()> {
    let mut pg = DiGraph::new();
    for _ in 0..n {
        pg.add_node(());
    }
    for &(v, w) in edges {
        pg.add_edge(NodeIndex::new(v), NodeIndex::new(w), ());
    }
    pg
}

fn partition<S: StrongComponents>(scc: &S) -> BTreeSet<Vec<Vertex>> {
    scc.components().into_iter().collect()
}

proptest! {
    #[test]
    fn kosaraju_matches_brute_force((n, edges) in arb_edges()) {
        let d = Digraph::from_edges(n, edges).unwrap();
        let kosaraju = KosarajuScc::new(&d);
        let brute = BruteForceScc::new(&d);
        prop_assert_eq!(kosaraju.count(), brute.count());
        prop_assert_eq!(partition(&kosaraju), partition(&brute));
    }

    #[test]
    fn kosaraju_matches_petgraph((n, edges) in arb_edges()) {
        let d = Digraph::from_edges(n, edges.iter().copied()).unwrap();
        let expected: BTreeSet<Vec<Vertex>> = petgraph::algo::kosaraju_scc(&to_petgraph(n, &edges))
            .into_iter()
            .map(|c| {
                let mut c: Vec<Vertex> = c.into_iter().map(|i| i.index()).collect();
                c.sort_unstable();
                c
            })
            .collect();
        prop_assert_eq!(partition(&KosarajuScc::new(&d)), expected);
    }

    #[test]
    fn strongly_connected_means_mutually_reachable((n, edges) in arb_edges()) {
        let d = Digraph::from_edges(n, edges).unwrap();
        let scc = KosarajuScc::new(&d);
        let tc = TransitiveClosure::new(&d);
        for v in 0..n {
            for w in 0..n {
                prop_assert_eq!(
                    scc.strongly_connected(v, w),
                    tc.reachable(v, w) && tc.reachable(w, v)
                );
            }
        }
    }

    #[test]
    fn cycle_detection_matches_petgraph((n, edges) in arb_edges()) {
        let d = Digraph::from_edges(n, edges.iter().copied()).unwrap();
        let cycle = DirectedCycle::new(&d);
        let expected = petgraph::algo::is_cyclic_directed(&to_petgraph(n, &edges));
        prop_assert_eq!(cycle.has_cycle(), expected);

        if let Some(witness) = cycle.cycle() {
            prop_assert!(witness.len() >= 2);
            prop_assert_eq!(witness.first(), witness.last());
            for pair in witness.windows(2) {
                prop_assert!(d.neighbors(pair[0]).contains(&pair[1]));
            }
        }
    }

    #[test]
    fn topological_order_iff_acyclic((n, edges) in arb_edges()) {
        let d = Digraph::from_edges(n, edges).unwrap();
        let topo = Topological::new(&d);
        prop_assert_eq!(topo.has_order(), !DirectedCycle::new(&d).has_cycle());
        if topo.has_order() {
            for (v, w) in d.edges() {
                prop_assert!(topo.rank(v).unwrap() < topo.rank(w).unwrap());
            }
        }
    }

    #[test]
    fn closure_matches_breadth_first_search((n, edges) in arb_edges()) {
        let d = Digraph::from_edges(n, edges).unwrap();
        let tc = TransitiveClosure::new(&d);
        for v in 0..n {
            let bfs = BreadthFirstPaths::new(&d, v).unwrap();
            prop_assert!(tc.reachable(v, v));
            for w in 0..n {
                prop_assert_eq!(tc.reachable(v, w), bfs.has_path_to(w));
            }
        }
    }

    #[test]
    fn paths_are_walks_and_bfs_is_shortest((n, edges) in arb_edges(), s in 0usize..12) {
        let d = Digraph::from_edges(n, edges).unwrap();
        let s = s % n;
        let bfs = BreadthFirstPaths::new(&d, s).unwrap();
        let dfs = DepthFirstPaths::new(&d, s).unwrap();
        for v in 0..n {
            prop_assert_eq!(bfs.has_path_to(v), dfs.has_path_to(v));
            if let (Some(short), Some(some)) = (bfs.path_to(v), dfs.path_to(v)) {
                prop_assert!(short.len() <= some.len());
                for path in [&short, &some] {
                    prop_assert_eq!(path.first(), Some(&s));
                    prop_assert_eq!(path.last(), Some(&v));
                    for pair in path.windows(2) {
                        prop_assert!(d.neighbors(pair[0]).contains(&pair[1]));
                    }
                }
            }
        }
    }

    #[test]
    fn bipartite_coloring_is_proper((n, edges) in arb_edges()) {
        let g = Graph::from_edges(n, edges).unwrap();
        let b = Bipartite::new(&g);
        let proper = g.edges().all(|(v, w)| b.color(v) != b.color(w));
        prop_assert_eq!(b.is_bipartite(), proper);
    }

    #[test]
    fn analyses_are_deterministic((n, edges) in arb_edges()) {
        let d = Digraph::from_edges(n, edges.iter().copied()).unwrap();
        let again = Digraph::from_edges(n, edges).unwrap();
        prop_assert_eq!(
            DirectedCycle::new(&d).cycle().map(<[Vertex]>::to_vec),
            DirectedCycle::new(&again).cycle().map(<[Vertex]>::to_vec)
        );
        prop_assert_eq!(
            KosarajuScc::new(&d).ids().to_vec(),
            KosarajuScc::new(&again).ids().to_vec()
        );
    }
}

//! Graphviz DOT output.
//!
//! Digraph vertices can be colored by strong component; vertices in the
//! same component share a fill color from a fixed palette.

use std::fmt::Write;

use crate::directed::{KosarajuScc, StrongComponents};
use crate::graph::{Digraph, Graph};

const PALETTE: &[&str] = &[
    "lightblue",
    "lightgreen",
    "lightsalmon",
    "khaki",
    "plum",
    "lightcoral",
    "palegreen",
    "lightgoldenrod",
    "lightpink",
    "lightcyan",
];

fn component_color(id: usize) -> &'static str {
    PALETTE[id % PALETTE.len()]
}

fn estimated_capacity(vertices: usize, edges: usize) -> usize {
    // ~40 bytes/vertex + ~20 bytes/edge + header/footer
    vertices * 40 + edges * 20 + 150
}

/// Generate a DOT digraph, optionally coloring vertices by component.
pub fn generate_dot(digraph: &Digraph, components: Option<&KosarajuScc>) -> String {
    let mut dot = String::with_capacity(estimated_capacity(
        digraph.vertex_count(),
        digraph.edge_count(),
    ));
    if let Err(e) = write_digraph(&mut dot, digraph, components) {
        tracing::error!(error = %e, "failed to generate DOT string");
        return "digraph graphwalk {\n}\n".to_string();
    }
    dot
}

/// Generate a DOT undirected graph. Each edge is drawn once.
pub fn generate_dot_undirected(graph: &Graph) -> String {
    let mut dot = String::with_capacity(estimated_capacity(
        graph.vertex_count(),
        graph.edge_count(),
    ));
    if let Err(e) = write_graph(&mut dot, graph) {
        tracing::error!(error = %e, "failed to generate DOT string");
        return "graph graphwalk {\n}\n".to_string();
    }
    dot
}

fn write_digraph(
    dot: &mut String,
    digraph: &Digraph,
    components: Option<&KosarajuScc>,
) -> std::fmt::Result {
    writeln!(dot, "digraph graphwalk {{")?;
    writeln!(dot, "  rankdir=LR;")?;
    writeln!(dot, "  node [shape=circle, style=filled];")?;
    writeln!(dot)?;

    for v in 0..digraph.vertex_count() {
        match components.and_then(|scc| scc.id(v)) {
            Some(id) => writeln!(
                dot,
                "  {} [fillcolor={}, tooltip=\"component {}\"];",
                v,
                component_color(id),
                id
            )?,
            None => writeln!(dot, "  {} [fillcolor=white];", v)?,
        }
    }

    writeln!(dot)?;
    for (v, w) in digraph.edges() {
        writeln!(dot, "  {} -> {};", v, w)?;
    }

    writeln!(dot, "}}")?;
    Ok(())
}

fn write_graph(dot: &mut String, graph: &Graph) -> std::fmt::Result {
    writeln!(dot, "graph graphwalk {{")?;
    writeln!(dot, "  node [shape=circle, style=filled, fillcolor=white];")?;
    writeln!(dot)?;

    for v in 0..graph.vertex_count() {
        writeln!(dot, "  {};", v)?;
    }

    writeln!(dot)?;
    for (v, w) in graph.edges() {
        writeln!(dot, "  {} -- {};", v, w)?;
    }

    writeln!(dot, "}}")?;
    Ok(())
}

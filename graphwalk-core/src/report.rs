//! Output formatting - plaintext and JSON.
//!
//! Each `*_report` function renders one analysis into a [`Report`] that
//! holds both representations; the caller picks one with [`Report::print`].

use std::fmt::Display;

use serde_json::{json, Value};

use crate::bipartite::Bipartite;
use crate::common::{GraphTraversal, Vertex};
use crate::directed::{
    DirectedCycle, DirectedReachability, StrongComponents, Topological, TransitiveClosure,
};
use crate::paths::{BreadthFirstPaths, DepthFirstPaths};

/// Output format selected by the caller or config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Plain
        }
    }
}

/// One analysis result rendered for both output formats.
#[derive(Debug, Clone)]
pub struct Report {
    plain: String,
    json: Value,
}

impl Report {
    fn new(lines: Vec<String>, json: Value) -> Self {
        let mut plain = lines.join("\n");
        plain.push('\n');
        Self { plain, json }
    }

    pub fn plain(&self) -> &str {
        &self.plain
    }

    pub fn json(&self) -> &Value {
        &self.json
    }

    /// Writes the report to stdout in the requested format.
    pub fn print(&self, format: OutputFormat) {
        match format {
            OutputFormat::Plain => print!("{}", self.plain),
            OutputFormat::Json => print_json(&self.json),
        }
    }
}

/// Prints a JSON value, pretty printed.
///
/// Falls back to compact output if pretty printing fails.
pub fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            tracing::warn!(error = %e, "pretty JSON serialization failed");
            println!("{}", value);
        }
    }
}

/// `0 -> 2 -> 3`
pub fn format_path(path: &[Vertex]) -> String {
    path.iter()
        .map(Vertex::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

fn format_vertices(vertices: &[Vertex]) -> String {
    vertices
        .iter()
        .map(Vertex::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn graph_report<G>(graph: &G, directed: bool) -> Report
where
    G: GraphTraversal + Display,
{
    let adjacency: Vec<Value> = (0..graph.vertex_count())
        .map(|v| json!({ "vertex": v, "neighbors": graph.neighbors(v) }))
        .collect();
    let json = json!({
        "directed": directed,
        "vertices": graph.vertex_count(),
        "edges": graph.edge_count(),
        "adjacency": adjacency,
    });
    let text = graph.to_string();
    Report::new(text.lines().map(str::to_string).collect(), json)
}

pub fn cycle_report(cycle: &DirectedCycle) -> Report {
    let mut lines = vec![
        "=== Directed Cycle ===".to_string(),
        String::new(),
        format!("Has cycle: {}", cycle.has_cycle()),
    ];
    match cycle.cycle() {
        Some(c) => lines.push(format!("Cycle: {}", format_path(c))),
        None => lines.push("No directed cycle found.".to_string()),
    }
    let json = json!({
        "has_cycle": cycle.has_cycle(),
        "cycle": cycle.cycle(),
    });
    Report::new(lines, json)
}

pub fn scc_report<S: StrongComponents>(scc: &S, algorithm: &str) -> Report {
    let components = scc.components();
    let mut lines = vec![
        format!("=== Strongly Connected Components ({}) ===", algorithm),
        String::new(),
        format!("Components: {}", scc.count()),
    ];
    for (id, members) in components.iter().enumerate() {
        lines.push(format!("  [{}] {}", id, format_vertices(members)));
    }
    let json = json!({
        "algorithm": algorithm,
        "count": scc.count(),
        "ids": scc.ids(),
        "components": components,
    });
    Report::new(lines, json)
}

/// Answers the given `(v, w)` pairs; with no pairs, lists every row.
pub fn closure_report(closure: &TransitiveClosure, pairs: &[(Vertex, Vertex)]) -> Report {
    let mut lines = vec!["=== Transitive Closure ===".to_string(), String::new()];
    let json = if pairs.is_empty() {
        let rows: Vec<Vec<Vertex>> = (0..closure.vertex_count())
            .map(|v| closure.reachable_set(v))
            .collect();
        for (v, row) in rows.iter().enumerate() {
            lines.push(format!("{}: {}", v, format_vertices(row)));
        }
        json!({ "reachable": rows })
    } else {
        let answers: Vec<Value> = pairs
            .iter()
            .map(|&(v, w)| {
                let reachable = closure.reachable(v, w);
                lines.push(format!(
                    "{} -> {}: {}",
                    v,
                    w,
                    if reachable { "reachable" } else { "not reachable" }
                ));
                json!({ "from": v, "to": w, "reachable": reachable })
            })
            .collect();
        json!({ "queries": answers })
    };
    Report::new(lines, json)
}

fn paths_report<P, D>(
    title: &str,
    source: Vertex,
    vertex_count: usize,
    path_to: P,
    dist_to: D,
) -> Report
where
    P: Fn(Vertex) -> Option<Vec<Vertex>>,
    D: Fn(Vertex) -> Option<usize>,
{
    let mut lines = vec![format!("=== {} from {} ===", title, source), String::new()];
    let mut entries = Vec::with_capacity(vertex_count);
    for v in 0..vertex_count {
        let path = path_to(v);
        match &path {
            Some(p) => lines.push(format!("{} to {}: {}", source, v, format_path(p))),
            None => lines.push(format!("{} to {}: not connected", source, v)),
        }
        entries.push(json!({
            "vertex": v,
            "path": path,
            "distance": dist_to(v),
        }));
    }
    let json = json!({ "source": source, "paths": entries });
    Report::new(lines, json)
}

pub fn bfs_report(paths: &BreadthFirstPaths) -> Report {
    paths_report(
        "Shortest Paths (BFS)",
        paths.source(),
        paths.vertex_count(),
        |v| paths.path_to(v),
        |v| paths.dist_to(v),
    )
}

pub fn dfs_report(paths: &DepthFirstPaths) -> Report {
    paths_report(
        "Paths (DFS)",
        paths.source(),
        paths.vertex_count(),
        |v| paths.path_to(v),
        |v| paths.path_to(v).map(|p| p.len() - 1),
    )
}

pub fn bipartite_report(bipartite: &Bipartite) -> Report {
    let colors: Vec<u8> = bipartite.colors().iter().map(|&c| u8::from(c)).collect();
    let lines = vec![
        "=== Bipartite Check ===".to_string(),
        String::new(),
        format!("Bipartite: {}", bipartite.is_bipartite()),
        format!(
            "Colors: {}",
            colors
                .iter()
                .map(u8::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        ),
    ];
    let json = json!({
        "is_bipartite": bipartite.is_bipartite(),
        "colors": colors,
    });
    Report::new(lines, json)
}

pub fn topological_report(topological: &Topological) -> Report {
    let mut lines = vec!["=== Topological Order ===".to_string(), String::new()];
    match topological.order() {
        Some(order) => lines.push(format!("Order: {}", format_vertices(order))),
        None => lines.push("No topological order: the digraph has a cycle.".to_string()),
    }
    let json = json!({
        "has_order": topological.has_order(),
        "order": topological.order(),
    });
    Report::new(lines, json)
}

pub fn reachability_report(reachability: &DirectedReachability, sources: &[Vertex]) -> Report {
    let vertices: Vec<Vertex> = reachability.vertices().collect();
    let lines = vec![
        format!("=== Reachable from {} ===", format_vertices(sources)),
        String::new(),
        format!("Count: {}", reachability.count()),
        format!("Vertices: {}", format_vertices(&vertices)),
    ];
    let json = json!({
        "sources": sources,
        "count": reachability.count(),
        "vertices": vertices,
    });
    Report::new(lines, json)
}

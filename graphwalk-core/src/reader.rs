//! Builder API for reading graphs from the text edge-list format.
//!
//! ```text
//! <V>
//! <E>
//! <v_0><delimiter><w_0>
//! ...
//! ```
//!
//! `E` is informational: edges are read until end of input and a mismatch is
//! logged (or rejected with [`GraphReader::strict_edge_count`]).
//!
//! ```rust,ignore
//! use graphwalk_core::prelude::*;
//!
//! let digraph = GraphReader::new()
//!     .delimiter(" ")
//!     .strict_edge_count(true)
//!     .read_digraph("data/tinyDG.txt")?;
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::common::Vertex;
use crate::config::GraphwalkConfig;
use crate::error::{GraphError, GraphResult, IoResultExt};
use crate::graph::{Digraph, Graph};

/// Delimiter used when neither the caller nor the config names one.
pub const DEFAULT_DELIMITER: &str = " ";

/// Origin reported in I/O errors for in-memory input.
const INLINE_ORIGIN: &str = "<input>";

/// Header and edge list as read, before any range checking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeList {
    pub vertex_count: usize,
    pub declared_edges: usize,
    pub edges: Vec<(Vertex, Vertex)>,
}

/// Builder for reading graphs.
#[derive(Debug, Clone)]
pub struct GraphReader {
    /// Separator between the two vertices of an edge line
    delimiter: String,

    /// Reject input whose edge lines disagree with the declared `E`
    strict_edge_count: bool,
}

impl Default for GraphReader {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphReader {
    /// Create a reader splitting edge lines on whitespace.
    pub fn new() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            strict_edge_count: false,
        }
    }

    /// Create a reader from config values, falling back to defaults.
    pub fn from_config(config: &GraphwalkConfig) -> Self {
        let mut reader = Self::new();
        if let Some(delimiter) = &config.delimiter {
            reader.delimiter = delimiter.clone();
        }
        if let Some(strict) = config.strict_edge_count {
            reader.strict_edge_count = strict;
        }
        reader
    }

    /// Set the edge-line delimiter.
    ///
    /// A delimiter made only of whitespace splits on any whitespace run;
    /// anything else splits on the exact string and trims each token.
    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Fail instead of warning when the edge count disagrees with the header.
    pub fn strict_edge_count(mut self, enabled: bool) -> Self {
        self.strict_edge_count = enabled;
        self
    }

    /// Read an undirected graph from a file.
    pub fn read_graph(&self, path: impl AsRef<Path>) -> GraphResult<Graph> {
        let list = self.read_edge_list(path.as_ref())?;
        Graph::from_edges(list.vertex_count, list.edges)
    }

    /// Read a directed graph from a file.
    pub fn read_digraph(&self, path: impl AsRef<Path>) -> GraphResult<Digraph> {
        let list = self.read_edge_list(path.as_ref())?;
        Digraph::from_edges(list.vertex_count, list.edges)
    }

    /// Parse an undirected graph from in-memory text.
    pub fn parse_graph(&self, input: &str) -> GraphResult<Graph> {
        let list = self.parse_edge_list(input.as_bytes(), Path::new(INLINE_ORIGIN))?;
        Graph::from_edges(list.vertex_count, list.edges)
    }

    /// Parse a directed graph from in-memory text.
    pub fn parse_digraph(&self, input: &str) -> GraphResult<Digraph> {
        let list = self.parse_edge_list(input.as_bytes(), Path::new(INLINE_ORIGIN))?;
        Digraph::from_edges(list.vertex_count, list.edges)
    }

    /// Open `path` and read its header and edge lines.
    pub fn read_edge_list(&self, path: &Path) -> GraphResult<EdgeList> {
        let file = File::open(path).with_path(path)?;
        let list = self.parse_edge_list(BufReader::new(file), path)?;
        info!(
            path = %path.display(),
            vertices = list.vertex_count,
            edges = list.edges.len(),
            "graph input loaded"
        );
        Ok(list)
    }

    /// Read header and edge lines from any buffered source.
    ///
    /// `origin` only labels I/O errors.
    pub fn parse_edge_list<R: BufRead>(&self, input: R, origin: &Path) -> GraphResult<EdgeList> {
        let mut lines = input
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line));

        let (vertex_line, vertex_count) = next_header(&mut lines, origin, "vertex count")?;
        check_vertex_capacity(vertex_count, vertex_line)?;
        let (_, declared_edges) = next_header(&mut lines, origin, "edge count")?;

        let mut edges = Vec::with_capacity(declared_edges.min(1 << 20));
        for (line_no, line) in lines {
            let line = line.with_path(PathBuf::from(origin))?;
            if line.trim().is_empty() {
                continue;
            }
            edges.push(self.parse_edge(&line, line_no)?);
        }

        if edges.len() != declared_edges {
            if self.strict_edge_count {
                return Err(GraphError::malformed(
                    2,
                    format!(
                        "header declares {} edges but {} edge lines were read",
                        declared_edges,
                        edges.len()
                    ),
                ));
            }
            warn!(
                declared = declared_edges,
                read = edges.len(),
                "edge count differs from header"
            );
        }

        debug!(vertices = vertex_count, edges = edges.len(), "edge list parsed");
        Ok(EdgeList {
            vertex_count,
            declared_edges,
            edges,
        })
    }

    fn parse_edge(&self, line: &str, line_no: usize) -> GraphResult<(Vertex, Vertex)> {
        let tokens: Vec<&str> = if self.delimiter.trim().is_empty() {
            line.split_whitespace().collect()
        } else {
            line.split(self.delimiter.as_str()).map(str::trim).collect()
        };

        match tokens.as_slice() {
            [v, w] => Ok((
                parse_count(v, line_no, "vertex")?,
                parse_count(w, line_no, "vertex")?,
            )),
            _ => Err(GraphError::malformed(
                line_no,
                format!(
                    "expected two vertices separated by {:?}, found {:?}",
                    self.delimiter,
                    line.trim()
                ),
            )),
        }
    }
}

/// Next non-blank line parsed as a count, with its line number.
fn next_header<I>(lines: &mut I, origin: &Path, what: &str) -> GraphResult<(usize, usize)>
where
    I: Iterator<Item = (usize, std::io::Result<String>)>,
{
    for (line_no, line) in lines.by_ref() {
        let line = line.with_path(PathBuf::from(origin))?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            return Ok((line_no, parse_count(trimmed, line_no, what)?));
        }
    }
    Err(GraphError::malformed(0, format!("missing {} header", what)))
}

/// Rejects a vertex count whose adjacency lists cannot be allocated.
fn check_vertex_capacity(vertex_count: usize, line_no: usize) -> GraphResult<()> {
    let mut lists: Vec<Vec<Vertex>> = Vec::new();
    lists.try_reserve_exact(vertex_count).map_err(|e| {
        GraphError::malformed(
            line_no,
            format!("vertex count {} is too large: {}", vertex_count, e),
        )
    })
}

fn parse_count(token: &str, line_no: usize, what: &str) -> GraphResult<usize> {
    token.parse::<usize>().map_err(|_| {
        GraphError::malformed(
            line_no,
            format!("expected non-negative integer {}, found {:?}", what, token),
        )
    })
}

//! graphwalk-core: graph model and traversal analyses
//!
//! This library holds undirected and directed graphs over dense vertex ids
//! `0..V`, plus the classic traversal-based analyses built on them.
//!
//! # Features
//!
//! - **Graph model**: [`Graph`] and [`Digraph`] with insertion-ordered adjacency
//! - **Edge-list input**: [`GraphReader`] for the `V` / `E` / edge-per-line format
//! - **Directed cycles**: one witness cycle or proof of acyclicity
//! - **Strong components**: brute force and Kosaraju-Sharir
//! - **Transitive closure**: all-pairs reachability
//! - **Paths**: breadth-first shortest paths and depth-first paths
//! - **Bipartiteness**: two-coloring with odd-cycle detection
//! - **Orders**: depth-first orders and topological sort
//!
//! Every depth-first walk runs on an explicit work stack, so long chains
//! do not exhaust the call stack.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use graphwalk_core::prelude::*;
//!
//! let digraph = GraphReader::new().read_digraph("tinyDG.txt")?;
//! let scc = KosarajuScc::new(&digraph);
//! println!("{} components", scc.count());
//! ```
//!
//! # Module Organization
//!
//! - [`graph`]: graph and digraph containers
//! - [`reader`]: edge-list parsing
//! - [`directed`]: analyses that need edge direction
//! - [`paths`]: single-source path search
//! - [`bipartite`]: two-coloring
//! - [`report`]: plaintext and JSON rendering
//! - [`error`]: typed error handling
//!
//! # Cargo Features
//!
//! - `dot` (default): Graphviz DOT output
//! - `full`: Enable all optional features

pub mod bipartite;
pub mod common;
pub mod config;
pub mod directed;
pub mod error;
pub mod graph;
pub mod logging;
pub mod paths;
pub mod prelude;
pub mod reader;
pub mod report;

#[cfg(feature = "dot")]
pub mod visualize;


// ============================================================================
// Explicit Re-exports
// ============================================================================

pub use common::{Frame, GraphTraversal, Reversible, Vertex};

pub use error::{GraphError, GraphResult, IoResultExt};

pub use config::{load_config, load_config_file, GraphwalkConfig, OutputConfig, CONFIG_FILE_NAME};

pub use logging::{init_structured_logging, log_error, log_info};

pub use graph::{Digraph, Graph};

pub use reader::{EdgeList, GraphReader, DEFAULT_DELIMITER};

pub use directed::{
    BruteForceScc, DepthFirstOrder, DirectedCycle, DirectedReachability, KosarajuScc,
    StrongComponents, Topological, TransitiveClosure,
};

pub use paths::{BreadthFirstPaths, DepthFirstPaths};

pub use bipartite::Bipartite;

pub use report::{print_json, OutputFormat, Report};

#[cfg(feature = "dot")]
pub use visualize::{generate_dot, generate_dot_undirected};

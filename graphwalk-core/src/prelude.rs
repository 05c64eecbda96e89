//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use graphwalk_core::prelude::*;
//! ```

// Graph model and capability traits
pub use crate::common::{GraphTraversal, Reversible, Vertex};
pub use crate::graph::{Digraph, Graph};

// Errors
pub use crate::error::{GraphError, GraphResult};

// Input
pub use crate::reader::GraphReader;

// Analyses
pub use crate::bipartite::Bipartite;
pub use crate::directed::{
    BruteForceScc, DirectedCycle, DirectedReachability, KosarajuScc, StrongComponents,
    Topological, TransitiveClosure,
};
pub use crate::paths::{BreadthFirstPaths, DepthFirstPaths};

//! Common utilities shared across analysis modules.
//!
//! The capability traits every analysis is written against, plus the
//! work-stack frame used by all depth-first walks.

mod frame;
mod graph_trait;

pub use frame::Frame;
pub use graph_trait::{GraphTraversal, Reversible, Vertex};

//! Analyses that need edge direction.
//!
//! - [`DirectedCycle`]: one directed cycle, if any
//! - [`DepthFirstOrder`]: preorder, postorder, reverse postorder
//! - [`DirectedReachability`]: vertices reachable from a source set
//! - [`BruteForceScc`] / [`KosarajuScc`]: strongly connected components
//! - [`TransitiveClosure`]: all-pairs reachability
//! - [`Topological`]: topological order of a DAG

mod brute_force;
mod closure;
mod components;
mod cycle;
mod kosaraju;
mod order;
mod reachability;
mod topological;

pub use brute_force::BruteForceScc;
pub use closure::TransitiveClosure;
pub use components::StrongComponents;
pub use cycle::DirectedCycle;
pub use kosaraju::KosarajuScc;
pub use order::DepthFirstOrder;
pub use reachability::DirectedReachability;
pub use topological::Topological;

//! Trace graph, path states and route queries
//!
//! - `model`: immutable adjacency structure built once from an edge list
//! - `path`: shared-prefix path records
//! - `walk`: breadth-first path enumeration driven by a pruning handler
//! - `queries`: route cost, hop-count, latency-bound and cheapest-path queries

pub mod model;
pub mod path;
pub mod queries;
pub mod types;
pub mod walk;

pub use model::{Adjacency, Graph, GraphBuilder};
pub use path::PathState;
pub use queries::{
    cheapest_path, count_at_depth, count_returning, count_under_cost, count_within_depth,
    path_cost,
};
pub use types::{parse_route, Cost, Edge, NodeKey};
pub use walk::{walk, Flow, WalkStats};

//! Graph algorithm implementations
//!
//! - `mst`: minimum spanning tree via Prim's algorithm
//! - `sssp`: single-source shortest paths via heap-driven relaxation

pub mod mst;
pub mod sssp;

pub use mst::{minimum_spanning_tree, minimum_spanning_tree_with, PrimStrategy};
pub use sssp::{single_source_shortest_path, PathEntry, ShortestPaths};

//! dsalgo Core Library
//!
//! Classic data structures and algorithms, centred on a weighted undirected
//! graph with minimum spanning tree and single-source shortest path solvers.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod heap;
pub mod logging;
pub mod sort;

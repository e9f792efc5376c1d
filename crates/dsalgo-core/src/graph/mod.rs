//! Weighted undirected graph and the algorithms that run on it
//!
//! - `Graph`: vertices plus one adjacency list per vertex
//! - `algos::mst`: minimum spanning tree (Prim)
//! - `algos::sssp`: single-source shortest paths (heap-driven relaxation)
//! - `samples`: small demonstration graphs

pub mod algos;
pub mod samples;
pub mod types;

pub use algos::{
    minimum_spanning_tree, minimum_spanning_tree_with, single_source_shortest_path, PathEntry,
    PrimStrategy, ShortestPaths,
};
pub use samples::Sample;
pub use types::{Edge, Vertex, VertexId, Weight, UNREACHABLE};

use crate::error::{DsaError, Result};

/// Basic weighted undirected graph.
///
/// Vertices keep insertion order and duplicate labels are allowed. Every edge
/// is stored in the adjacency list of each vertex whose label matches one of
/// its endpoints, so an ordinary edge appears twice and a self-loop once.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: Vec<Vertex>,
    adjacency: Vec<Vec<Edge>>,
    adjacencies: usize,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from vertex labels and `(a, b, weight)` edge triples
    pub fn from_parts<S: AsRef<str>>(vertices: &[S], edges: &[(S, S, Weight)]) -> Result<Self> {
        let mut graph = Self::new();
        for label in vertices {
            graph.add_vertex(label.as_ref());
        }
        for (a, b, weight) in edges {
            graph.add_edge(a.as_ref(), b.as_ref(), *weight)?;
        }
        Ok(graph)
    }

    /// Append a vertex with an empty adjacency list
    pub fn add_vertex(&mut self, label: impl Into<String>) -> VertexId {
        self.vertices.push(Vertex::new(label));
        self.adjacency.push(Vec::new());
        VertexId::new(self.vertices.len() - 1)
    }

    /// Connect the vertices labelled `a` and `b`.
    ///
    /// The edge is appended to the adjacency list of every stored vertex whose
    /// label matches either endpoint. Returns how many lists received it.
    /// Nothing is attached when either label is unknown.
    pub fn add_edge(&mut self, a: &str, b: &str, weight: Weight) -> Result<usize> {
        let a_id = self.index_of(a).ok_or_else(|| DsaError::vertex_not_found(a))?;
        let b_id = self.index_of(b).ok_or_else(|| DsaError::vertex_not_found(b))?;
        let edge = Edge::new(a_id, b_id, weight);

        let mut attached = 0;
        for (vertex, edges) in self.vertices.iter().zip(self.adjacency.iter_mut()) {
            if vertex.label() == a || vertex.label() == b {
                edges.push(edge);
                attached += 1;
            }
        }
        self.adjacencies += attached;
        Ok(attached)
    }

    /// Position of the first vertex carrying `label`
    pub fn index_of(&self, label: &str) -> Option<VertexId> {
        self.vertices
            .iter()
            .position(|vertex| vertex.label() == label)
            .map(VertexId::new)
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn vertex(&self, id: VertexId) -> &Vertex {
        &self.vertices[id.index()]
    }

    pub fn label(&self, id: VertexId) -> &str {
        self.vertex(id).label()
    }

    /// Edges incident to `id`, in insertion order
    pub fn adjacency(&self, id: VertexId) -> &[Edge] {
        &self.adjacency[id.index()]
    }

    pub fn adjacencies(&self) -> &[Vec<Edge>] {
        &self.adjacency
    }

    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> {
        (0..self.vertices.len()).map(VertexId::new)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Half the adjacency count; exact when every edge joins two distinct stored vertices
    pub fn edge_count(&self) -> usize {
        self.adjacencies / 2
    }

    /// Total number of (vertex, edge) adjacency entries
    pub fn adjacency_count(&self) -> usize {
        self.adjacencies
    }

    /// Every edge once, taken from the adjacency list of its first endpoint
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(index, edges)| edges.iter().filter(move |edge| edge.a.index() == index))
    }

    pub fn total_weight(&self) -> i64 {
        self.edges().map(|edge| i64::from(edge.weight)).sum()
    }
}

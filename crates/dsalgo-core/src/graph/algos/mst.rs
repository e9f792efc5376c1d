use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DsaError, Result};
use crate::graph::{Edge, Graph, VertexId};
use crate::heap::{Heap, HeapKind};

/// How Prim's algorithm feeds its edge heap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum PrimStrategy {
    /// Visit vertices in stored order, pushing all of each vertex's edges into
    /// one shared heap and taking the first edge that reaches a new vertex.
    /// Edges may be pushed once per endpoint; stale ones are dropped on extraction.
    #[default]
    Reference,
    /// Grow a tree from each uncovered vertex, pushing only edges of vertices
    /// newly joined to the tree.
    Frontier,
}

impl FromStr for PrimStrategy {
    type Err = DsaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "reference" => Ok(PrimStrategy::Reference),
            "frontier" => Ok(PrimStrategy::Frontier),
            other => Err(DsaError::unsupported("mst strategy", other, "reference, frontier")),
        }
    }
}

impl fmt::Display for PrimStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimStrategy::Reference => write!(f, "reference"),
            PrimStrategy::Frontier => write!(f, "frontier"),
        }
    }
}

/// Minimum spanning tree of `graph` using [`PrimStrategy::Reference`].
pub fn minimum_spanning_tree(graph: &Graph) -> Result<Graph> {
    minimum_spanning_tree_with(graph, PrimStrategy::Reference)
}

/// Minimum spanning tree (or forest, for disconnected input) of `graph`.
///
/// The result is a new graph holding copies of the tree's vertices and edges.
/// Vertices without any incident edge appear as isolated vertices.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn minimum_spanning_tree_with(graph: &Graph, strategy: PrimStrategy) -> Result<Graph> {
    let result = match strategy {
        PrimStrategy::Reference => reference_prim(graph)?,
        PrimStrategy::Frontier => frontier_prim(graph)?,
    };
    tracing::debug!(
        tree_vertices = result.vertex_count(),
        tree_edges = result.edge_count(),
        total_weight = result.total_weight(),
        "minimum_spanning_tree"
    );
    Ok(result)
}

/// Copy `edge` into `tree`, adding whichever endpoints it lacks.
/// Returns false when both endpoints are already present.
fn join_tree(graph: &Graph, tree: &mut Graph, edge: &Edge) -> Result<bool> {
    let a = graph.label(edge.a);
    let b = graph.label(edge.b);
    let new_a = tree.index_of(a).is_none();
    let new_b = tree.index_of(b).is_none();
    if !new_a && !new_b {
        return Ok(false);
    }
    if new_a {
        tree.add_vertex(a);
    }
    if new_b {
        tree.add_vertex(b);
    }
    tree.add_edge(a, b, edge.weight)?;
    Ok(true)
}

fn add_isolated(graph: &Graph, tree: &mut Graph, vertex: VertexId) {
    let label = graph.label(vertex);
    if graph.adjacency(vertex).is_empty() && tree.index_of(label).is_none() {
        tree.add_vertex(label);
    }
}

fn push_edge(heap: &mut Heap<Edge>, edge: Edge) {
    if !heap.insert(edge) {
        tracing::warn!(
            weight = edge.weight,
            capacity = heap.capacity(),
            "edge heap full, edge dropped"
        );
    }
}

/// Push the edges of `vertex` that lead outside the tree
fn expand(graph: &Graph, heap: &mut Heap<Edge>, in_tree: &[bool], vertex: VertexId) {
    for edge in graph.adjacency(vertex) {
        if !in_tree[edge.opposite(vertex).index()] {
            push_edge(heap, *edge);
        }
    }
}

fn reference_prim(graph: &Graph) -> Result<Graph> {
    let mut tree = Graph::new();
    let mut heap = Heap::with_capacity(graph.adjacency_count(), HeapKind::Min);

    for vertex in graph.vertex_ids() {
        add_isolated(graph, &mut tree, vertex);

        for edge in graph.adjacency(vertex) {
            push_edge(&mut heap, *edge);
        }

        while let Ok(edge) = heap.extract() {
            if edge.is_self_loop() {
                continue;
            }
            if join_tree(graph, &mut tree, &edge)? {
                break;
            }
            tracing::trace!(
                a = graph.label(edge.a),
                b = graph.label(edge.b),
                weight = edge.weight,
                "discarding edge inside tree"
            );
        }
    }

    Ok(tree)
}

fn frontier_prim(graph: &Graph) -> Result<Graph> {
    let mut tree = Graph::new();
    let mut heap = Heap::with_capacity(graph.adjacency_count(), HeapKind::Min);
    let mut in_tree = vec![false; graph.vertex_count()];

    for vertex in graph.vertex_ids() {
        // Duplicate labels resolve to the first stored vertex, which owns every edge.
        let root = graph
            .index_of(graph.label(vertex))
            .ok_or_else(|| DsaError::vertex_not_found(graph.label(vertex)))?;
        if in_tree[root.index()] {
            continue;
        }
        in_tree[root.index()] = true;
        tree.add_vertex(graph.label(root));
        expand(graph, &mut heap, &in_tree, root);

        while let Ok(edge) = heap.extract() {
            let next = match (in_tree[edge.a.index()], in_tree[edge.b.index()]) {
                (true, false) => edge.b,
                (false, true) => edge.a,
                _ => continue,
            };
            in_tree[next.index()] = true;
            tree.add_vertex(graph.label(next));
            tree.add_edge(graph.label(edge.a), graph.label(edge.b), edge.weight)?;
            expand(graph, &mut heap, &in_tree, next);
        }
    }

    Ok(tree)
}

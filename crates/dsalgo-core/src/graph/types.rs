use std::cmp::Ordering;
use std::fmt;

/// Edge weight and path cost
pub type Weight = i32;

/// Cost recorded for vertices no path has reached yet
pub const UNREACHABLE: Weight = Weight::MAX;

/// Position of a vertex in one graph's vertex sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(usize);

impl VertexId {
    pub fn new(index: usize) -> Self {
        VertexId(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A labelled node. Two vertices are equal when their labels are.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Vertex {
    label: String,
}

impl Vertex {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Weighted undirected edge between two vertices of the same graph.
///
/// Equality and ordering look at the weight only, which is what the heaps
/// in the graph algorithms need. Use [`Edge::same_endpoints`] to compare
/// identity.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    pub a: VertexId,
    pub b: VertexId,
    pub weight: Weight,
}

impl Edge {
    pub fn new(a: VertexId, b: VertexId, weight: Weight) -> Self {
        Self { a, b, weight }
    }

    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.a, self.b)
    }

    /// Whether `vertex` is one of this edge's endpoints
    pub fn connects(&self, vertex: VertexId) -> bool {
        self.a == vertex || self.b == vertex
    }

    /// The endpoint on the other side of `from`
    pub fn opposite(&self, from: VertexId) -> VertexId {
        if self.a == from {
            self.b
        } else {
            self.a
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.a == self.b
    }

    /// Same unordered endpoint pair, regardless of weight
    pub fn same_endpoints(&self, other: &Edge) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight
    }
}

impl Eq for Edge {}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight.cmp(&other.weight)
    }
}

use crate::error::{DsaError, Result};
use crate::graph::{Graph, VertexId, Weight, UNREACHABLE};
use crate::heap::{Heap, HeapKind};

/// Per-vertex bookkeeping of a shortest-path search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathEntry {
    pub visited: bool,
    /// Vertex the cheapest known path arrives from; the origin is its own predecessor
    pub predecessor: Option<VertexId>,
    /// Cheapest known cost, [`UNREACHABLE`] until relaxed
    pub cost: Weight,
}

impl PathEntry {
    fn unreached() -> Self {
        Self {
            visited: false,
            predecessor: None,
            cost: UNREACHABLE,
        }
    }
}

/// Shortest-path table, indexed like the vertex sequence of the searched graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    origin: VertexId,
    entries: Vec<PathEntry>,
}

impl ShortestPaths {
    pub fn origin(&self) -> VertexId {
        self.origin
    }

    pub fn entries(&self) -> &[PathEntry] {
        &self.entries
    }

    pub fn entry(&self, vertex: VertexId) -> Option<&PathEntry> {
        self.entries.get(vertex.index())
    }

    pub fn cost(&self, vertex: VertexId) -> Option<Weight> {
        self.entry(vertex)
            .filter(|entry| entry.cost != UNREACHABLE)
            .map(|entry| entry.cost)
    }

    pub fn is_reachable(&self, vertex: VertexId) -> bool {
        self.cost(vertex).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Vertices on the recorded route from the origin to `target`, origin first.
    /// `None` when `target` was never reached.
    pub fn path_to(&self, target: VertexId) -> Option<Vec<VertexId>> {
        if !self.is_reachable(target) {
            return None;
        }
        let mut path = vec![target];
        let mut current = target;
        while current != self.origin {
            let previous = self.entry(current)?.predecessor?;
            // Only negative weights could close a predecessor cycle.
            if path.len() > self.entries.len() {
                return None;
            }
            path.push(previous);
            current = previous;
        }
        path.reverse();
        Some(path)
    }
}

/// Pending expansion of a vertex at the cost recorded when it was queued
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct HeapEntry {
    cost: Weight,
    vertex: VertexId,
}

/// Costs and predecessors of the shortest paths from `origin` to every
/// reachable vertex of `graph`.
///
/// Every edge of the vertex being expanded is relaxed, visited or not, and a
/// vertex is queued again whenever its cost drops. The next vertex to expand
/// is the unvisited one with the lowest queued cost, so with non-negative
/// weights each cost equals its predecessor's cost plus the connecting edge.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn single_source_shortest_path(graph: &Graph, origin: &str) -> Result<ShortestPaths> {
    let origin_id = graph
        .index_of(origin)
        .ok_or_else(|| DsaError::vertex_not_found(origin))?;

    let mut entries = vec![PathEntry::unreached(); graph.vertex_count()];
    entries[origin_id.index()] = PathEntry {
        visited: true,
        predecessor: Some(origin_id),
        cost: 0,
    };

    // One entry per successful relaxation, at most one per adjacency entry.
    let mut heap: Heap<HeapEntry> = Heap::with_capacity(graph.adjacency_count(), HeapKind::Min);
    let mut current = Some(origin_id);

    while let Some(vertex) = current {
        relax_neighbors(graph, vertex, &mut entries, &mut heap);
        current = next_unvisited(&mut heap, &mut entries);
    }

    let reached = entries
        .iter()
        .filter(|entry| entry.cost != UNREACHABLE)
        .count();
    tracing::debug!(reached, "single_source_shortest_path");

    Ok(ShortestPaths {
        origin: origin_id,
        entries,
    })
}

fn relax_neighbors(
    graph: &Graph,
    vertex: VertexId,
    entries: &mut [PathEntry],
    heap: &mut Heap<HeapEntry>,
) {
    let base = entries[vertex.index()].cost;
    for edge in graph.adjacency(vertex) {
        let far = edge.opposite(vertex);
        let candidate = base.saturating_add(edge.weight);
        let entry = &mut entries[far.index()];
        if candidate >= entry.cost {
            continue;
        }
        entry.cost = candidate;
        entry.predecessor = Some(vertex);

        if !entry.visited
            && !heap.insert(HeapEntry {
                cost: candidate,
                vertex: far,
            })
        {
            tracing::warn!(
                from = graph.label(vertex),
                to = graph.label(far),
                capacity = heap.capacity(),
                "path heap full, candidate dropped"
            );
        }
    }
}

/// Pop queued entries until one names an unvisited vertex, then mark it visited
fn next_unvisited(heap: &mut Heap<HeapEntry>, entries: &mut [PathEntry]) -> Option<VertexId> {
    while let Ok(next) = heap.extract() {
        let entry = &mut entries[next.vertex.index()];
        if entry.visited || next.cost > entry.cost {
            continue;
        }
        entry.visited = true;
        return Some(next.vertex);
    }
    None
}

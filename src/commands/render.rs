//! Text and JSON rendering of graphs and shortest-path tables

use serde::Serialize;

use dsalgo_core::graph::{Graph, ShortestPaths, VertexId, Weight};

/// Each vertex followed by its adjacency list, one `destination weight` per line
pub fn graph_text(graph: &Graph) -> String {
    let mut out = String::new();
    for vertex in graph.vertex_ids() {
        let label = graph.label(vertex);
        // Edges name the first vertex carrying a label, so duplicates look through it.
        let owner = graph.index_of(label).unwrap_or(vertex);
        out.push_str(&format!("{}:\n", label));
        for edge in graph.adjacency(vertex) {
            out.push_str(&format!(
                "  {} {}\n",
                graph.label(edge.opposite(owner)),
                edge.weight
            ));
        }
    }
    out
}

/// One `label: predecessor, cost` line per vertex
pub fn paths_text(graph: &Graph, paths: &ShortestPaths) -> String {
    let mut out = String::new();
    for vertex in graph.vertex_ids() {
        let Some(entry) = paths.entry(vertex) else {
            continue;
        };
        let predecessor = entry
            .predecessor
            .map(|p| graph.label(p))
            .unwrap_or("none");
        let cost = paths
            .cost(vertex)
            .map(|c| c.to_string())
            .unwrap_or_else(|| "unreachable".to_string());
        out.push_str(&format!(
            "{}: {}, {}\n",
            graph.label(vertex),
            predecessor,
            cost
        ));
    }
    out
}

pub fn route_text(graph: &Graph, route: &[VertexId], cost: Weight) -> String {
    let labels: Vec<&str> = route.iter().map(|v| graph.label(*v)).collect();
    format!("{} ({})\n", labels.join(" -> "), cost)
}

#[derive(Debug, Serialize)]
pub struct EdgeReport {
    pub a: String,
    pub b: String,
    pub weight: Weight,
}

#[derive(Debug, Serialize)]
pub struct GraphReport {
    pub vertices: Vec<String>,
    pub edges: Vec<EdgeReport>,
    pub total_weight: i64,
}

impl GraphReport {
    pub fn new(graph: &Graph) -> Self {
        Self {
            vertices: graph
                .vertices()
                .iter()
                .map(|v| v.label().to_string())
                .collect(),
            edges: graph
                .edges()
                .map(|edge| EdgeReport {
                    a: graph.label(edge.a).to_string(),
                    b: graph.label(edge.b).to_string(),
                    weight: edge.weight,
                })
                .collect(),
            total_weight: graph.total_weight(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PathRow {
    pub vertex: String,
    pub visited: bool,
    pub predecessor: Option<String>,
    /// `None` while unreachable
    pub cost: Option<Weight>,
}

#[derive(Debug, Serialize)]
pub struct PathsReport {
    pub origin: String,
    pub entries: Vec<PathRow>,
}

impl PathsReport {
    pub fn new(graph: &Graph, paths: &ShortestPaths) -> Self {
        let entries = graph
            .vertex_ids()
            .filter_map(|vertex| {
                let entry = paths.entry(vertex)?;
                Some(PathRow {
                    vertex: graph.label(vertex).to_string(),
                    visited: entry.visited,
                    predecessor: entry.predecessor.map(|p| graph.label(p).to_string()),
                    cost: paths.cost(vertex),
                })
            })
            .collect();
        Self {
            origin: graph.label(paths.origin()).to_string(),
            entries,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RouteReport {
    pub from: String,
    pub to: String,
    /// Empty when the target is unreachable
    pub route: Vec<String>,
    pub cost: Option<Weight>,
}

use clap::Args;

use dsalgo_core::error::Result;
use dsalgo_core::graph::{Graph, Sample};

use super::parse::{parse_edge_spec, EdgeSpec};

/// Where a command's graph comes from
#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// Use a built-in sample graph
    #[arg(long, value_enum, conflicts_with_all = ["vertex", "edge"])]
    pub sample: Option<Sample>,

    /// Vertex label (can be specified multiple times; defaults to edge endpoints)
    #[arg(long, action = clap::ArgAction::Append)]
    pub vertex: Vec<String>,

    /// Edge as A:B:WEIGHT (can be specified multiple times)
    #[arg(long, value_parser = parse_edge_spec, action = clap::ArgAction::Append)]
    pub edge: Vec<EdgeSpec>,
}

impl GraphArgs {
    /// Build the graph; with neither a sample nor edges, the simple sample is used
    pub fn build(&self) -> Result<Graph> {
        if let Some(sample) = self.sample {
            return sample.build();
        }
        if self.vertex.is_empty() && self.edge.is_empty() {
            return Sample::Simple.build();
        }

        let mut vertices = self.vertex.clone();
        if vertices.is_empty() {
            for spec in &self.edge {
                for label in [&spec.a, &spec.b] {
                    if !vertices.contains(label) {
                        vertices.push(label.clone());
                    }
                }
            }
        }

        let edges: Vec<(String, String, i32)> = self
            .edge
            .iter()
            .map(|spec| (spec.a.clone(), spec.b.clone(), spec.weight))
            .collect();
        Graph::from_parts(&vertices, &edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(a: &str, b: &str, weight: i32) -> EdgeSpec {
        EdgeSpec {
            a: a.to_string(),
            b: b.to_string(),
            weight,
        }
    }

    #[test]
    fn test_vertices_inferred_from_edges() {
        let args = GraphArgs {
            sample: None,
            vertex: vec![],
            edge: vec![spec("X", "Y", 2), spec("Y", "Z", 3)],
        };
        let graph = args.build().unwrap();
        let labels: Vec<&str> = graph.vertices().iter().map(|v| v.label()).collect();
        assert_eq!(labels, vec!["X", "Y", "Z"]);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_explicit_vertices_must_cover_edges() {
        let args = GraphArgs {
            sample: None,
            vertex: vec!["X".to_string()],
            edge: vec![spec("X", "Y", 2)],
        };
        assert!(args.build().is_err());
    }

    #[test]
    fn test_defaults_to_simple_sample() {
        let args = GraphArgs {
            sample: None,
            vertex: vec![],
            edge: vec![],
        };
        assert_eq!(args.build().unwrap().vertex_count(), 4);
    }
}

use std::time::Instant;

use serde::Serialize;

use dsalgo_core::error::{DsaError, Result};
use dsalgo_core::graph::{
    minimum_spanning_tree_with, single_source_shortest_path, PrimStrategy, Sample,
};
use dsalgo_core::trace_time;

use super::dispatch::Output;
use super::render::{graph_text, paths_text, GraphReport, PathsReport};

#[derive(Debug, Serialize)]
struct DemoReport {
    sample: Sample,
    graph: GraphReport,
    mst: GraphReport,
    paths: PathsReport,
}

/// Execute the demo command: the sample graph, its spanning tree and the
/// shortest paths from its first vertex
pub fn execute(sample: Sample, strategy: PrimStrategy, output: Output) -> Result<()> {
    let graph = sample.build()?;
    let origin = graph
        .vertices()
        .first()
        .map(|vertex| vertex.label().to_string())
        .ok_or_else(|| DsaError::UsageError(format!("sample {} has no vertices", sample)))?;

    let start = Instant::now();
    let tree = minimum_spanning_tree_with(&graph, strategy)?;
    trace_time!(start, "minimum_spanning_tree", edges = tree.edge_count());

    let start = Instant::now();
    let paths = single_source_shortest_path(&graph, &origin)?;
    trace_time!(start, "single_source_shortest_path", origin = origin.as_str());

    if output.is_json() {
        return super::print_json(&DemoReport {
            sample,
            graph: GraphReport::new(&graph),
            mst: GraphReport::new(&tree),
            paths: PathsReport::new(&graph, &paths),
        });
    }

    let decorate = output.decorate();
    if decorate {
        println!("Graph ({})", sample);
    }
    print!("{}", graph_text(&graph));

    if decorate {
        println!();
        println!("Minimum spanning tree (total weight {})", tree.total_weight());
    }
    print!("{}", graph_text(&tree));

    if decorate {
        println!();
        println!("Shortest paths from {}", origin);
    }
    print!("{}", paths_text(&graph, &paths));
    Ok(())
}

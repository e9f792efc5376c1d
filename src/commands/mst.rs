use std::time::Instant;

use serde::Serialize;

use dsalgo_core::error::Result;
use dsalgo_core::graph::{minimum_spanning_tree_with, Graph, PrimStrategy};
use dsalgo_core::trace_time;

use super::dispatch::Output;
use super::render::{graph_text, GraphReport};

#[derive(Debug, Serialize)]
struct MstReport {
    strategy: PrimStrategy,
    tree: GraphReport,
}

/// Execute the mst command
pub fn execute(graph: &Graph, strategy: PrimStrategy, output: Output) -> Result<()> {
    let start = Instant::now();
    let tree = minimum_spanning_tree_with(graph, strategy)?;
    trace_time!(start, "minimum_spanning_tree", edges = tree.edge_count());

    if output.is_json() {
        return super::print_json(&MstReport {
            strategy,
            tree: GraphReport::new(&tree),
        });
    }

    print!("{}", graph_text(&tree));
    if output.decorate() {
        println!();
        println!("Total weight: {}", tree.total_weight());
    }
    Ok(())
}

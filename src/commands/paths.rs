use std::time::Instant;

use dsalgo_core::bail_usage;
use dsalgo_core::error::{DsaError, Result};
use dsalgo_core::graph::{single_source_shortest_path, Graph, VertexId};
use dsalgo_core::trace_time;

use super::dispatch::Output;
use super::render::{paths_text, route_text, PathsReport, RouteReport};

/// Execute the paths command
pub fn execute(graph: &Graph, from: Option<&str>, to: Option<&str>, output: Output) -> Result<()> {
    let origin = match from {
        Some(label) => label,
        None => match graph.vertices().first() {
            Some(vertex) => vertex.label(),
            None => bail_usage!("graph has no vertices"),
        },
    };

    let start = Instant::now();
    let paths = single_source_shortest_path(graph, origin)?;
    trace_time!(start, "single_source_shortest_path", origin = origin);

    let Some(target_label) = to else {
        if output.is_json() {
            return super::print_json(&PathsReport::new(graph, &paths));
        }
        if output.decorate() {
            println!("Shortest paths from {}", origin);
        }
        print!("{}", paths_text(graph, &paths));
        return Ok(());
    };

    let target = graph
        .index_of(target_label)
        .ok_or_else(|| DsaError::vertex_not_found(target_label))?;
    let route = paths.path_to(target);
    let cost = paths.cost(target);

    if output.is_json() {
        return super::print_json(&RouteReport {
            from: origin.to_string(),
            to: target_label.to_string(),
            route: labels(graph, route.as_deref().unwrap_or_default()),
            cost,
        });
    }

    match (route, cost) {
        (Some(route), Some(cost)) => print!("{}", route_text(graph, &route, cost)),
        _ => println!("{} is unreachable from {}", target_label, origin),
    }
    Ok(())
}

fn labels(graph: &Graph, route: &[VertexId]) -> Vec<String> {
    route.iter().map(|v| graph.label(*v).to_string()).collect()
}

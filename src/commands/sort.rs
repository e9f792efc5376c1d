use std::time::Instant;

use serde::Serialize;

use dsalgo_core::error::Result;
use dsalgo_core::sort::heap_sort;
use dsalgo_core::trace_time;

use super::dispatch::Output;

#[derive(Debug, Serialize)]
struct SortReport {
    sorted: Vec<i32>,
}

/// Execute the sort command
pub fn execute(values: Vec<i32>, output: Output) -> Result<()> {
    let count = values.len();
    let start = Instant::now();
    let sorted = heap_sort(values)?;
    trace_time!(start, "heap_sort", count = count);

    if output.is_json() {
        return super::print_json(&SortReport { sorted });
    }

    let line: Vec<String> = sorted.iter().map(i32::to_string).collect();
    println!("{}", line.join(" "));
    Ok(())
}

//! CLI argument parsing for dsalgo
//!
//! Global flags: --config, --format, --quiet, --verbose, --log-level, --log-json

pub mod args;
pub mod parse;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use dsalgo_core::format::OutputFormat;
use dsalgo_core::graph::{PrimStrategy, Sample};

pub use args::GraphArgs;

/// dsalgo - classic algorithms and data structures
#[derive(Parser, Debug)]
#[command(name = "dsalgo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (TOML)
    #[arg(long, global = true, env = "DSALGO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format (defaults to the configured format)
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Log debug events, including timings
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (e.g. debug, trace, dsalgo_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a sample graph, its minimum spanning tree and shortest paths from its first vertex
    Demo {
        /// Sample graph to run on
        #[arg(value_enum, default_value = "simple")]
        sample: Sample,
    },

    /// Compute the minimum spanning tree of a graph
    Mst {
        #[command(flatten)]
        graph: GraphArgs,

        /// How Prim's algorithm feeds its edge heap (defaults to the configured strategy)
        #[arg(long, value_enum)]
        strategy: Option<PrimStrategy>,
    },

    /// Compute shortest paths from one vertex to every other
    Paths {
        #[command(flatten)]
        graph: GraphArgs,

        /// Origin vertex (defaults to the first vertex)
        #[arg(long)]
        from: Option<String>,

        /// Print only the route to this vertex
        #[arg(long)]
        to: Option<String>,
    },

    /// Heap-sort a list of integers
    Sort {
        /// Values to sort
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i32>,
    },
}

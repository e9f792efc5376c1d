//! Command dispatch logic for dsalgo
use std::time::Instant;

use dsalgo_core::config::Config;
use dsalgo_core::error::Result;
use dsalgo_core::format::OutputFormat;

use crate::cli::{Cli, Commands};
use crate::commands;

/// Settings resolved from flags and the config file, shared by every command
#[derive(Debug, Clone, Copy)]
pub struct Output {
    pub format: OutputFormat,
    pub quiet: bool,
}

impl Output {
    pub fn is_json(self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Headings and summary lines are skipped for JSON and in quiet mode
    pub fn decorate(self) -> bool {
        !self.quiet && !self.is_json()
    }
}

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = Config::resolve(cli.config.as_deref())?;
    let output = Output {
        format: cli.format.unwrap_or(config.output.format),
        quiet: cli.quiet,
    };

    tracing::debug!(
        elapsed = ?start.elapsed(),
        format = %output.format,
        strategy = %config.mst.strategy,
        "resolve_config"
    );

    match &cli.command {
        Commands::Demo { sample } => {
            commands::demo::execute(*sample, config.mst.strategy, output)
        }

        Commands::Mst { graph, strategy } => {
            let strategy = strategy.unwrap_or(config.mst.strategy);
            commands::mst::execute(&graph.build()?, strategy, output)
        }

        Commands::Paths { graph, from, to } => commands::paths::execute(
            &graph.build()?,
            from.as_deref(),
            to.as_deref(),
            output,
        ),

        Commands::Sort { values } => commands::sort::execute(values.clone(), output),
    }
}

//! Command trait and context for dispatching commands

use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::time::Instant;

use tracing::debug;

use crate::cli::Cli;
use tracequery_core::error::Result;
use tracequery_core::graph::Graph;
use tracequery_core::parse::load_graph;
use tracequery_core::plan::QueryPlan;
use tracequery_core::{bail_invalid, bail_usage};

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    /// Load the trace graph from `--input`, or from stdin when it is piped
    pub fn load_graph(&self) -> Result<Graph> {
        let graph = match &self.cli.input {
            Some(path) => load_graph(BufReader::new(File::open(path)?))?,
            None => {
                let stdin = io::stdin();
                if stdin.is_terminal() {
                    bail_usage!(
                        "no traces given: pass --input <FILE> or pipe an edge list on stdin"
                    );
                }
                load_graph(stdin.lock())?
            }
        };

        if graph.is_empty() {
            bail_invalid!("edge list", "no traces found");
        }

        debug!(
            elapsed = ?self.start.elapsed(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "load_graph"
        );
        Ok(graph)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// Without a subcommand the standard report is printed
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        crate::commands::report::execute(ctx, &QueryPlan::standard())
    }
}

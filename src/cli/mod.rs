//! CLI argument parsing for tracequery
//!
//! Uses clap for argument parsing.
//! Supports global flags: --input, --format, --quiet, --verbose, --log-level, --log-json

pub mod output;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use parse::parse_node;
use tracequery_core::graph::{Cost, NodeKey};

pub use output::OutputFormat;

/// Tracequery - route, hop-count and latency queries over service traces
#[derive(Parser, Debug)]
#[command(name = "tracequery")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Edge list file such as "AB5, BC4, CD8" (reads stdin when omitted)
    #[arg(long, short, global = true, env = "TRACEQUERY_INPUT")]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress error messages
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Log progress and timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. "trace", "tracequery_core=debug")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Answer the standard questions, or every query in a plan file (default)
    Report {
        /// TOML query plan with [[query]] entries
        #[arg(long)]
        plan: Option<PathBuf>,
    },

    /// Cost of following a route exactly
    Cost {
        /// Route such as A-E-B-C-D
        route: String,
    },

    /// Count routes from a node back to itself within a hop limit
    CountReturning {
        /// Start and end node
        #[arg(value_parser = parse_node)]
        start: NodeKey,

        /// Maximum number of traces
        #[arg(long)]
        max_depth: usize,
    },

    /// Count routes with an exact number of traces
    CountAtDepth {
        /// Start node
        #[arg(value_parser = parse_node)]
        start: NodeKey,

        /// End node
        #[arg(value_parser = parse_node)]
        target: NodeKey,

        /// Exact number of traces
        #[arg(long)]
        depth: usize,
    },

    /// Count distinct routes cheaper than a latency limit
    CountUnderCost {
        /// Start node
        #[arg(value_parser = parse_node)]
        start: NodeKey,

        /// End node
        #[arg(value_parser = parse_node)]
        target: NodeKey,

        /// Exclusive upper bound on total cost
        #[arg(long)]
        limit: Cost,
    },

    /// Cost of the cheapest non-empty route between two nodes
    Cheapest {
        /// Start node
        #[arg(value_parser = parse_node)]
        from: NodeKey,

        /// End node (may equal the start for the cheapest cycle)
        #[arg(value_parser = parse_node)]
        to: NodeKey,
    },
}

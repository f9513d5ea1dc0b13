//! Edge-list ingestion
//!
//! Traces are written as two node letters followed by a decimal cost
//! (`AB5`). Anything between traces (commas, whitespace, line breaks) is
//! ignored, so `AB5, BC4` and `AB5 BC4` read the same.

use std::io::BufRead;

use regex::Regex;
use tracing::debug;

use crate::error::{Result, TraceError};
use crate::graph::{Cost, Edge, Graph, NodeKey};

const TRACE_PATTERN: &str = r"([A-Z])([A-Z])(\d+)";

fn trace_regex() -> Result<Regex> {
    Regex::new(TRACE_PATTERN)
        .map_err(|e| TraceError::Other(format!("failed to compile trace pattern: {}", e)))
}

fn node_at(caps: &regex::Captures<'_>, group: usize) -> Result<NodeKey> {
    caps[group].parse()
}

/// Extract every trace from `text`, in order of appearance
pub fn parse_edges(text: &str) -> Result<Vec<Edge>> {
    let re = trace_regex()?;
    re.captures_iter(text)
        .map(|caps| -> Result<Edge> {
            let cost = caps[3]
                .parse::<Cost>()
                .map_err(|_| TraceError::invalid_value("trace cost", &caps[0]))?;
            Ok(Edge::new(node_at(&caps, 1)?, node_at(&caps, 2)?, cost))
        })
        .collect()
}

/// Read an edge list and build the graph from it
pub fn load_graph(reader: impl BufRead) -> Result<Graph> {
    let mut edges = Vec::new();
    for (line_no, line) in reader.lines().enumerate() {
        let parsed = parse_edges(&line?)?;
        debug!(line = line_no + 1, traces = parsed.len(), "parsed_line");
        edges.extend(parsed);
    }
    Graph::build(edges)
}

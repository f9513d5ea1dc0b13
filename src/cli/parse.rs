use tracequery_core::graph::NodeKey;

/// Parse a node key from a command-line argument
pub fn parse_node(s: &str) -> std::result::Result<NodeKey, String> {
    s.parse::<NodeKey>().map_err(|e| e.to_string())
}

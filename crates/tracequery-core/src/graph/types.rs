use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TraceError;

/// Cumulative latency of a trace or path.
///
/// Signed so that non-positive weights can be represented and rejected
/// at graph construction time.
pub type Cost = i64;

/// Identifier of a service in the trace graph: a single uppercase letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NodeKey(char);

impl NodeKey {
    pub fn new(c: char) -> Result<Self, TraceError> {
        if c.is_ascii_uppercase() {
            Ok(NodeKey(c))
        } else {
            Err(TraceError::InvalidNode(c.to_string()))
        }
    }

    /// For letters known at compile time
    pub(crate) const fn letter(c: char) -> Self {
        debug_assert!(c.is_ascii_uppercase());
        NodeKey(c)
    }

    pub fn as_char(self) -> char {
        self.0
    }
}

impl FromStr for NodeKey {
    type Err = TraceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                NodeKey::new(c).map_err(|_| TraceError::InvalidNode(s.to_string()))
            }
            _ => Err(TraceError::InvalidNode(s.to_string())),
        }
    }
}

impl TryFrom<String> for NodeKey {
    type Error = TraceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<NodeKey> for String {
    fn from(key: NodeKey) -> Self {
        key.0.to_string()
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A directed, weighted trace from one service to another
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub from: NodeKey,
    pub to: NodeKey,
    pub cost: Cost,
}

impl Edge {
    pub fn new(from: NodeKey, to: NodeKey, cost: Cost) -> Self {
        Edge { from, to, cost }
    }
}

/// Renders in edge-list notation, e.g. `AB5`
impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.from, self.to, self.cost)
    }
}

/// Parse a route such as `A-E-B-C-D` or `AEBCD` into its node sequence.
///
/// Separators (`-`, `,`, whitespace) are optional. An empty string is the
/// empty route.
pub fn parse_route(s: &str) -> Result<Vec<NodeKey>, TraceError> {
    s.chars()
        .filter(|c| !matches!(c, '-' | ',') && !c.is_whitespace())
        .map(NodeKey::new)
        .collect()
}

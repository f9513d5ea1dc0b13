//! Query plans: ordered lists of route queries run against one graph
//!
//! Plans are written in TOML, one `[[query]]` table per query:
//!
//! ```toml
//! [[query]]
//! kind = "cost"
//! route = "A-B-C"
//!
//! [[query]]
//! kind = "cheapest"
//! from = "B"
//! to = "B"
//! ```

use std::fmt;
use std::fs;
use std::path::Path;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bail_invalid;
use crate::error::Result;
use crate::format::result_msg;
use crate::graph::{
    cheapest_path, count_at_depth, count_returning, count_under_cost, path_cost, Cost, Graph,
    NodeKey,
};

/// A single question asked of the trace graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Query {
    /// Cost of following a route exactly
    Cost {
        #[serde(with = "route_text")]
        route: Vec<NodeKey>,
    },
    /// Routes from a node back to itself with at most `max_depth` traces
    CountReturning { start: NodeKey, max_depth: usize },
    /// Routes with exactly `depth` traces
    CountAtDepth {
        start: NodeKey,
        target: NodeKey,
        depth: usize,
    },
    /// Routes whose total cost is below `limit`
    CountUnderCost {
        start: NodeKey,
        target: NodeKey,
        limit: Cost,
    },
    /// Cheapest non-empty route
    Cheapest { from: NodeKey, to: NodeKey },
}

impl Query {
    pub fn kind(&self) -> &'static str {
        match self {
            Query::Cost { .. } => "cost",
            Query::CountReturning { .. } => "count-returning",
            Query::CountAtDepth { .. } => "count-at-depth",
            Query::CountUnderCost { .. } => "count-under-cost",
            Query::Cheapest { .. } => "cheapest",
        }
    }

    /// One-line description used as the query label in output
    pub fn describe(&self) -> String {
        match self {
            Query::Cost { route } => format!("cost of route {}", route_text::join(route)),
            Query::CountReturning { start, max_depth } => {
                format!("routes {start}->{start} with at most {max_depth} traces")
            }
            Query::CountAtDepth {
                start,
                target,
                depth,
            } => format!("routes {start}->{target} with exactly {depth} traces"),
            Query::CountUnderCost {
                start,
                target,
                limit,
            } => format!("routes {start}->{target} costing less than {limit}"),
            Query::Cheapest { from, to } => format!("cheapest route {from}->{to}"),
        }
    }

    pub fn run(&self, graph: &Graph) -> Result<Answer> {
        Ok(match *self {
            Query::Cost { ref route } => Answer::Cost(path_cost(graph, route)),
            Query::CountReturning { start, max_depth } => {
                Answer::Count(count_returning(graph, start, max_depth)?)
            }
            Query::CountAtDepth {
                start,
                target,
                depth,
            } => Answer::Count(count_at_depth(graph, start, target, depth)?),
            Query::CountUnderCost {
                start,
                target,
                limit,
            } => Answer::Count(count_under_cost(graph, start, target, limit)?),
            Query::Cheapest { from, to } => Answer::Cost(cheapest_path(graph, from, to)?),
        })
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// Result of a query: a cost that may be absent, or a route count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Answer {
    Cost(Option<Cost>),
    Count(usize),
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Cost(cost) => f.write_str(&result_msg(*cost)),
            Answer::Count(count) => write!(f, "{}", count),
        }
    }
}

/// A query paired with its answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOutcome {
    pub query: Query,
    pub answer: Answer,
}

/// Ordered list of queries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryPlan {
    #[serde(rename = "query", default)]
    pub queries: Vec<Query>,
}

impl QueryPlan {
    /// The ten standard questions about a trace graph
    pub fn standard() -> Self {
        let [a, b, c, d, e] = ['A', 'B', 'C', 'D', 'E'].map(NodeKey::letter);
        let cost = |route: &[NodeKey]| Query::Cost {
            route: route.to_vec(),
        };

        QueryPlan {
            queries: vec![
                cost(&[a, b, c]),
                cost(&[a, d]),
                cost(&[a, d, c]),
                cost(&[a, e, b, c, d]),
                cost(&[a, e, d]),
                Query::CountReturning {
                    start: c,
                    max_depth: 3,
                },
                Query::CountAtDepth {
                    start: a,
                    target: c,
                    depth: 4,
                },
                Query::Cheapest { from: a, to: c },
                Query::Cheapest { from: b, to: b },
                Query::CountUnderCost {
                    start: c,
                    target: c,
                    limit: 30,
                },
            ],
        }
    }

    /// Parse a plan from TOML text; a plan must contain at least one query
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let plan: QueryPlan = toml::from_str(text)?;
        if plan.queries.is_empty() {
            bail_invalid!("query plan", "no [[query]] entries");
        }
        Ok(plan)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let plan = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), queries = plan.queries.len(), "plan_loaded");
        Ok(plan)
    }

    /// Run every query in order, stopping at the first error
    pub fn run(&self, graph: &Graph) -> Result<Vec<QueryOutcome>> {
        self.queries
            .iter()
            .map(|query| -> Result<QueryOutcome> {
                let start = Instant::now();
                let answer = query.run(graph)?;
                crate::trace_time!(start, "query", kind = query.kind());
                debug!(query = %query, answer = %answer, "query_answered");
                Ok(QueryOutcome {
                    query: query.clone(),
                    answer,
                })
            })
            .collect()
    }
}

/// Routes are written as `A-B-C` in plan files
mod route_text {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::graph::{parse_route, NodeKey};

    pub fn join(route: &[NodeKey]) -> String {
        route
            .iter()
            .map(|key| key.to_string())
            .collect::<Vec<_>>()
            .join("-")
    }

    pub fn serialize<S: Serializer>(route: &[NodeKey], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&join(route))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<NodeKey>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        parse_route(&text).map_err(serde::de::Error::custom)
    }
}

//! Route queries built on the breadth-first [`walk`]
//!
//! Each traversal query owns its accumulators and decides termination
//! through its handler:
//! - depth-bounded counts prune once the depth bound is passed
//! - cost-bounded counts prune once the cost limit is reached, which
//!   relies on every trace cost being positive
//! - the cheapest-path search prunes paths that cannot improve on the best
//!   cost already recorded for their end node

use std::collections::HashMap;

use tracing::trace;

use crate::error::Result;
use crate::graph::model::Graph;
use crate::graph::types::{Cost, NodeKey};
use crate::graph::walk::{walk, Flow, WalkStats};

/// Cost of following `route` exactly.
///
/// The empty route costs 0, a single registered node costs 0, and a route
/// with any missing direct trace has no cost at all (not a partial sum).
/// A total that does not fit in [`Cost`] is likewise absent.
pub fn path_cost(graph: &Graph, route: &[NodeKey]) -> Option<Cost> {
    match route {
        [] => Some(0),
        [only] => graph.contains(*only).then_some(0),
        _ => route.windows(2).try_fold(0, |total: Cost, pair| {
            total.checked_add(graph.edge_cost(pair[0], pair[1])?)
        }),
    }
}

/// Number of paths from `start` back to `start` with at most `max_depth` traces
pub fn count_returning(graph: &Graph, start: NodeKey, max_depth: usize) -> Result<usize> {
    count_within_depth(graph, start, start, max_depth)
}

/// Number of paths from `start` to `target` with between 1 and `max_depth` traces
#[tracing::instrument(skip(graph), fields(start = %start, target = %target))]
pub fn count_within_depth(
    graph: &Graph,
    start: NodeKey,
    target: NodeKey,
    max_depth: usize,
) -> Result<usize> {
    let mut count = 0;
    walk(graph, start, |path| {
        if path.depth() > max_depth {
            return Flow::Prune;
        }
        if path.node() == target {
            trace!(path = %path, "match");
            count += 1;
        }
        Flow::Continue
    })?;
    Ok(count)
}

/// Number of paths from `start` to `target` with exactly `depth` traces
#[tracing::instrument(skip(graph), fields(start = %start, target = %target))]
pub fn count_at_depth(
    graph: &Graph,
    start: NodeKey,
    target: NodeKey,
    depth: usize,
) -> Result<usize> {
    let mut count = 0;
    walk(graph, start, |path| {
        if path.depth() < depth {
            return Flow::Continue;
        }
        if path.depth() == depth && path.node() == target {
            trace!(path = %path, "match");
            count += 1;
        }
        Flow::Prune
    })?;
    Ok(count)
}

/// Number of distinct paths from `start` to `target` costing less than `limit`.
///
/// The same node may be counted several times through different routes.
#[tracing::instrument(skip(graph), fields(start = %start, target = %target))]
pub fn count_under_cost(
    graph: &Graph,
    start: NodeKey,
    target: NodeKey,
    limit: Cost,
) -> Result<usize> {
    let mut count = 0;
    walk(graph, start, |path| {
        if path.cost() >= limit {
            return Flow::Prune;
        }
        if path.node() == target {
            trace!(path = %path, cost = path.cost(), "match");
            count += 1;
        }
        Flow::Continue
    })?;
    Ok(count)
}

/// Cost of the cheapest non-empty path from `from` to `to`.
///
/// When `from == to` this is the cheapest cycle through `from`. Returns
/// `None` when `to` is unreachable. Path costs saturate, so a route whose
/// true cost exceeds `Cost::MAX` is reported as `Cost::MAX`.
#[tracing::instrument(skip(graph), fields(from = %from, to = %to))]
pub fn cheapest_path(graph: &Graph, from: NodeKey, to: NodeKey) -> Result<Option<Cost>> {
    cheapest_walk(graph, from, to).map(|(best, _)| best)
}

fn cheapest_walk(
    graph: &Graph,
    from: NodeKey,
    to: NodeKey,
) -> Result<(Option<Cost>, WalkStats)> {
    let mut best_seen_at_node: HashMap<NodeKey, Cost> = HashMap::new();
    let mut best_answer: Option<Cost> = None;

    let stats = walk(graph, from, |path| {
        let cost = path.cost();

        // Ties bring nothing new, so only strict improvements survive.
        if best_seen_at_node
            .get(&path.node())
            .is_some_and(|&seen| seen <= cost)
        {
            return Flow::Prune;
        }
        best_seen_at_node.insert(path.node(), cost);

        if best_answer.is_some_and(|best| best <= cost) {
            return Flow::Prune;
        }

        if path.node() == to {
            trace!(path = %path, cost, "improved");
            best_answer = Some(cost);
            return Flow::Prune;
        }

        Flow::Continue
    })?;

    Ok((best_answer, stats))
}

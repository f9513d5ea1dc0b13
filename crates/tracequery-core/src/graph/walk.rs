//! Breadth-first path enumeration driven by a pruning handler

use std::collections::VecDeque;
use std::rc::Rc;

use tracing::debug;

use crate::error::Result;
use crate::graph::model::Graph;
use crate::graph::path::PathState;
use crate::graph::types::NodeKey;

/// Decision returned by a path handler for each generated path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep extending this path
    Continue,
    /// Stop extending this path (results already taken from it are kept)
    Prune,
}

impl Flow {
    pub fn continue_if(condition: bool) -> Flow {
        if condition {
            Flow::Continue
        } else {
            Flow::Prune
        }
    }
}

/// Counters describing the work done by one [`walk`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// Paths handed to the handler
    pub generated: usize,
    /// Paths taken off the queue and extended
    pub expanded: usize,
    /// Largest number of paths waiting in the queue at once
    pub max_frontier: usize,
}

/// Traverse all paths that start at `start`, breadth first.
///
/// `on_path` receives every generated path except the root, and decides
/// whether it is extended further. Edges are followed in ascending
/// destination order, so the sequence of handler calls is deterministic.
///
/// The walk has no depth or cost bound of its own: it ends only when every
/// path has been pruned. A handler that never prunes on a graph with a
/// reachable cycle makes this loop forever.
#[tracing::instrument(skip(graph, on_path), fields(start = %start))]
pub fn walk<F>(graph: &Graph, start: NodeKey, mut on_path: F) -> Result<WalkStats>
where
    F: FnMut(&PathState) -> Flow,
{
    graph.neighbors(start)?;

    let mut stats = WalkStats::default();
    let mut queue: VecDeque<Rc<PathState>> = VecDeque::new();
    queue.push_back(PathState::root(start));

    while let Some(here) = queue.pop_front() {
        stats.expanded += 1;
        for edge in graph.neighbors(here.node())?.values() {
            let path = PathState::extend(&here, edge);
            stats.generated += 1;
            if on_path(&path) == Flow::Continue {
                queue.push_back(path);
            }
        }
        stats.max_frontier = stats.max_frontier.max(queue.len());
    }

    debug!(
        generated = stats.generated,
        expanded = stats.expanded,
        max_frontier = stats.max_frontier,
        "walk_complete"
    );

    Ok(stats)
}

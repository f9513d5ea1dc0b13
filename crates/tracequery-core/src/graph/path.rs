//! Shared-prefix path records produced during traversal

use std::fmt;
use std::rc::Rc;

use crate::graph::types::{Cost, Edge, NodeKey};

/// An immutable route taken so far.
///
/// Each state points at the state it was extended from, so sibling paths
/// share their common prefix instead of copying it.
#[derive(Debug)]
pub struct PathState {
    prior: Option<Rc<PathState>>,
    node: NodeKey,
    depth: usize,
    cost: Cost,
}

impl PathState {
    /// Starting point of a traversal: depth 0, cost 0
    pub fn root(node: NodeKey) -> Rc<PathState> {
        Rc::new(PathState {
            prior: None,
            node,
            depth: 0,
            cost: 0,
        })
    }

    /// Follow `edge` from the end of `path`.
    ///
    /// The accumulated cost saturates at `Cost::MAX`, so it never decreases
    /// along a path.
    ///
    /// # Panics
    ///
    /// If `edge` does not start at `path.node()` or has a non-positive cost.
    pub fn extend(path: &Rc<PathState>, edge: &Edge) -> Rc<PathState> {
        assert_eq!(
            path.node, edge.from,
            "trace {} does not start at path end {}",
            edge, path.node
        );
        assert!(edge.cost > 0, "trace {} has a non-positive cost", edge);

        Rc::new(PathState {
            prior: Some(Rc::clone(path)),
            node: edge.to,
            depth: path.depth + 1,
            cost: path.cost.saturating_add(edge.cost),
        })
    }

    pub fn node(&self) -> NodeKey {
        self.node
    }

    /// Number of traces followed from the root
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn cost(&self) -> Cost {
        self.cost
    }

    pub fn prior(&self) -> Option<&PathState> {
        self.prior.as_deref()
    }

    /// Node sequence from the root to this state, root included
    pub fn to_sequence(&self) -> Vec<NodeKey> {
        let mut nodes = Vec::with_capacity(self.depth + 1);
        let mut here = Some(self);
        while let Some(state) = here {
            nodes.push(state.node);
            here = state.prior();
        }
        nodes.reverse();
        nodes
    }
}

/// Renders the node sequence, e.g. `C-E-B-C`
impl fmt::Display for PathState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.to_sequence().iter().map(|k| k.to_string()).collect();
        write!(f, "{}", rendered.join("-"))
    }
}

//! Immutable adjacency structure of the trace graph

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use tracing::debug;

use crate::error::{Result, TraceError};
use crate::graph::types::{Cost, Edge, NodeKey};

/// Outgoing traces of a single node, keyed (and ordered) by destination
pub type Adjacency = BTreeMap<NodeKey, Edge>;

/// Directed, positively weighted trace graph.
///
/// Every endpoint of every edge is registered as a node, so a node without
/// outgoing traces maps to an empty adjacency rather than being missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    nodes: BTreeMap<NodeKey, Adjacency>,
}

impl Graph {
    /// Build a graph from a stream of edges.
    ///
    /// Fails on the first edge with a non-positive cost or whose ordered
    /// pair was already seen.
    pub fn build(edges: impl IntoIterator<Item = Edge>) -> Result<Graph> {
        let mut builder = GraphBuilder::new();
        for edge in edges {
            builder.add_edge(edge)?;
        }
        Ok(builder.finish())
    }

    /// Outgoing edges of `node`, or `UnknownNode` if it was never registered
    pub fn neighbors(&self, node: NodeKey) -> Result<&Adjacency> {
        self.nodes
            .get(&node)
            .ok_or(TraceError::UnknownNode { node })
    }

    pub fn edge_cost(&self, from: NodeKey, to: NodeKey) -> Option<Cost> {
        self.nodes.get(&from)?.get(&to).map(|edge| edge.cost)
    }

    pub fn contains(&self, node: NodeKey) -> bool {
        self.nodes.contains_key(&node)
    }

    /// Registered nodes in ascending order
    pub fn nodes(&self) -> impl Iterator<Item = NodeKey> + '_ {
        self.nodes.keys().copied()
    }

    /// All edges, ordered by `(from, to)`
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.nodes.values().flat_map(|adjacency| adjacency.values())
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(|adjacency| adjacency.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Incremental construction of a [`Graph`]
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: BTreeMap<NodeKey, Adjacency>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `key` as a node, leaving existing outgoing edges untouched
    pub fn ensure_node(&mut self, key: NodeKey) -> &mut Self {
        self.adjacency_mut(key);
        self
    }

    fn adjacency_mut(&mut self, key: NodeKey) -> &mut Adjacency {
        self.nodes.entry(key).or_default()
    }

    pub fn add_edge(&mut self, edge: Edge) -> Result<()> {
        if edge.cost <= 0 {
            return Err(TraceError::InvalidCost {
                from: edge.from,
                to: edge.to,
                cost: edge.cost,
            });
        }

        self.ensure_node(edge.to);
        match self.adjacency_mut(edge.from).entry(edge.to) {
            Entry::Occupied(_) => Err(TraceError::DuplicateEdge {
                from: edge.from,
                to: edge.to,
            }),
            Entry::Vacant(slot) => {
                slot.insert(edge);
                Ok(())
            }
        }
    }

    pub fn finish(self) -> Graph {
        let graph = Graph { nodes: self.nodes };
        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "graph_built"
        );
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(c: char) -> NodeKey {
        NodeKey::new(c).unwrap()
    }

    fn edge(from: char, to: char, cost: Cost) -> Edge {
        Edge::new(key(from), key(to), cost)
    }

    #[test]
    fn test_build_registers_both_endpoints() {
        let graph = Graph::build([edge('A', 'B', 5), edge('B', 'C', 4)]).unwrap();

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.contains(key('C')));
        assert!(graph.neighbors(key('C')).unwrap().is_empty());
    }

    #[test]
    fn test_build_rejects_duplicate_ordered_pair() {
        let err = Graph::build([edge('A', 'B', 5), edge('A', 'B', 9)]).unwrap_err();
        assert!(matches!(
            err,
            TraceError::DuplicateEdge { from, to } if from == key('A') && to == key('B')
        ));
    }

    #[test]
    fn test_build_accepts_reverse_pair() {
        let graph = Graph::build([edge('C', 'D', 8), edge('D', 'C', 4)]).unwrap();
        assert_eq!(graph.edge_cost(key('C'), key('D')), Some(8));
        assert_eq!(graph.edge_cost(key('D'), key('C')), Some(4));
    }

    #[test]
    fn test_build_rejects_non_positive_cost() {
        let err = Graph::build([edge('A', 'B', 0)]).unwrap_err();
        assert!(matches!(err, TraceError::InvalidCost { cost: 0, .. }));

        let err = Graph::build([edge('A', 'B', 3), edge('B', 'A', -2)]).unwrap_err();
        assert!(matches!(err, TraceError::InvalidCost { cost: -2, .. }));
    }

    #[test]
    fn test_neighbors_of_unknown_node_fails() {
        let graph = Graph::build([edge('A', 'B', 5)]).unwrap();
        let err = graph.neighbors(key('Z')).unwrap_err();
        assert!(matches!(err, TraceError::UnknownNode { node } if node == key('Z')));
    }

    #[test]
    fn test_neighbors_are_ordered_by_destination() {
        let graph =
            Graph::build([edge('A', 'E', 7), edge('A', 'B', 5), edge('A', 'D', 5)]).unwrap();
        let destinations: Vec<char> = graph
            .neighbors(key('A'))
            .unwrap()
            .keys()
            .map(|k| k.as_char())
            .collect();
        assert_eq!(destinations, vec!['B', 'D', 'E']);
    }

    #[test]
    fn test_edge_cost_absent_without_direct_edge() {
        let graph = Graph::build([edge('A', 'B', 5), edge('B', 'C', 4)]).unwrap();
        assert_eq!(graph.edge_cost(key('A'), key('B')), Some(5));
        assert_eq!(graph.edge_cost(key('A'), key('C')), None);
        assert_eq!(graph.edge_cost(key('Z'), key('A')), None);
    }

    #[test]
    fn test_ensure_node_keeps_existing_edges() {
        let mut builder = GraphBuilder::new();
        builder.add_edge(edge('A', 'B', 5)).unwrap();
        builder.ensure_node(key('A')).ensure_node(key('Q'));
        let graph = builder.finish();

        assert_eq!(graph.edge_cost(key('A'), key('B')), Some(5));
        assert!(graph.contains(key('Q')));
        assert!(graph.neighbors(key('Q')).unwrap().is_empty());
        let nodes: String = graph.nodes().map(|k| k.as_char()).collect();
        assert_eq!(nodes, "ABQ");
    }

    #[test]
    fn test_builder_edges_only_enter_through_add_edge() {
        let mut builder = GraphBuilder::new();
        builder.ensure_node(key('A'));
        assert!(builder.add_edge(edge('A', 'B', 0)).is_err());
        let graph = builder.finish();

        assert_eq!(graph.edge_count(), 0);
        assert!(!graph.contains(key('B')));
        // every edge target is a registered node
        let graph = Graph::build([edge('A', 'B', 5), edge('C', 'A', 2)]).unwrap();
        assert!(graph.edges().all(|e| graph.contains(e.to) && e.cost > 0));
    }

    #[test]
    fn test_empty_graph() {
        let graph = Graph::build(Vec::new()).unwrap();
        assert!(graph.is_empty());
        assert_eq!(graph.edges().count(), 0);
    }
}

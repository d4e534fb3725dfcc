use petgraph::graph::NodeIndex;
use petgraph::stable_graph::StableGraph;
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use routeplan_core::{EdgeRecord, Weight};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct Edge {
    pub source: String,
    pub target: String,
    pub weight: Weight,
}

/// Read access the shortest-path engine needs from a graph.
pub trait Adjacency {
    /// Every node id, in lexicographic order.
    fn node_ids(&self) -> Vec<&str>;

    /// Outgoing `(neighbor, weight)` pairs of `id`; empty for unknown ids.
    fn neighbors(&self, id: &str) -> Vec<(&str, Weight)>;
}

/// Directed road network keyed by location name.
///
/// Every edge endpoint is a node, so a destination that never appears as a
/// source is still present with no outgoing edges. Edges between the same
/// pair are kept once per distinct weight.
#[derive(Debug, Clone, Default)]
pub struct RoadGraph {
    graph: StableGraph<String, Weight>,
    node_indices: BTreeMap<String, NodeIndex>,
}

impl RoadGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = EdgeRecord>,
    {
        let mut graph = Self::new();
        graph.extend(edges);
        graph
    }

    /// Declares a node without edges. No-op if it already exists.
    pub fn add_node(&mut self, id: &str) {
        self.ensure_node(id);
    }

    pub fn add_edge(&mut self, source: &str, destination: &str, weight: Weight) {
        let src_idx = self.ensure_node(source);
        let dst_idx = self.ensure_node(destination);

        // Identical (destination, weight) pairs collapse into one edge
        if self
            .graph
            .edges_connecting(src_idx, dst_idx)
            .any(|e| *e.weight() == weight)
        {
            return;
        }

        self.graph.add_edge(src_idx, dst_idx, weight);
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.node_indices.contains_key(id)
    }

    /// Outgoing edges of `id` ordered by (target, weight). Empty for unknown ids.
    pub fn edges_from(&self, id: &str) -> Vec<Edge> {
        let mut edges: Vec<Edge> = self
            .neighbors(id)
            .into_iter()
            .map(|(target, weight)| Edge {
                source: id.to_string(),
                target: target.to_string(),
                weight,
            })
            .collect();
        edges.sort();
        edges
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.node_indices.keys().map(String::as_str)
    }

    pub fn node_count(&self) -> usize {
        self.node_indices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.node_indices.is_empty()
    }

    fn ensure_node(&mut self, id: &str) -> NodeIndex {
        if let Some(idx) = self.node_indices.get(id) {
            return *idx;
        }
        let idx = self.graph.add_node(id.to_string());
        self.node_indices.insert(id.to_string(), idx);
        idx
    }
}

impl Adjacency for RoadGraph {
    fn node_ids(&self) -> Vec<&str> {
        self.nodes().collect()
    }

    fn neighbors(&self, id: &str) -> Vec<(&str, Weight)> {
        let Some(idx) = self.node_indices.get(id) else {
            return Vec::new();
        };
        self.graph
            .edges_directed(*idx, Direction::Outgoing)
            .filter_map(|edge| {
                self.graph
                    .node_weight(edge.target())
                    .map(|target| (target.as_str(), *edge.weight()))
            })
            .collect()
    }
}

impl Extend<EdgeRecord> for RoadGraph {
    fn extend<I: IntoIterator<Item = EdgeRecord>>(&mut self, iter: I) {
        for edge in iter {
            self.add_edge(&edge.source, &edge.destination, edge.weight);
        }
    }
}

impl FromIterator<EdgeRecord> for RoadGraph {
    fn from_iter<I: IntoIterator<Item = EdgeRecord>>(iter: I) -> Self {
        Self::from_edges(iter)
    }
}

//! Single-source shortest paths over non-negative weights.
//!
//! The frontier is a `BTreeSet<(Weight, String)>`, so extraction order is by
//! distance and then by node id. Improved nodes are re-inserted rather than
//! decreased in place; entries whose distance no longer matches the node's
//! record are skipped when they come out.

use crate::graph::Adjacency;
use routeplan_core::Weight;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use thiserror::Error;
use tracing::{debug, trace};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// The frontier produced a node that has no distance record. Only possible
    /// when a graph reports neighbors it does not list as nodes.
    #[error("internal consistency failure: node '{node}' reached from '{source_node}' has no distance record")]
    MissingNode { node: String, source_node: String },
}

/// Best known distance to a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Distance {
    Finite(Weight),
    Infinite,
}

impl Distance {
    pub fn finite(self) -> Option<Weight> {
        match self {
            Distance::Finite(d) => Some(d),
            Distance::Infinite => None,
        }
    }

    pub fn is_finite(self) -> bool {
        matches!(self, Distance::Finite(_))
    }
}

/// Predecessor link plus the weight of the edge that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hop {
    pub node: String,
    pub weight: Weight,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistanceRecord {
    pub distance: Distance,
    pub predecessor: Option<Hop>,
}

impl DistanceRecord {
    fn origin() -> Self {
        Self {
            distance: Distance::Finite(0),
            predecessor: None,
        }
    }

    fn unreached() -> Self {
        Self {
            distance: Distance::Infinite,
            predecessor: None,
        }
    }
}

/// Outcome of one engine run: a record for every node of the graph.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    source: String,
    records: HashMap<String, DistanceRecord>,
}

impl ShortestPaths {
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn get(&self, id: &str) -> Option<&DistanceRecord> {
        self.records.get(id)
    }

    /// `Infinite` for unreached and unknown nodes alike.
    pub fn distance_to(&self, id: &str) -> Distance {
        self.records
            .get(id)
            .map(|r| r.distance)
            .unwrap_or(Distance::Infinite)
    }

    pub fn is_reached(&self, id: &str) -> bool {
        self.distance_to(id).is_finite()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Runs Dijkstra from `source` over `graph`.
///
/// An unknown `source` still runs: it gets its own zero-distance record and
/// every graph node stays unreached.
pub fn shortest_paths<G: Adjacency + ?Sized>(
    graph: &G,
    source: &str,
) -> Result<ShortestPaths, EngineError> {
    let mut records: HashMap<String, DistanceRecord> = graph
        .node_ids()
        .into_iter()
        .map(|id| (id.to_string(), DistanceRecord::unreached()))
        .collect();
    records.insert(source.to_string(), DistanceRecord::origin());

    let mut frontier: BTreeSet<(Weight, String)> = BTreeSet::new();
    frontier.insert((0, source.to_string()));

    let mut settled = 0usize;
    while let Some((dist, node)) = frontier.pop_first() {
        let Some(current) = records.get(&node).map(|r| r.distance) else {
            return Err(EngineError::MissingNode {
                node,
                source_node: source.to_string(),
            });
        };
        if current != Distance::Finite(dist) {
            trace!("Skipping stale frontier entry ({}, {})", dist, node);
            continue;
        }
        settled += 1;

        for (neighbor, weight) in graph.neighbors(&node) {
            let candidate = dist.saturating_add(weight);
            let Some(record) = records.get_mut(neighbor) else {
                return Err(EngineError::MissingNode {
                    node: neighbor.to_string(),
                    source_node: source.to_string(),
                });
            };
            if Distance::Finite(candidate) < record.distance {
                record.distance = Distance::Finite(candidate);
                record.predecessor = Some(Hop {
                    node: node.clone(),
                    weight,
                });
                frontier.insert((candidate, neighbor.to_string()));
            }
        }
    }

    debug!(
        "Shortest paths from '{}': settled {} of {} nodes",
        source,
        settled,
        records.len()
    );

    Ok(ShortestPaths {
        source: source.to_string(),
        records,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::RoadGraph;

    fn triangle() -> RoadGraph {
        let mut graph = RoadGraph::new();
        graph.add_edge("A", "B", 5);
        graph.add_edge("B", "C", 3);
        graph.add_edge("A", "C", 10);
        graph
    }

    #[test]
    fn test_prefers_cheaper_two_hop_route() {
        let paths = shortest_paths(&triangle(), "A").unwrap();
        assert_eq!(paths.distance_to("A"), Distance::Finite(0));
        assert_eq!(paths.distance_to("B"), Distance::Finite(5));
        assert_eq!(paths.distance_to("C"), Distance::Finite(8));
        let hop = paths.get("C").unwrap().predecessor.clone().unwrap();
        assert_eq!(hop, Hop { node: "B".to_string(), weight: 3 });
    }

    #[test]
    fn test_unreachable_nodes_stay_infinite() {
        let paths = shortest_paths(&triangle(), "C").unwrap();
        assert_eq!(paths.distance_to("A"), Distance::Infinite);
        assert!(paths.get("A").unwrap().predecessor.is_none());
        assert_eq!(paths.len(), 3);
    }

    #[test]
    fn test_unknown_source_leaves_everything_unreached() {
        let paths = shortest_paths(&triangle(), "Z").unwrap();
        assert_eq!(paths.len(), 4);
        assert_eq!(paths.distance_to("Z"), Distance::Finite(0));
        for id in ["A", "B", "C"] {
            assert!(!paths.is_reached(id));
        }
    }

    #[test]
    fn test_parallel_edges_use_cheapest_weight() {
        let mut graph = RoadGraph::new();
        graph.add_edge("A", "B", 9);
        graph.add_edge("A", "B", 4);
        let paths = shortest_paths(&graph, "A").unwrap();
        let record = paths.get("B").unwrap();
        assert_eq!(record.distance, Distance::Finite(4));
        assert_eq!(record.predecessor.as_ref().unwrap().weight, 4);
    }

    #[test]
    fn test_tie_keeps_first_settled_predecessor() {
        // A->B->D and A->C->D both cost 2; B settles before C.
        let mut graph = RoadGraph::new();
        graph.add_edge("A", "C", 1);
        graph.add_edge("A", "B", 1);
        graph.add_edge("C", "D", 1);
        graph.add_edge("B", "D", 1);
        let paths = shortest_paths(&graph, "A").unwrap();
        assert_eq!(paths.get("D").unwrap().predecessor.as_ref().unwrap().node, "B");
    }

    #[test]
    fn test_zero_weight_cycle_terminates() {
        let mut graph = RoadGraph::new();
        graph.add_edge("A", "B", 0);
        graph.add_edge("B", "A", 0);
        graph.add_edge("B", "C", 2);
        let paths = shortest_paths(&graph, "A").unwrap();
        assert_eq!(paths.distance_to("C"), Distance::Finite(2));
    }

    struct Dangling;

    impl Adjacency for Dangling {
        fn node_ids(&self) -> Vec<&str> {
            vec!["A"]
        }

        fn neighbors(&self, id: &str) -> Vec<(&str, Weight)> {
            if id == "A" {
                vec![("ghost", 1)]
            } else {
                Vec::new()
            }
        }
    }

    #[test]
    fn test_neighbor_without_record_is_fatal() {
        let err = shortest_paths(&Dangling, "A").unwrap_err();
        assert_eq!(
            err,
            EngineError::MissingNode {
                node: "ghost".to_string(),
                source_node: "A".to_string(),
            }
        );
    }
}

//! Road graph, single-source shortest paths and route reconstruction.

pub mod dijkstra;
pub mod graph;
pub mod path;

pub use dijkstra::{shortest_paths, Distance, DistanceRecord, EngineError, Hop, ShortestPaths};
pub use graph::{Adjacency, Edge, RoadGraph};
pub use path::reconstruct;

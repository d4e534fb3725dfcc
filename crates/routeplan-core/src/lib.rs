pub mod loader;
pub mod models;

pub use loader::{
    load_edges, load_queries, parse_edge_line, parse_query_line, read_edges, read_queries,
    LoadError, Parsed,
};
pub use models::{EdgeRecord, Leg, Query, RouteOutcome, RouteResult, Weight};

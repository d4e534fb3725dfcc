pub mod render;
pub mod resolver;

pub use render::{graph_to_json, render_graph, render_result, write_results};
pub use resolver::{resolve, ResolveError, ResolveStats, Resolver, ResolverOptions};

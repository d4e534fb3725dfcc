//! Batch resolution of (origin, destination) queries.

use itertools::Itertools;
use rayon::prelude::*;
use routeplan_config::EngineConfig;
use routeplan_core::{Query, RouteResult};
use routeplan_graph::{reconstruct, shortest_paths, Distance, EngineError, RoadGraph, ShortestPaths};
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, error, info, warn};

#[derive(Debug, Error)]
pub enum ResolveError {
    /// Broken graph invariant; the whole batch is abandoned.
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("failed to start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverOptions {
    pub cache_origins: bool,
    pub parallel: bool,
    /// 0 means rayon's global pool.
    pub threads: usize,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self::from(&EngineConfig::default())
    }
}

impl From<&EngineConfig> for ResolverOptions {
    fn from(config: &EngineConfig) -> Self {
        Self {
            cache_origins: config.cache_origins,
            parallel: config.parallel,
            threads: config.threads,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveStats {
    pub engine_runs: usize,
    pub cache_hits: usize,
    pub resolved: usize,
    pub unreachable: usize,
    pub no_connection_info: usize,
}

/// Resolves queries against one graph, caching a shortest-path run per origin.
pub struct Resolver<'g> {
    graph: &'g RoadGraph,
    options: ResolverOptions,
    cache: HashMap<String, ShortestPaths>,
    stats: ResolveStats,
}

impl<'g> Resolver<'g> {
    pub fn new(graph: &'g RoadGraph) -> Self {
        Self::with_options(graph, ResolverOptions::default())
    }

    /// `parallel` fills the origin cache, so it turns `cache_origins` on.
    pub fn with_options(graph: &'g RoadGraph, mut options: ResolverOptions) -> Self {
        if options.parallel && !options.cache_origins {
            warn!("Parallel resolution needs the origin cache; enabling cache_origins");
            options.cache_origins = true;
        }
        Self {
            graph,
            options,
            cache: HashMap::new(),
            stats: ResolveStats::default(),
        }
    }

    pub fn stats(&self) -> ResolveStats {
        self.stats
    }

    /// Resolves every query, returning results in input order.
    pub fn resolve(&mut self, queries: &[Query]) -> Result<Vec<RouteResult>, ResolveError> {
        if self.options.parallel {
            self.precompute(queries)?;
        }

        let results = queries
            .iter()
            .map(|query| self.resolve_one(query))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| {
                error!("Aborting batch: {}", e);
                e
            })?;

        info!(
            "Resolved {} queries: {} resolved, {} unreachable, {} without connection info ({} engine runs)",
            results.len(),
            self.stats.resolved,
            self.stats.unreachable,
            self.stats.no_connection_info,
            self.stats.engine_runs
        );
        Ok(results)
    }

    pub fn resolve_one(&mut self, query: &Query) -> Result<RouteResult, EngineError> {
        if !self.graph.has_node(&query.origin) || !self.graph.has_node(&query.destination) {
            self.stats.no_connection_info += 1;
            return Ok(RouteResult::no_connection_info(query));
        }

        let result = if self.options.cache_origins {
            let paths = self.cached_paths(&query.origin)?;
            classify(query, paths)
        } else {
            self.stats.engine_runs += 1;
            let paths = shortest_paths(self.graph, &query.origin)?;
            classify(query, &paths)
        };

        if result.is_resolved() {
            self.stats.resolved += 1;
        } else {
            self.stats.unreachable += 1;
        }
        Ok(result)
    }

    fn cached_paths(&mut self, origin: &str) -> Result<&ShortestPaths, EngineError> {
        if self.cache.contains_key(origin) {
            self.stats.cache_hits += 1;
        } else {
            debug!("Running shortest paths from '{}'", origin);
            let paths = shortest_paths(self.graph, origin)?;
            self.stats.engine_runs += 1;
            self.cache.insert(origin.to_string(), paths);
        }
        Ok(&self.cache[origin])
    }

    /// Fills the cache for every distinct origin of a well-formed query.
    fn precompute(&mut self, queries: &[Query]) -> Result<(), ResolveError> {
        let graph = self.graph;
        let origins: Vec<&str> = queries
            .iter()
            .filter(|q| graph.has_node(&q.origin) && graph.has_node(&q.destination))
            .map(|q| q.origin.as_str())
            .unique()
            .filter(|origin| !self.cache.contains_key(*origin))
            .collect();

        if origins.is_empty() {
            return Ok(());
        }
        debug!("Precomputing {} origins in parallel", origins.len());

        let run = || {
            origins
                .par_iter()
                .map(|origin| shortest_paths(graph, origin).map(|p| (origin.to_string(), p)))
                .collect::<Result<Vec<_>, EngineError>>()
        };
        let runs = if self.options.threads > 0 {
            rayon::ThreadPoolBuilder::new()
                .num_threads(self.options.threads)
                .build()?
                .install(run)?
        } else {
            run()?
        };

        self.stats.engine_runs += runs.len();
        self.cache.extend(runs);
        Ok(())
    }
}

/// Resolves `queries` with default options.
pub fn resolve(graph: &RoadGraph, queries: &[Query]) -> Result<Vec<RouteResult>, ResolveError> {
    Resolver::new(graph).resolve(queries)
}

fn classify(query: &Query, paths: &ShortestPaths) -> RouteResult {
    match paths.distance_to(&query.destination) {
        Distance::Infinite => RouteResult::unreachable(query),
        Distance::Finite(total) => {
            RouteResult::resolved(query, reconstruct(paths, &query.destination), total)
        }
    }
}

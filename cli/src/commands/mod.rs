pub mod resolve;
pub mod route;
pub mod show;
pub mod ui;

pub use resolve::{handle_resolve, ResolveArgs};
pub use route::{handle_route, RouteArgs};
pub use show::{handle_show, ShowArgs};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use routeplan_config::{Config, ConfigBuilder, OutputFormat, PartialConfig};
use routeplan_core::load_edges;
use routeplan_graph::RoadGraph;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "routeplan")]
#[command(about = "Least-cost route planning over a road graph")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (.toml, .yml, .yaml or .json)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve every query of a routes file and write the results
    Resolve(ResolveArgs),
    /// Print the road graph
    Show(ShowArgs),
    /// Resolve a single origin/destination pair
    Route(RouteArgs),
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum CliOutputFormat {
    Text,
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(f: CliOutputFormat) -> Self {
        match f {
            CliOutputFormat::Text => OutputFormat::Text,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}

/// Layers defaults, config file, environment and CLI `overrides`.
pub fn load_config(config_path: Option<&Path>, overrides: PartialConfig) -> Result<Config> {
    let builder = match config_path {
        Some(path) => ConfigBuilder::new().with_file(path),
        None => ConfigBuilder::new().with_default_file_in(Path::new(".")),
    };
    Ok(builder.with_env().with_config(overrides).build()?)
}

pub fn load_graph(roads: &Path) -> Result<RoadGraph> {
    let edges = load_edges(roads).context("loading road graph")?;
    let graph = RoadGraph::from_edges(edges.records);
    info!(
        "Graph has {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

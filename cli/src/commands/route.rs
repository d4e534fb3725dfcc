use super::{load_config, load_graph};
use anyhow::Result;
use clap::Args;
use routeplan_config::PartialConfig;
use routeplan_core::Query;
use routeplan_pipeline::{render_result, Resolver};
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub struct RouteArgs {
    /// Starting location
    pub origin: String,

    /// Target location
    pub destination: String,

    /// Edge list
    #[arg(long, value_name = "FILE")]
    pub roads: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn handle_route(args: RouteArgs, config_path: Option<&Path>) -> Result<()> {
    let mut overrides = PartialConfig::default();
    overrides.input.roads = args.roads;
    let config = load_config(config_path, overrides)?;
    let graph = load_graph(&config.input.roads)?;

    let query = Query::new(args.origin, args.destination);
    let result = Resolver::new(&graph).resolve_one(&query)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render_result(&result));
    }
    Ok(())
}

use super::{load_config, load_graph};
use anyhow::Result;
use clap::Args;
use routeplan_config::PartialConfig;
use routeplan_pipeline::{graph_to_json, render_graph};
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Edge list to display
    #[arg(long, value_name = "FILE")]
    pub roads: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn handle_show(args: ShowArgs, config_path: Option<&Path>) -> Result<()> {
    let mut overrides = PartialConfig::default();
    overrides.input.roads = args.roads;
    let config = load_config(config_path, overrides)?;
    let graph = load_graph(&config.input.roads)?;

    if args.json {
        println!("{}", graph_to_json(&graph)?);
    } else if graph.is_empty() {
        println!("No nodes found in {}", config.input.roads.display());
    } else {
        print!("{}", render_graph(&graph));
    }
    Ok(())
}

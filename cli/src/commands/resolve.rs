use super::{load_config, load_graph, ui, CliOutputFormat};
use anyhow::{Context, Result};
use clap::Args;
use dialoguer::Input;
use routeplan_config::{Config, PartialConfig};
use routeplan_core::load_queries;
use routeplan_pipeline::{render_graph, write_results, Resolver, ResolverOptions};
use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Args, Debug, Default)]
pub struct ResolveArgs {
    /// Edge list (`<source> <destination> <weight>` per line)
    #[arg(long, value_name = "FILE")]
    pub roads: Option<PathBuf>,

    /// Query list (`<origin> <destination>` per line)
    #[arg(long, value_name = "FILE")]
    pub routes: Option<PathBuf>,

    /// Result file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Result rendering
    #[arg(long, value_enum)]
    pub format: Option<CliOutputFormat>,

    /// Append to the result file instead of truncating it
    #[arg(long, overrides_with = "no_append")]
    pub append: bool,

    /// Truncate the result file even if the config says append
    #[arg(long, overrides_with = "append")]
    pub no_append: bool,

    /// Compute per-origin runs in parallel
    #[arg(long, overrides_with = "no_parallel")]
    pub parallel: bool,

    /// Resolve sequentially even if the config enables parallel runs
    #[arg(long, overrides_with = "parallel")]
    pub no_parallel: bool,

    /// Worker threads for --parallel
    #[arg(long)]
    pub threads: Option<usize>,

    /// Write results to stdout instead of the result file
    #[arg(long, conflicts_with_all = ["output", "append"])]
    pub stdout: bool,

    /// Ask for the three file names interactively
    #[arg(short, long)]
    pub interactive: bool,

    /// Print the loaded graph before resolving
    #[arg(long)]
    pub show_graph: bool,
}

impl ResolveArgs {
    /// Only the flags actually given end up set.
    fn overrides(&self) -> PartialConfig {
        let mut config = PartialConfig::default();
        config.input.roads = self.roads.clone();
        config.input.routes = self.routes.clone();
        config.output.path = self.output.clone();
        config.output.format = self.format.map(Into::into);
        config.output.append = switch(self.append, self.no_append);
        config.engine.parallel = switch(self.parallel, self.no_parallel);
        config.engine.threads = self.threads;
        config
    }
}

fn switch(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

pub fn handle_resolve(args: ResolveArgs, config_path: Option<&Path>) -> Result<()> {
    let mut config = load_config(config_path, args.overrides())?;

    if args.interactive {
        prompt_paths(&mut config, args.stdout)?;
    }

    let graph = load_graph(&config.input.roads)?;
    if args.show_graph {
        print!("{}", render_graph(&graph));
    }

    let queries = load_queries(&config.input.routes)
        .context("loading route queries")?
        .records;

    // Open the sink before resolving so a bad output path fails fast.
    let sink: Box<dyn Write> = if args.stdout {
        Box::new(io::stdout().lock())
    } else {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .append(config.output.append)
            .truncate(!config.output.append)
            .open(&config.output.path)
            .with_context(|| {
                format!(
                    "cannot open {} for writing results",
                    config.output.path.display()
                )
            })?;
        Box::new(file)
    };

    let mut resolver = Resolver::with_options(&graph, ResolverOptions::from(&config.engine));
    let results = resolver.resolve(&queries)?;

    write_results(BufWriter::new(sink), &results, config.output.format)
        .context("writing results")?;

    let stats = resolver.stats();
    info!("Resolver stats: {:?}", stats);
    if !args.stdout {
        ui::print_success(&format!(
            "{} routes written to {}",
            results.len(),
            config.output.path.display()
        ));
    }
    Ok(())
}

fn prompt_paths(config: &mut Config, skip_output: bool) -> Result<()> {
    config.input.roads = prompt_path(
        "Podaj nazwe pliku z polaczeniami drogowymi (graf)",
        &config.input.roads,
    )?;
    config.input.routes = prompt_path(
        "Podaj nazwe pliku z trasami do wyznaczenia",
        &config.input.routes,
    )?;
    if !skip_output {
        config.output.path = prompt_path("Podaj nazwe pliku wyjsciowego", &config.output.path)?;
    }
    Ok(())
}

fn prompt_path(prompt: &str, default: &Path) -> Result<PathBuf> {
    let answer: String = Input::new()
        .with_prompt(prompt)
        .default(default.display().to_string())
        .interact_text()
        .context("reading file name")?;
    Ok(PathBuf::from(answer.trim()))
}

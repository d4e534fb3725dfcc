mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{handle_resolve, handle_route, handle_show, ui, Cli, Commands};
use routeplan_config::{ConfigError, ErrorFormatter};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<ConfigError>() {
                Some(config_err) => eprintln!("{}", ErrorFormatter::new(config_err)),
                None => ui::print_error(&format!("{:#}", err)),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Resolve(args) => handle_resolve(args, config_path),
        Commands::Show(args) => handle_show(args, config_path),
        Commands::Route(args) => handle_route(args, config_path),
    }
}

/// Logs go to stderr; `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

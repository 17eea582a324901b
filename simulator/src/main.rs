use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use shared_resources::config::Config;

mod cli;
mod error;
mod modules;
mod utilities;

use cli::{Cli, Commands};
use error::SimError;

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match dispatch(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn dispatch(cli: Cli) -> Result<(), SimError> {
    match cli.command {
        Commands::Run { ticks, no_display } => {
            let config = match &cli.config {
                Some(path) => Config::from_file(path)?,
                None => Config::get()?,
            };
            modules::run(config, ticks, cli.index_base, cli.seed, !no_display)
        }
        Commands::Assign { input } => {
            let selector_config = modules::selector_config(cli.config.as_deref())?;
            let output = modules::assign(&input, &selector_config, cli.index_base, cli.seed)?;
            println!("{}", output);
            Ok(())
        }
    }
}

/// Logs go to stderr so the status tables on stdout stay intact.
fn setup_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

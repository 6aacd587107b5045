mod cli;
mod commands;
mod config;
mod error;
mod logging;

use crate::cli::Cli;
use crate::error::Result;
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    info!("xyzsort v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let app_config = config::build_app_config(&cli)?;
    debug!("Resolved configuration: {:?}", &app_config);

    let command_result = commands::reorder::run(&app_config);

    match &command_result {
        Ok(_) => info!("Command completed successfully."),
        Err(e) => error!("Command failed: {}", e),
    }

    command_result
}

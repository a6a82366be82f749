use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode, ColorChoice};

use ra_results::cli::{Args, Commands};
use ra_results::collectors::collector::ResultsCollector;
use ra_results::config::load_config;

fn main() -> Result<()> {
    // Parse arguments
    let args = Args::parse();

    // Initialize logging
    initialize_logging(args.verbose)?;

    run(args)
}

/// Initialize logging with the specified verbosity level
fn initialize_logging(verbose: bool) -> Result<()> {
    let log_level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    TermLogger::init(
        log_level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ).context("Failed to initialize logger")?;
    Ok(())
}

fn run(args: Args) -> Result<()> {
    let config = load_config(args.config.as_deref())?;

    match args.command {
        Commands::Pack(opts) => {
            let collector = ResultsCollector::run_pack(opts.into(), config)?;
            info!("Archive written to {}", collector.options().dst_path.display());
        }
        Commands::Calculate(opts) => {
            let collector = ResultsCollector::run_calculate(opts.into(), config)?;
            info!("Results written to {}", collector.results_path().display());
        }
        Commands::Show { directory } => {
            let data = ResultsCollector::get_results_data(&directory)?;
            let pretty = serde_json::to_string_pretty(&data)
                .context("Failed to format results")?;
            println!("{}", pretty);
        }
    }

    Ok(())
}

use clap::{Parser, Subcommand, Args as ClapArgs};
use std::path::PathBuf;

use crate::collectors::collector::CollectorOptions;

/// Command-line arguments for the ra-results tool.
///
/// The tool collects the outputs of one assembly run into `results.json`
/// and can bundle the referenced files into a single archive.
#[derive(Parser, Debug)]
#[clap(name = "ra-results", about = "Collect and package genome assembly run results")]
pub struct Args {
    /// Verbose logging
    #[clap(short, long, global = true)]
    pub verbose: bool,

    /// Path to configuration YAML file
    #[clap(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommands
    #[clap(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write results.json and pack every referenced file into an archive
    Pack(RunOpts),

    /// Write results.json only
    Calculate(RunOpts),

    /// Print the results.json of a run directory
    Show {
        /// Run directory holding results.json
        directory: PathBuf,
    },
}

/// Options describing one assembly run
#[derive(ClapArgs, Debug, Clone)]
pub struct RunOpts {
    /// Destination archive (tar.gz)
    #[clap(short, long, default_value = "results.tar.gz")]
    pub dst: PathBuf,

    /// Run directory containing the assembler outputs
    #[clap(short, long)]
    pub src: PathBuf,

    /// Spec file the run was configured with
    #[clap(long)]
    pub spec: PathBuf,

    /// Dataset the run was computed on
    #[clap(long)]
    pub dataset: PathBuf,
}

impl From<RunOpts> for CollectorOptions {
    fn from(opts: RunOpts) -> Self {
        CollectorOptions {
            dst_path: opts.dst,
            src_directory: opts.src,
            spec_file: opts.spec,
            dataset: opts.dataset,
        }
    }
}

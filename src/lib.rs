//! # ra-results
//!
//! Collects the outputs of a genome assembly run into a single results
//! manifest and optionally packages them into one distributable archive.
//!
//! ## Overview
//!
//! Given a run directory, ra-results:
//!
//! - stamps the report with the tool's revision and the creation time
//! - counts the lines of every `overlaps.*` file
//! - summarizes `unitigs_fast.fasta` and `contigs_fast.fasta` (count and the
//!   five largest sequence line sizes)
//! - records the assembly drawing, the dataset and the spec files it used
//! - writes everything to `results.json` inside the run directory
//! - in pack mode, bundles every referenced file into a `.tar.gz`
//!
//! ## Usage
//!
//! ```no_run
//! use ra_results::collectors::collector::{CollectorOptions, ResultsCollector};
//! use ra_results::config::load_config;
//! use std::path::PathBuf;
//!
//! # fn main() -> anyhow::Result<()> {
//! let options = CollectorOptions {
//!     dst_path: PathBuf::from("ecoli.tar.gz"),
//!     src_directory: PathBuf::from("/runs/ecoli"),
//!     spec_file: PathBuf::from("/runs/ecoli.spec"),
//!     dataset: PathBuf::from("/data/ecoli.fastq"),
//! };
//!
//! let collector = ResultsCollector::run_calculate(options, load_config(None)?)?;
//! println!("Report: {}", collector.results_path().display());
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`cli`]: Command-line interface definitions
//! - [`models`]: Report and statistics types
//! - [`collectors`]: The results collector and its enrichment steps
//! - [`config`]: Run configuration (YAML file and environment overrides)
//! - [`utils`]: External commands, packaging and report persistence
//! - [`constants`]: Well-known file names and naming rules

/// Command-line interface definitions and argument parsing
pub mod cli;

/// Core data models and structures
pub mod models;

/// Results collection for assembly runs
pub mod collectors;

/// Utility functions for packaging, commands and report files
pub mod utils;

/// Configuration management
pub mod config;

/// Application constants
pub mod constants;

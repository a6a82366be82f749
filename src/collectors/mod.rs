//! Results collection for assembly runs.
//!
//! ```text
//! run directory ──▶ ResultsCollector::calculate ──▶ results.json
//!                          │
//!                          └──▶ ResultsCollector::pack ──▶ staging dir ──▶ tar.gz
//! ```
//!
//! ## Usage Example
//!
//! ```no_run
//! use ra_results::collectors::collector::{CollectorOptions, ResultsCollector};
//! use ra_results::config::RunConfig;
//! use std::path::PathBuf;
//!
//! # fn example() -> anyhow::Result<()> {
//! let options = CollectorOptions {
//!     dst_path: PathBuf::from("/tmp/ecoli.tar.gz"),
//!     src_directory: PathBuf::from("/runs/ecoli"),
//!     spec_file: PathBuf::from("/runs/ecoli.spec"),
//!     dataset: PathBuf::from("/data/ecoli.fastq"),
//! };
//!
//! let collector = ResultsCollector::run_pack(options, RunConfig::default())?;
//! println!("Packed {} files", collector.included_files().len());
//! # Ok(())
//! # }
//! ```

/// Results collector and its enrichment steps
pub mod collector;

/// Sequence file length statistics
pub mod sequences;

/// Run directory listing
pub mod scan;

//! Utilities shared by the collector.
//!
//! ## Components
//!
//! - **Command**: the narrow seam used to run external programs
//! - **Compression**: staging and tar.gz packaging of the included files
//! - **Summary**: writing and reading `results.json`
//!
//! ## Reading a Finished Run
//!
//! ```no_run
//! use ra_results::utils::summary::read_results_data;
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! let data = read_results_data(Path::new("/runs/ecoli"))?;
//! println!("contigs: {}", data["contigs_count"]);
//! # Ok(())
//! # }
//! ```

/// External program execution
pub mod command;

/// Staging and archive creation
pub mod compress;

/// Results report persistence
pub mod summary;

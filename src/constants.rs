//! Global constants for the ra-results application.
//!
//! This module centralizes the file names and naming rules the collector
//! relies on when it inspects an assembly run directory.

// Run directory layout
/// Name of the report written into the source directory
pub const RESULTS_FILE_NAME: &str = "results.json";

/// Unitig sequences produced by the assembler
pub const UNITIGS_FILE_NAME: &str = "unitigs_fast.fasta";

/// Contig sequences produced by the assembler
pub const CONTIGS_FILE_NAME: &str = "contigs_fast.fasta";

/// Drawing of the assembly graph
pub const GENOME_DRAWING_FILE_NAME: &str = "genome.svg";

/// Prefix shared by every overlap file
pub const OVERLAPS_PREFIX: &str = "overlaps.";

/// Suffix shared by every run spec file
pub const SPEC_SUFFIX: &str = ".spec";

// Report constants
/// Number of largest sequence sizes recorded per sequence file
pub const TOP_SIZES: usize = 5;

/// Key suffix for overlap line counts (`overlaps.foo_count`)
pub const COUNT_KEY_SUFFIX: &str = "_count";

// Packaging constants
/// Prefix of the temporary staging directory used while packing
pub const STAGING_DIR_PREFIX: &str = "ra_results_";

/// Default program used to look up the tool's own revision
pub const DEFAULT_GIT_PROGRAM: &str = "git";

/// Default program used to build the archive
pub const DEFAULT_TAR_PROGRAM: &str = "tar";

// Environment overrides
/// Overrides the directory staging copies are created in
pub const ENV_STAGING_DIR: &str = "RA_RESULTS_STAGING_DIR";

/// Overrides the directory the revision is looked up in
pub const ENV_REVISION_DIR: &str = "RA_RESULTS_REVISION_DIR";

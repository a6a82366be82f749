//! Length statistics for FASTA-like assembler output.
//!
//! The assembler writes one header line followed by one sequence line per
//! record, so every even-numbered line (1-based) carries sequence data. A data
//! line's size is its length in bytes *including* its line terminator, which
//! is how the run reports have always measured it.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::SequenceStats;

/// Sizes of the data lines of `reader`, in file order
pub fn data_line_sizes<R: BufRead>(mut reader: R) -> Result<Vec<u64>> {
    let mut sizes = Vec::new();
    let mut line = Vec::new();
    let mut line_number = 0usize;

    loop {
        line.clear();
        let read = reader.read_until(b'\n', &mut line)
            .context("Failed to read sequence line")?;
        if read == 0 {
            break;
        }

        line_number += 1;
        if line_number % 2 == 0 {
            sizes.push(read as u64);
        }
    }

    Ok(sizes)
}

/// The `k` largest sizes in descending order; equal sizes keep file order
pub fn top_sizes(sizes: &[u64], k: usize) -> Vec<u64> {
    let mut sorted = sizes.to_vec();
    // stable sort, ties stay in original order
    sorted.sort_by(|a, b| b.cmp(a));
    sorted.truncate(k);
    sorted
}

/// Summarize the data lines of `reader`
pub fn summarize<R: BufRead>(reader: R, k: usize) -> Result<SequenceStats> {
    let sizes = data_line_sizes(reader)?;
    Ok(SequenceStats {
        count: sizes.len(),
        top_sizes: top_sizes(&sizes, k),
    })
}

/// Summarize the data lines of the sequence file at `path`
pub fn summarize_file(path: &Path, k: usize) -> Result<SequenceStats> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    summarize(BufReader::new(file), k)
        .with_context(|| format!("Failed to summarize {}", path.display()))
}

/// Number of lines in `reader`; a trailing fragment without a terminator counts
pub fn count_lines<R: Read>(reader: R) -> Result<u64> {
    let mut reader = BufReader::new(reader);
    let mut line = Vec::new();
    let mut count = 0u64;

    loop {
        line.clear();
        let read = reader.read_until(b'\n', &mut line)
            .context("Failed to read line")?;
        if read == 0 {
            break;
        }
        count += 1;
    }

    Ok(count)
}

/// Number of lines in the file at `path`
pub fn count_file_lines(path: &Path) -> Result<u64> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    count_lines(file)
        .with_context(|| format!("Failed to count lines of {}", path.display()))
}

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use log::info;
use serde_json::Value;

use crate::constants::RESULTS_FILE_NAME;
use crate::models::Report;

/// Path of the report inside a run directory
pub fn results_path(directory: &Path) -> PathBuf {
    directory.join(RESULTS_FILE_NAME)
}

/// Serialize the report as pretty-printed JSON
pub fn render_report(report: &Report) -> Result<String> {
    serde_json::to_string_pretty(report).context("Failed to serialize results report to JSON")
}

/// Write the report to `path`, replacing any previous report
pub fn write_report(report: &Report, path: &Path) -> Result<()> {
    let json = render_report(report)?;

    fs::write(path, json)
        .with_context(|| format!("Failed to write results report to {}", path.display()))?;

    info!("Results report written to {}", path.display());
    Ok(())
}

/// Read `results.json` from a run directory as untyped JSON.
///
/// # Errors
///
/// Fails when `directory` is not a directory, when it holds no
/// `results.json`, or when that file is not valid JSON.
pub fn read_results_data(directory: &Path) -> Result<Value> {
    if !directory.is_dir() {
        bail!("'{}' is not a directory", directory.display());
    }

    let path = results_path(directory);
    if !path.is_file() {
        bail!("File '{}' does not exist", path.display());
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {} as JSON", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_then_read_back() {
        let dir = TempDir::new().unwrap();
        let mut report = Report::new(PathBuf::from("run.spec"), PathBuf::from("reads.fq"));
        report.set_metric("contigs_count", 3);
        report.included_files.push(results_path(dir.path()));

        write_report(&report, &results_path(dir.path())).unwrap();
        let data = read_results_data(dir.path()).unwrap();

        assert_eq!(data["contigs_count"], 3);
        assert_eq!(data["spec_file"], "run.spec");
    }

    #[test]
    fn test_write_overwrites_previous_report() {
        let dir = TempDir::new().unwrap();
        let path = results_path(dir.path());
        fs::write(&path, "stale").unwrap();

        let report = Report::new(PathBuf::from("a"), PathBuf::from("b"));
        write_report(&report, &path).unwrap();

        assert_eq!(read_results_data(dir.path()).unwrap()["dataset"], "b");
    }

    #[test]
    fn test_read_rejects_non_directory() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("plain.txt");
        fs::write(&file, "x").unwrap();

        let err = read_results_data(&file).unwrap_err().to_string();
        assert!(err.contains("is not a directory"), "unexpected error: {}", err);
    }

    #[test]
    fn test_read_missing_results_file() {
        let dir = TempDir::new().unwrap();

        let err = read_results_data(dir.path()).unwrap_err().to_string();
        assert!(err.contains("does not exist"), "unexpected error: {}", err);
    }

    #[test]
    fn test_read_invalid_json() {
        let dir = TempDir::new().unwrap();
        fs::write(results_path(dir.path()), "{ not json").unwrap();

        assert!(read_results_data(dir.path()).is_err());
    }

    #[test]
    fn test_render_is_pretty() {
        let report = Report::new(PathBuf::from("a"), PathBuf::from("b"));
        let json = render_report(&report).unwrap();
        assert!(json.contains('\n'));
    }
}

use std::path::PathBuf;

use serde::{Serialize, Deserialize};
use serde_json::{Map, Value};

/// The results manifest written to `results.json`.
///
/// Header fields come first, followed by the per-run metrics in the order the
/// collector recorded them, and `included_files` always last.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Report {
    pub spec_file: PathBuf,
    pub dataset: PathBuf,
    #[serde(default)]
    pub commit_sha1: String,
    #[serde(default)]
    pub report_created_at: String,
    #[serde(flatten)]
    pub metrics: Map<String, Value>,
    #[serde(default)]
    pub included_files: Vec<PathBuf>,
}

impl Report {
    pub fn new(spec_file: PathBuf, dataset: PathBuf) -> Self {
        Self {
            spec_file,
            dataset,
            commit_sha1: String::new(),
            report_created_at: String::new(),
            metrics: Map::new(),
            included_files: Vec::new(),
        }
    }

    /// Record a numeric metric, replacing any earlier value under the same key
    pub fn set_metric(&mut self, key: impl Into<String>, value: u64) {
        self.metrics.insert(key.into(), Value::from(value));
    }

    pub fn metric(&self, key: &str) -> Option<u64> {
        self.metrics.get(key).and_then(Value::as_u64)
    }
}

/// Length summary of the data lines of a sequence file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceStats {
    /// Number of data lines
    pub count: usize,
    /// Largest data line sizes, descending
    pub top_sizes: Vec<u64>,
}

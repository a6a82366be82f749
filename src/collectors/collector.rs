use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use chrono::Local;
use log::{info, warn, debug};

use crate::collectors::scan::{entries_with_prefix, entries_with_suffix};
use crate::collectors::sequences::{count_file_lines, summarize_file};
use crate::config::RunConfig;
use crate::constants::{
    CONTIGS_FILE_NAME,
    COUNT_KEY_SUFFIX,
    GENOME_DRAWING_FILE_NAME,
    OVERLAPS_PREFIX,
    SPEC_SUFFIX,
    TOP_SIZES,
    UNITIGS_FILE_NAME,
};
use crate::models::Report;
use crate::utils::command::{path_arg, SystemRunner, ToolRunner};
use crate::utils::compress::pack_files;
use crate::utils::summary::{read_results_data, results_path, write_report};

/// Inputs of one collector run
#[derive(Debug, Clone, PartialEq)]
pub struct CollectorOptions {
    /// Archive written by [`ResultsCollector::pack`]
    pub dst_path: PathBuf,
    /// Assembly run directory that is inspected and receives `results.json`
    pub src_directory: PathBuf,
    /// Run spec file, included when it exists
    pub spec_file: PathBuf,
    /// Dataset the run was computed on; must exist
    pub dataset: PathBuf,
}

/// Naming of the metrics derived from one sequence file
struct SequenceMetric {
    file_name: &'static str,
    count_key: &'static str,
    size_key_stem: &'static str,
    label: &'static str,
}

const UNITIGS: SequenceMetric = SequenceMetric {
    file_name: UNITIGS_FILE_NAME,
    count_key: "unitigs_count",
    size_key_stem: "unitig",
    label: "unitigs",
};

const CONTIGS: SequenceMetric = SequenceMetric {
    file_name: CONTIGS_FILE_NAME,
    count_key: "contigs_count",
    size_key_stem: "contig",
    label: "contigs",
};

/// Builds the results report of an assembly run and packages the files it
/// references.
///
/// One collector serves one invocation. [`calculate`](Self::calculate) runs
/// every enrichment step and writes `results.json`; [`pack`](Self::pack) then
/// bundles every included file into the destination archive. Calling
/// `calculate` twice appends the included files a second time.
pub struct ResultsCollector {
    options: CollectorOptions,
    config: RunConfig,
    runner: Box<dyn ToolRunner>,
    report: Report,
    included_files: Vec<PathBuf>,
}

impl ResultsCollector {
    pub fn new(options: CollectorOptions, config: RunConfig) -> Self {
        Self::with_runner(options, config, Box::new(SystemRunner))
    }

    /// Create a collector that runs external programs through `runner`
    pub fn with_runner(options: CollectorOptions, config: RunConfig, runner: Box<dyn ToolRunner>) -> Self {
        let report = Report::new(options.spec_file.clone(), options.dataset.clone());
        Self {
            options,
            config,
            runner,
            report,
            included_files: Vec::new(),
        }
    }

    /// Compute the report, write it and package everything it references
    pub fn run_pack(options: CollectorOptions, config: RunConfig) -> Result<Self> {
        let mut collector = Self::new(options, config);
        collector.calculate()?.pack()?;
        Ok(collector)
    }

    /// Compute the report and write it to the source directory
    pub fn run_calculate(options: CollectorOptions, config: RunConfig) -> Result<Self> {
        let mut collector = Self::new(options, config);
        collector.calculate()?;
        Ok(collector)
    }

    /// Read a previously written `results.json` from `path`
    pub fn get_results_data(path: &Path) -> Result<serde_json::Value> {
        read_results_data(path)
    }

    pub fn options(&self) -> &CollectorOptions {
        &self.options
    }

    pub fn report(&self) -> &Report {
        &self.report
    }

    pub fn included_files(&self) -> &[PathBuf] {
        &self.included_files
    }

    /// Location of the report inside the source directory
    pub fn results_path(&self) -> PathBuf {
        results_path(&self.options.src_directory)
    }

    /// Run all enrichment steps and write `results.json`.
    ///
    /// Missing optional inputs are logged and skipped. A missing dataset
    /// aborts the run before anything is written.
    pub fn calculate(&mut self) -> Result<&mut Self> {
        info!("Collecting results from {}", self.options.src_directory.display());

        self.write_commit();
        self.write_date();
        self.write_overlaps_info()?;
        self.write_sequence_info(&UNITIGS)?;
        self.write_sequence_info(&CONTIGS)?;
        self.include_drawn_assembly();
        self.include_dataset()?;
        self.include_spec_files()?;

        self.write_data()?;
        Ok(self)
    }

    /// Bundle every included file into the destination archive
    pub fn pack(&mut self) -> Result<&mut Self> {
        if self.included_files.is_empty() {
            bail!("Nothing to pack: no files were included, run calculate first");
        }

        pack_files(
            &self.included_files,
            &self.options.dst_path,
            &self.config.staging_root,
            &self.config.tar_program,
            &*self.runner,
        )?;

        Ok(self)
    }

    fn include(&mut self, path: PathBuf) {
        debug!("Including {}", path.display());
        self.included_files.push(path);
    }

    fn write_commit(&mut self) {
        let args = vec![
            OsString::from("-C"),
            path_arg(&self.config.revision_dir),
            OsString::from("rev-parse"),
            OsString::from("HEAD"),
        ];

        self.report.commit_sha1 = match self.runner.run(&self.config.git_program, &args) {
            Ok(output) => {
                if !output.success() {
                    debug!("Revision lookup exited with {:?}: {}", output.code, output.stderr.trim());
                }
                output.stdout.trim().to_string()
            }
            Err(e) => {
                warn!("Could not look up revision: {}", e);
                String::new()
            }
        };
    }

    fn write_date(&mut self) {
        self.report.report_created_at = Local::now().to_rfc3339();
    }

    fn write_overlaps_info(&mut self) -> Result<()> {
        for entry in entries_with_prefix(&self.options.src_directory, OVERLAPS_PREFIX)? {
            if !entry.path.is_file() {
                warn!("{} does not exist, skipping", entry.path.display());
                continue;
            }

            let lines = count_file_lines(&entry.path)?;
            self.include(entry.path);
            self.report.set_metric(format!("{}{}", entry.name, COUNT_KEY_SUFFIX), lines);
        }
        Ok(())
    }

    fn write_sequence_info(&mut self, metric: &SequenceMetric) -> Result<()> {
        let path = self.options.src_directory.join(metric.file_name);
        if !path.is_file() {
            warn!("{} does not exist, skipping {} info", path.display(), metric.label);
            return Ok(());
        }

        let stats = summarize_file(&path, TOP_SIZES)?;
        self.include(path);

        self.report.set_metric(metric.count_key, stats.count as u64);
        for (rank, size) in stats.top_sizes.iter().enumerate() {
            self.report.set_metric(format!("{}_{}_size", metric.size_key_stem, rank + 1), *size);
        }
        Ok(())
    }

    fn include_drawn_assembly(&mut self) {
        let path = self.options.src_directory.join(GENOME_DRAWING_FILE_NAME);
        if !path.is_file() {
            warn!("{} does not exist, skipping", path.display());
            return;
        }
        self.include(path);
    }

    fn include_dataset(&mut self) -> Result<()> {
        if !self.options.dataset.is_file() {
            bail!("File '{}' does not exist", self.options.dataset.display());
        }
        self.include(self.options.dataset.clone());
        Ok(())
    }

    fn include_spec_files(&mut self) -> Result<()> {
        if self.options.spec_file.is_file() {
            self.include(self.options.spec_file.clone());
        } else {
            debug!("Spec file {} not found, not including it", self.options.spec_file.display());
        }

        for entry in entries_with_suffix(&self.options.src_directory, SPEC_SUFFIX)? {
            if !entry.path.is_file() {
                warn!("{} does not exist, skipping", entry.path.display());
                continue;
            }
            self.include(entry.path);
        }
        Ok(())
    }

    fn write_data(&mut self) -> Result<()> {
        let path = self.results_path();
        self.included_files.push(path.clone());
        self.report.included_files = self.included_files.clone();

        write_report(&self.report, &path)
    }
}

use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, bail, Context, Result};
use log::{info, debug};
use uuid::Uuid;

use crate::constants::STAGING_DIR_PREFIX;
use crate::utils::command::{path_arg, ToolRunner};

/// Temporary directory the included files are flattened into before archiving.
///
/// The name combines the current Unix time with a random UUID so concurrent
/// packaging runs never share a staging directory.
#[derive(Debug)]
pub struct StagingDir {
    path: PathBuf,
}

impl StagingDir {
    /// Create a fresh staging directory under `root`
    pub fn create(root: &Path) -> Result<Self> {
        let seconds = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let name = format!("{}{}_{}", STAGING_DIR_PREFIX, seconds, Uuid::new_v4().simple());
        let path = root.join(name);

        fs::create_dir(&path)
            .with_context(|| format!("Failed to create staging directory {}", path.display()))?;

        debug!("Created staging directory {}", path.display());
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Copy `file` into the staging directory under its basename.
    ///
    /// A file with the same basename staged earlier is overwritten. Returns the
    /// basename used.
    pub fn stage(&self, file: &Path) -> Result<OsString> {
        let name = file.file_name()
            .ok_or_else(|| anyhow!("Cannot stage {}: path has no file name", file.display()))?;

        fs::copy(file, self.path.join(name))
            .with_context(|| format!("Failed to copy {} into {}", file.display(), self.path.display()))?;

        Ok(name.to_os_string())
    }

    /// Delete the staging directory and everything in it
    pub fn remove(self) -> Result<()> {
        fs::remove_dir_all(&self.path)
            .with_context(|| format!("Failed to remove staging directory {}", self.path.display()))?;
        debug!("Removed staging directory {}", self.path.display());
        Ok(())
    }
}

/// Bundle `files` into a gzip-compressed tar archive at `dst_path`.
///
/// Files are copied into a fresh staging directory under `staging_root` and
/// archived by their basenames only, so the archive has no directory
/// structure. The staging directory is removed whether or not archiving
/// succeeded. Any copy, archive or cleanup failure fails the whole operation.
///
/// # Arguments
///
/// * `files` - Files to bundle, in manifest order
/// * `dst_path` - Archive to create
/// * `staging_root` - Directory the staging directory is created in
/// * `tar_program` - Program invoked to build the archive
/// * `runner` - Executes `tar_program`
pub fn pack_files(
    files: &[PathBuf],
    dst_path: &Path,
    staging_root: &Path,
    tar_program: &str,
    runner: &dyn ToolRunner,
) -> Result<PathBuf> {
    let start = Instant::now();
    let dst_path = absolute_path(dst_path)?;

    let staging = StagingDir::create(staging_root)?;
    let archived = stage_and_archive(&staging, files, &dst_path, tar_program, runner);
    let cleanup = staging.remove();

    archived?;
    cleanup?;

    info!("Packed {} files into {} in {:?}", files.len(), dst_path.display(), start.elapsed());
    Ok(dst_path)
}

fn stage_and_archive(
    staging: &StagingDir,
    files: &[PathBuf],
    dst_path: &Path,
    tar_program: &str,
    runner: &dyn ToolRunner,
) -> Result<()> {
    let mut names: Vec<OsString> = Vec::with_capacity(files.len());
    for file in files {
        let name = staging.stage(file)?;
        if !names.contains(&name) {
            names.push(name);
        }
    }

    let args = tar_arguments(staging.path(), dst_path, &names);
    let output = runner.run(tar_program, &args)?;
    if !output.success() {
        bail!(
            "{} failed to create {} (exit code {:?}): {}",
            tar_program,
            dst_path.display(),
            output.code,
            output.stderr.trim()
        );
    }

    Ok(())
}

/// Arguments for `tar` to archive `names` from `staging` into `dst_path`.
///
/// Names follow a `--` so a basename starting with `-` is never read as an
/// option.
pub fn tar_arguments(staging: &Path, dst_path: &Path, names: &[OsString]) -> Vec<OsString> {
    let mut args = vec![
        OsString::from("-C"),
        path_arg(staging),
        OsString::from("-czf"),
        path_arg(dst_path),
        OsString::from("--"),
    ];
    args.extend(names.iter().cloned());
    args
}

fn absolute_path(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = env::current_dir().context("Failed to resolve current directory")?;
    Ok(cwd.join(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::command::{CommandOutput, MockToolRunner};
    use tempfile::TempDir;

    fn entries(dir: &Path) -> Vec<PathBuf> {
        fs::read_dir(dir).unwrap().map(|e| e.unwrap().path()).collect()
    }

    #[test]
    fn test_staging_dirs_are_unique() {
        let root = TempDir::new().unwrap();

        let first = StagingDir::create(root.path()).unwrap();
        let second = StagingDir::create(root.path()).unwrap();

        assert_ne!(first.path(), second.path());
        let name = first.path().file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with(STAGING_DIR_PREFIX));
    }

    #[test]
    fn test_stage_flattens_and_overwrites() {
        let root = TempDir::new().unwrap();
        let src = TempDir::new().unwrap();
        fs::create_dir_all(src.path().join("a")).unwrap();
        fs::create_dir_all(src.path().join("b")).unwrap();
        fs::write(src.path().join("a/same.txt"), "first").unwrap();
        fs::write(src.path().join("b/same.txt"), "second").unwrap();

        let staging = StagingDir::create(root.path()).unwrap();
        assert_eq!(staging.stage(&src.path().join("a/same.txt")).unwrap(), "same.txt");
        assert_eq!(staging.stage(&src.path().join("b/same.txt")).unwrap(), "same.txt");

        let content = fs::read_to_string(staging.path().join("same.txt")).unwrap();
        assert_eq!(content, "second");

        staging.remove().unwrap();
        assert!(entries(root.path()).is_empty());
    }

    #[test]
    fn test_tar_arguments_layout() {
        let args = tar_arguments(
            Path::new("/tmp/stage"),
            Path::new("/out/run.tar.gz"),
            &[OsString::from("a.txt"), OsString::from("results.json")],
        );

        assert_eq!(args, vec!["-C", "/tmp/stage", "-czf", "/out/run.tar.gz", "--", "a.txt", "results.json"]);
    }

    #[test]
    fn test_tar_arguments_dash_names_follow_separator() {
        let args = tar_arguments(
            Path::new("/tmp/stage"),
            Path::new("/out/run.tar.gz"),
            &[OsString::from("-reads.fastq"), OsString::from("--exclude=results.json.spec")],
        );

        let separator = args.iter().position(|a| a == "--").unwrap();
        assert_eq!(separator, 4);
        assert_eq!(args[separator + 1..], ["-reads.fastq", "--exclude=results.json.spec"]);
    }

    #[test]
    fn test_pack_files_passes_unique_basenames() {
        let root = TempDir::new().unwrap();
        let src = TempDir::new().unwrap();
        fs::create_dir_all(src.path().join("nested")).unwrap();
        fs::write(src.path().join("a.txt"), "a").unwrap();
        fs::write(src.path().join("nested/a.txt"), "a2").unwrap();
        fs::write(src.path().join("b.txt"), "b").unwrap();

        let files = vec![
            src.path().join("a.txt"),
            src.path().join("b.txt"),
            src.path().join("nested/a.txt"),
        ];
        let dst = src.path().join("out.tar.gz");

        let mut runner = MockToolRunner::new();
        runner.expect_run()
            .withf(|program, args| {
                program == "tar" && args[2] == "-czf" && args[4] == "--" && args[5..] == ["a.txt", "b.txt"]
            })
            .times(1)
            .returning(|_, _| Ok(CommandOutput { code: Some(0), ..Default::default() }));

        let packed = pack_files(&files, &dst, root.path(), "tar", &runner).unwrap();

        assert_eq!(packed, dst);
        assert!(entries(root.path()).is_empty(), "staging directory should be removed");
    }

    #[test]
    fn test_pack_files_tar_failure_is_fatal_and_cleans_up() {
        let root = TempDir::new().unwrap();
        let src = TempDir::new().unwrap();
        fs::write(src.path().join("a.txt"), "a").unwrap();

        let mut runner = MockToolRunner::new();
        runner.expect_run()
            .times(1)
            .returning(|_, _| Ok(CommandOutput {
                code: Some(2),
                stdout: String::new(),
                stderr: "tar: cannot open".to_string(),
            }));

        let result = pack_files(
            &[src.path().join("a.txt")],
            &src.path().join("out.tar.gz"),
            root.path(),
            "tar",
            &runner,
        );

        let err = result.unwrap_err().to_string();
        assert!(err.contains("tar: cannot open"), "unexpected error: {}", err);
        assert!(entries(root.path()).is_empty(), "staging directory should be removed");
    }

    #[test]
    fn test_pack_files_missing_input_is_fatal() {
        let root = TempDir::new().unwrap();
        let src = TempDir::new().unwrap();

        let mut runner = MockToolRunner::new();
        runner.expect_run().times(0);

        let result = pack_files(
            &[src.path().join("missing.txt")],
            &src.path().join("out.tar.gz"),
            root.path(),
            "tar",
            &runner,
        );

        assert!(result.is_err());
        assert!(entries(root.path()).is_empty());
    }

    #[test]
    fn test_pack_files_missing_staging_root() {
        let src = TempDir::new().unwrap();
        let runner = MockToolRunner::new();

        let result = pack_files(
            &[],
            &src.path().join("out.tar.gz"),
            &src.path().join("no/such/root"),
            "tar",
            &runner,
        );

        assert!(result.is_err());
    }
}

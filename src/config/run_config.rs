use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;
use serde::{Serialize, Deserialize};

use crate::config::env_vars::expand_env_vars;
use crate::constants::{
    DEFAULT_GIT_PROGRAM,
    DEFAULT_TAR_PROGRAM,
    ENV_REVISION_DIR,
    ENV_STAGING_DIR,
};

/// Settings that control where the collector stages files and which
/// external programs it calls.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct RunConfig {
    /// Directory the packaging staging directory is created in
    pub staging_root: PathBuf,
    /// Source tree whose revision is stamped into the report
    pub revision_dir: PathBuf,
    pub git_program: String,
    pub tar_program: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            staging_root: env::temp_dir(),
            revision_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")),
            git_program: DEFAULT_GIT_PROGRAM.to_string(),
            tar_program: DEFAULT_TAR_PROGRAM.to_string(),
        }
    }
}

impl RunConfig {
    /// Load configuration from a YAML file; missing keys keep their defaults
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: RunConfig = serde_yaml::from_str(&content)
            .context("Failed to parse YAML config")?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Apply `RA_RESULTS_*` environment overrides
    pub fn apply_env_overrides(&mut self) {
        if let Ok(dir) = env::var(ENV_STAGING_DIR) {
            debug!("{} overrides staging root with {}", ENV_STAGING_DIR, dir);
            self.staging_root = PathBuf::from(dir);
        }
        if let Ok(dir) = env::var(ENV_REVISION_DIR) {
            debug!("{} overrides revision directory with {}", ENV_REVISION_DIR, dir);
            self.revision_dir = PathBuf::from(dir);
        }
    }

    /// Expand `$VAR` references in configured paths
    pub fn expand_paths(&mut self) {
        self.staging_root = expand_path(&self.staging_root);
        self.revision_dir = expand_path(&self.revision_dir);
    }
}

fn expand_path(path: &Path) -> PathBuf {
    PathBuf::from(expand_env_vars(&path.to_string_lossy()))
}

/// Build the run configuration.
///
/// Values are resolved in this order, later ones winning:
/// 1. Built-in defaults
/// 2. The YAML file at `config_path`, when given (it must exist)
/// 3. `RA_RESULTS_STAGING_DIR` / `RA_RESULTS_REVISION_DIR`
pub fn load_config(config_path: Option<&Path>) -> Result<RunConfig> {
    let mut config = match config_path {
        Some(path) => RunConfig::from_yaml_file(path)?,
        None => RunConfig::default(),
    };

    config.apply_env_overrides();
    config.expand_paths();
    Ok(config)
}

use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result};
use log::debug;

#[cfg(test)]
use mockall::automock;

/// Captured result of an external tool invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` when the process was terminated by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Narrow seam over external programs so collection logic can run without
/// shelling out.
#[cfg_attr(test, automock)]
pub trait ToolRunner {
    /// Run `program` with `args`, wait for it and capture its output.
    ///
    /// An `Err` means the program could not be started at all; a non-zero exit
    /// is reported through [`CommandOutput::code`].
    fn run(&self, program: &str, args: &[OsString]) -> Result<CommandOutput>;
}

/// [`ToolRunner`] backed by [`std::process::Command`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl ToolRunner for SystemRunner {
    fn run(&self, program: &str, args: &[OsString]) -> Result<CommandOutput> {
        debug!("Running {} {:?}", program, args);

        let output = Command::new(program)
            .args(args)
            .output()
            .with_context(|| format!("Failed to execute {} command", program))?;

        Ok(CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Convert a path into a command argument, keeping its exact bytes
pub fn path_arg(path: &Path) -> OsString {
    path.as_os_str().to_os_string()
}

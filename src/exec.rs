//! Checked invocation of external tools.
//!
//! Every subprocess the generator starts goes through [`CommandRunner`],
//! which distinguishes a program that could not be launched from one
//! that ran and exited non-zero. Both abort generation.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::process::Command;

use log::debug;

use crate::error::{Error, Result};

pub trait CommandRunner {
    /// Runs `program` with `args` inside `cwd`, waiting for completion.
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<()>;
}

/// Runs commands through `std::process::Command`.
#[derive(Debug, Default)]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<()> {
        debug!("running {} {:?} in {}", program, args, cwd.display());
        let status = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .status()
            .map_err(|source| Error::CommandLaunchError {
                program: program.to_string(),
                source,
            })?;
        if !status.success() {
            return Err(Error::CommandFailedError { program: program.to_string(), status });
        }
        Ok(())
    }
}

/// A single invocation captured by [`RecordingCommandRunner`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

/// Test double that records invocations instead of running them.
///
/// Optionally fails a named program with a simulated non-zero exit so
/// error paths can be exercised without real tools installed.
#[derive(Debug, Default)]
pub struct RecordingCommandRunner {
    calls: RefCell<Vec<RecordedCall>>,
    fail_program: Option<String>,
}

impl RecordingCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every invocation of `program` report a non-zero exit.
    pub fn failing_for(program: &str) -> Self {
        Self { calls: RefCell::new(Vec::new()), fail_program: Some(program.to_string()) }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for RecordingCommandRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<()> {
        self.calls.borrow_mut().push(RecordedCall {
            program: program.to_string(),
            args: args.iter().map(|s| s.to_string()).collect(),
            cwd: cwd.to_path_buf(),
        });
        if self.fail_program.as_deref() == Some(program) {
            return Err(Error::CommandFailedError {
                program: program.to_string(),
                status: simulated_failure_status(),
            });
        }
        Ok(())
    }
}

#[cfg(unix)]
fn simulated_failure_status() -> std::process::ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    std::process::ExitStatus::from_raw(256)
}

#[cfg(windows)]
fn simulated_failure_status() -> std::process::ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    std::process::ExitStatus::from_raw(1)
}

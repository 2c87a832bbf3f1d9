use crate::error::MultishellError;
use crate::executor::{format_report, Shell};
use std::io::Write;
use std::path::{Path, PathBuf};

/// How a command ended in one directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionStatus {
    Exited(i32),
    /// Killed by a signal, no exit code available
    Terminated,
    MissingDirectory,
    SpawnFailed(String),
}

/// Outcome of running one command in one directory
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    pub directory: PathBuf,
    pub status: ExecutionStatus,
    pub stdout: String,
    pub stderr: String,
}

impl ExecutionResult {
    pub fn is_success(&self) -> bool {
        self.status == ExecutionStatus::Exited(0)
    }

    fn without_output(directory: &Path, status: ExecutionStatus) -> Self {
        Self {
            directory: directory.to_path_buf(),
            status,
            stdout: String::new(),
            stderr: String::new(),
        }
    }
}

/// Tally of one command across the directory list
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub succeeded: usize,
    pub failed: usize,
    /// Remaining directories were skipped after a failure
    pub stopped_early: bool,
}

impl RunSummary {
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RunOptions {
    /// Print captured output for successful directories too
    pub verbose: bool,
    /// Visit every directory even after one fails
    pub keep_executing: bool,
}

/// Runs a command in each directory, one at a time, in list order
pub struct DirectoryRunner {
    shell: Shell,
    directories: Vec<PathBuf>,
    options: RunOptions,
}

impl DirectoryRunner {
    pub fn new(shell: Shell, directories: Vec<PathBuf>, options: RunOptions) -> Self {
        Self {
            shell,
            directories,
            options,
        }
    }

    pub fn directories(&self) -> &[PathBuf] {
        &self.directories
    }

    pub fn options(&self) -> RunOptions {
        self.options
    }

    /// Run `command` across all directories, writing one report per directory to `out`.
    pub fn run<W: Write>(&self, command: &str, out: &mut W) -> Result<RunSummary, MultishellError> {
        let mut summary = RunSummary::default();

        for (index, directory) in self.directories.iter().enumerate() {
            let result = self.execute(command, directory);
            writeln!(out, "{}", format_report(&result, self.options.verbose))?;

            if result.is_success() {
                summary.succeeded += 1;
                continue;
            }

            summary.failed += 1;
            if !self.options.keep_executing {
                let skipped = self.directories.len() - index - 1;
                if skipped > 0 {
                    log::debug!("Stopping after failure, skipping {} directories", skipped);
                    summary.stopped_early = true;
                }
                break;
            }
        }

        out.flush()?;
        Ok(summary)
    }

    /// Run `command` in a single directory. Never fails: problems become a status.
    pub fn execute(&self, command: &str, directory: &Path) -> ExecutionResult {
        if !directory.is_dir() {
            log::debug!("Directory not found: {}", directory.display());
            return ExecutionResult::without_output(directory, ExecutionStatus::MissingDirectory);
        }

        log::debug!(
            "Executing in {} via {}: {}",
            directory.display(),
            self.shell.program(),
            command
        );

        let output = match self.shell.command(command, directory).output() {
            Ok(output) => output,
            Err(e) => {
                log::debug!("Failed to spawn {}: {}", self.shell.program(), e);
                return ExecutionResult::without_output(
                    directory,
                    ExecutionStatus::SpawnFailed(e.to_string()),
                );
            }
        };

        let status = match output.status.code() {
            Some(code) => ExecutionStatus::Exited(code),
            None => ExecutionStatus::Terminated,
        };

        ExecutionResult {
            directory: directory.to_path_buf(),
            status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

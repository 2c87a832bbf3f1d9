use crate::error::MultishellError;
use crate::executor::{DirectoryRunner, RunSummary};
use anyhow::Result;
use colored::Colorize;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Totals across every command of a script
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub commands_run: usize,
    pub commands_total: usize,
    pub failed_directories: usize,
}

impl BatchSummary {
    pub fn has_failures(&self) -> bool {
        self.failed_directories > 0
    }

    fn add(&mut self, run: &RunSummary) {
        self.commands_run += 1;
        self.failed_directories += run.failed;
    }
}

/// Entry point for --batch-file. Returns false when any directory failed.
pub fn run(runner: &DirectoryRunner, script_path: &Path) -> Result<bool> {
    let commands = read_script(script_path)?;
    log::info!(
        "Running {} command(s) from {}",
        commands.len(),
        script_path.display()
    );

    let mut stdout = io::stdout().lock();
    let summary = run_commands(runner, &commands, &mut stdout)?;

    if summary.commands_run < summary.commands_total {
        writeln!(
            stdout,
            "{}",
            format!(
                "Stopped after {} of {} commands (use --continue to keep going)",
                summary.commands_run, summary.commands_total
            )
            .yellow()
        )?;
    }

    Ok(!summary.has_failures())
}

pub fn read_script(path: &Path) -> Result<Vec<String>, MultishellError> {
    let content = fs::read_to_string(path).map_err(|source| MultishellError::ScriptFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_script(&content))
}

/// One command per line. A leading `#!` line is dropped, blank lines are skipped.
pub fn parse_script(content: &str) -> Vec<String> {
    let mut lines = content.lines().peekable();

    if lines.peek().is_some_and(|first| first.starts_with("#!")) {
        lines.next();
    }

    lines
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty())
        .map(String::from)
        .collect()
}

/// Run each command across all directories, printing a marker before each one.
/// Stops at the first failing command unless the runner keeps executing.
pub fn run_commands<W: Write>(
    runner: &DirectoryRunner,
    commands: &[String],
    out: &mut W,
) -> Result<BatchSummary, MultishellError> {
    let mut summary = BatchSummary {
        commands_total: commands.len(),
        ..Default::default()
    };

    for command in commands {
        writeln!(out, "{}", format!("▶ {}", command).bright_cyan().bold())?;
        let run = runner.run(command, out)?;
        summary.add(&run);

        if run.has_failures() && !runner.options().keep_executing {
            break;
        }
    }

    Ok(summary)
}

use crate::executor::{DirectoryRunner, RunSummary};
use crate::signal_handler::{AppState, SignalHandler};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

pub const PROMPT: &str = "multishell$ ";
const QUIT_MESSAGE: &str = "Quit";

/// Read-eval loop. Ends on end-of-input or interrupt, never on a failing command.
pub fn run(runner: &DirectoryRunner) -> Result<()> {
    log::debug!(
        "Interactive mode across {} directories",
        runner.directories().len()
    );

    // Runs on the signal thread, so stdout is never held locked across a read
    let signals = SignalHandler::start(|| {
        let _ = write_quit(&mut io::stdout());
    })?;

    let stdin = io::stdin();
    run_lines(runner, stdin.lock(), &mut io::stdout(), Some(&signals))
}

/// Prompt, read a line, run it; repeat until end of input
pub fn run_lines<R: BufRead, W: Write>(
    runner: &DirectoryRunner,
    mut input: R,
    out: &mut W,
    signals: Option<&SignalHandler>,
) -> Result<()> {
    let set_state = |state| {
        if let Some(signals) = signals {
            signals.set_app_state(state);
        }
    };
    let mut line = String::new();

    loop {
        set_state(AppState::WaitingForInput);
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            write_quit(out)?;
            return Ok(());
        }

        set_state(AppState::ExecutingCommand);
        execute_line(runner, &line, out)?;
    }
}

/// The quit message goes on its own line, below the pending prompt
fn write_quit<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", QUIT_MESSAGE)?;
    out.flush()
}

fn execute_line<W: Write>(runner: &DirectoryRunner, line: &str, out: &mut W) -> Result<()> {
    let command = line.trim();
    if command.is_empty() {
        return Ok(());
    }

    let summary = runner.run(command, out)?;
    report_early_stop(&summary, out)?;
    Ok(())
}

fn report_early_stop<W: Write>(summary: &RunSummary, out: &mut W) -> io::Result<()> {
    if summary.stopped_early {
        writeln!(
            out,
            "{}",
            "Stopped at first failure (use --continue to keep going)".yellow()
        )?;
    }
    Ok(())
}

use crate::executor::{ExecutionResult, ExecutionStatus};
use colored::Colorize;

const NONE_MARKER: &str = "(None)";
const INDENT: &str = "    ";

/// Render the report for one directory.
///
/// Captured output is shown for every failure, and for successes only when
/// `verbose` is set.
pub fn format_report(result: &ExecutionResult, verbose: bool) -> String {
    let directory = result.directory.display().to_string();
    let success = result.is_success();

    let mut report = if success {
        format!("✅ {}", directory.bold().green())
    } else {
        format!(
            "❌ {} {}",
            directory.bold().red(),
            format!("({})", failure_reason(&result.status)).red()
        )
    };

    if !success || verbose {
        report.push('\n');
        report.push_str(&format_stream("stdout", &result.stdout));
        report.push('\n');
        report.push_str(&format_stream("stderr", &result.stderr));
    }

    report
}

fn failure_reason(status: &ExecutionStatus) -> String {
    match status {
        ExecutionStatus::Exited(code) => format!("exit code {}", code),
        ExecutionStatus::Terminated => "terminated by signal".to_string(),
        ExecutionStatus::MissingDirectory => "directory not found".to_string(),
        ExecutionStatus::SpawnFailed(message) => format!("failed to start: {}", message),
    }
}

fn format_stream(label: &str, text: &str) -> String {
    let trimmed = text.trim();
    let body = if trimmed.is_empty() {
        NONE_MARKER.dimmed().to_string()
    } else {
        trimmed.replace('\n', &format!("\n{}{}", INDENT, INDENT))
    };
    format!("{}{} {}", INDENT, format!("{}:", label).dimmed(), body)
}

pub mod report;
pub mod runner;
pub mod shell;

pub use report::format_report;
pub use runner::{DirectoryRunner, ExecutionResult, ExecutionStatus, RunOptions, RunSummary};
pub use shell::Shell;

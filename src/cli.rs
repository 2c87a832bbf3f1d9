use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "multishell")]
#[command(author, version, long_about = None)]
#[command(about = "Interactive shell to run commands in multiple directories")]
pub struct Cli {
    /// List of comma-separated directories
    #[arg(short, long, value_name = "LIST")]
    pub directories: Option<String>,

    /// File containing a list of directories, one per line
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Use every subdirectory of the current directory
    #[arg(short, long)]
    pub all: bool,

    /// File of commands to run non-interactively, one per line
    #[arg(
        short = 'b',
        long = "batch-file",
        value_name = "PATH",
        visible_short_alias = 's',
        visible_alias = "script"
    )]
    pub batch_file: Option<PathBuf>,

    /// Keep executing in the remaining directories after a failure
    #[arg(short = 'c', long = "continue")]
    pub keep_executing: bool,

    /// Print command output for successful directories too
    #[arg(short, long)]
    pub verbose: bool,

    /// Shell used to run commands [default: sh, cmd on Windows]
    #[arg(long, value_name = "PROGRAM")]
    pub shell: Option<String>,

    /// Path to config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

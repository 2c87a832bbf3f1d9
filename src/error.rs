use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MultishellError {
    #[error("No directories! Pass --directories, --file or --all, or list them in the config file")]
    NoDirectories,

    #[error("Shell not found in PATH: {0}")]
    ShellNotFound(String),

    #[error("Failed to read directory list {path}: {source}")]
    DirectoryFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read script {path}: {source}")]
    ScriptFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

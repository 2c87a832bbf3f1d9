mod cli;
mod commands;
mod config;
mod directories;
mod error;
mod executor;
mod signal_handler;
mod utils;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use config::{load_config_auto, validate_config};
use directories::{resolve_directories, DirectorySources};
use executor::{DirectoryRunner, RunOptions, Shell};
use std::path::Path;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    // Setup logging, RUST_LOG overrides the default level
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    let (config_path, mut config) = load_config_auto(cli.config.as_deref())?;
    if let Some(path) = &config_path {
        log::info!("Loaded config from: {}", path.display());
    }

    config.merge_flags(cli.keep_executing, cli.verbose, cli.shell.as_deref());
    validate_config(&config)?;

    let sources = DirectorySources {
        list: cli.directories.as_deref(),
        file: cli.file.as_deref(),
        all_in: cli.all.then_some(Path::new(".")),
    };
    let directories = resolve_directories(&sources, &config.directories)?;

    let shell = match &config.settings.shell {
        Some(program) => Shell::from_program(program),
        None => Shell::platform_default(),
    };
    let runner = DirectoryRunner::new(
        shell,
        directories,
        RunOptions {
            verbose: config.settings.verbose,
            keep_executing: config.settings.keep_executing,
        },
    );

    match &cli.batch_file {
        Some(script) => {
            if !commands::batch::run(&runner, script)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        None => commands::interactive::run(&runner)?,
    }

    Ok(ExitCode::SUCCESS)
}

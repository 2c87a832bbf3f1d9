use super::Config;
use crate::error::MultishellError;
use anyhow::Result;

/// Validate config for correctness
pub fn validate_config(config: &Config) -> Result<()> {
    validate_shell(config)?;
    validate_directories(config)?;
    Ok(())
}

/// A configured shell must be resolvable before any command runs
fn validate_shell(config: &Config) -> Result<()> {
    if let Some(shell) = &config.settings.shell {
        if !crate::utils::command_exists(shell) {
            return Err(MultishellError::ShellNotFound(shell.clone()).into());
        }
    }
    Ok(())
}

fn validate_directories(config: &Config) -> Result<()> {
    if let Some(index) = config.directories.iter().position(|d| d.trim().is_empty()) {
        anyhow::bail!("Config directory entry #{} is blank", index + 1);
    }
    Ok(())
}

use super::Config;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "multishell.toml";

/// Find config file in order of priority:
/// 1. Explicit --config flag path
/// 2. ./multishell.toml (current directory)
/// 3. ~/.config/multishell/multishell.toml
/// 4. ~/.multishell.toml
///
/// Unlike an explicit path, a missing discovered file is not an error.
pub fn find_config_file(explicit_path: Option<&Path>) -> Result<Option<PathBuf>> {
    // 1. Explicit path
    if let Some(path) = explicit_path {
        if path.exists() {
            return Ok(Some(path.to_path_buf()));
        }
        anyhow::bail!("Config file not found: {}", path.display());
    }

    // 2. Current directory
    let cwd_config = PathBuf::from(".").join(CONFIG_FILE_NAME);
    if cwd_config.exists() {
        return Ok(Some(cwd_config));
    }

    // 3. ~/.config/multishell/multishell.toml
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("multishell").join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    // 4. ~/.multishell.toml
    if let Some(home_dir) = dirs::home_dir() {
        let home_config = home_dir.join(format!(".{}", CONFIG_FILE_NAME));
        if home_config.exists() {
            return Ok(Some(home_config));
        }
    }

    Ok(None)
}

/// Load and parse config file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML config: {}", path.display()))?;

    Ok(config)
}

/// Load config with automatic discovery, falling back to defaults
pub fn load_config_auto(explicit_path: Option<&Path>) -> Result<(Option<PathBuf>, Config)> {
    match find_config_file(explicit_path)? {
        Some(path) => {
            let config = load_config(&path)?;
            Ok((Some(path), config))
        }
        None => Ok((None, Config::default())),
    }
}

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,

    /// Used only when no directory source is given on the command line
    #[serde(default)]
    pub directories: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub keep_executing: bool,

    #[serde(default)]
    pub verbose: bool,

    #[serde(default)]
    pub shell: Option<String>,
}

impl Config {
    /// Overlay command-line flags on top of file settings.
    /// Boolean flags can only switch a setting on; `--shell` replaces the configured shell.
    pub fn merge_flags(&mut self, keep_executing: bool, verbose: bool, shell: Option<&str>) {
        self.settings.keep_executing |= keep_executing;
        self.settings.verbose |= verbose;
        if let Some(shell) = shell {
            self.settings.shell = Some(shell.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config: Config = toml::from_str(
            r#"
directories = ["api", "web"]

[settings]
keep_executing = true
verbose = true
shell = "bash"
"#,
        )
        .unwrap();

        assert_eq!(config.directories, vec!["api", "web"]);
        assert!(config.settings.keep_executing);
        assert!(config.settings.verbose);
        assert_eq!(config.settings.shell.as_deref(), Some("bash"));
    }

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();

        assert!(config.directories.is_empty());
        assert!(!config.settings.keep_executing);
        assert!(!config.settings.verbose);
        assert!(config.settings.shell.is_none());
    }

    #[test]
    fn test_merge_flags() {
        let mut config = Config::default();
        config.settings.verbose = true;
        config.settings.shell = Some("zsh".to_string());

        config.merge_flags(true, false, Some("bash"));

        assert!(config.settings.keep_executing);
        // A flag that is not passed never switches a file setting off
        assert!(config.settings.verbose);
        assert_eq!(config.settings.shell.as_deref(), Some("bash"));
    }
}

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::translate::DEFAULT_INDENT_WIDTH;

pub const CONFIG_FILE_NAME: &str = ".pfdrc.json";

pub const MAX_INDENT_WIDTH: usize = 16;

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Program that runs generated files for `--compile-and-execute`.
    #[serde(default = "default_interpreter")]
    pub interpreter: String,
    #[serde(default = "default_indent_width")]
    pub indent_width: usize,
}

fn default_interpreter() -> String {
    "python3".to_string()
}

fn default_indent_width() -> usize {
    DEFAULT_INDENT_WIDTH
}

impl Default for Config {
    fn default() -> Self {
        Self {
            interpreter: default_interpreter(),
            indent_width: default_indent_width(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.interpreter.trim().is_empty() {
            bail!("'interpreter' must not be empty");
        }
        if !(1..=MAX_INDENT_WIDTH).contains(&self.indent_width) {
            bail!(
                "'indentWidth' must be between 1 and {}, got {}",
                MAX_INDENT_WIDTH,
                self.indent_width
            );
        }
        Ok(())
    }
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Where the config came from, or `None` when using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            config
                .validate()
                .with_context(|| format!("Invalid config file: {}", path.display()))?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}

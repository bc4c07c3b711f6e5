use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".langsyncrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Folder holding one `<code>.xml` file per language.
    #[serde(default = "default_lang_root", alias = "langDir")]
    pub lang_root: String,
    /// Reference language that other languages are synchronized against.
    #[serde(default = "default_source_code")]
    pub source_code: String,
    /// Leave phrases already flagged with `REMOVE ME` alone on later runs.
    #[serde(default)]
    pub idempotent: bool,
}

fn default_lang_root() -> String {
    "./umbraco/config/lang".to_string()
}

fn default_source_code() -> String {
    "en".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lang_root: default_lang_root(),
            source_code: default_source_code(),
            idempotent: false,
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.lang_root.trim().is_empty() {
            anyhow::bail!("'langRoot' must not be empty");
        }
        if self.source_code.trim().is_empty() {
            anyhow::bail!("'sourceCode' must not be empty");
        }
        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
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
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}

use std::{env, path::PathBuf};

use anyhow::{Context as _, Result};

use super::super::args::CommonArgs;
use crate::config::{CONFIG_FILE_NAME, Config, load_config};
use crate::dictionary::Registry;

/// Configuration and registry shared by the language commands.
pub struct LangContext {
    pub config: Config,
    pub lang_root: PathBuf,
    pub registry: Registry,
    pub verbose: bool,
}

impl LangContext {
    /// Load the config file (if any), apply command line overrides and open
    /// the language folder.
    pub fn new(args: &CommonArgs) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to read the current directory")?;
        let config_result = load_config(&cwd)?;

        // In verbose mode, inform user if using default config
        if args.verbose && !config_result.from_file {
            eprintln!(
                "Note: No {} found, using default configuration",
                CONFIG_FILE_NAME
            );
        }

        let config = config_result.config;
        let lang_root = args
            .lang_root
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.lang_root));

        let registry = Registry::open(&lang_root).with_context(|| {
            format!(
                "Language folder not found: {} (set langRoot in {} or pass --lang-root)",
                lang_root.display(),
                CONFIG_FILE_NAME
            )
        })?;

        Ok(Self {
            config,
            lang_root,
            registry,
            verbose: args.verbose,
        })
    }
}

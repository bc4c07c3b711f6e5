//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `list`: List the language files found in the language folder
//! - `show`: Print the areas of a language, or the phrases of one area
//! - `sync`: Annotate a language with the keys it lacks or no longer needs
//! - `new`: Create an empty language file
//! - `init`: Initialize langsync configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::List(cmd)) => cmd.common.verbose,
            Some(Command::Show(cmd)) => cmd.common.verbose,
            Some(Command::Sync(cmd)) => cmd.common.verbose,
            Some(Command::New(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Language folder (overrides config file)
    #[arg(long, env = "LANGSYNC_LANG_ROOT")]
    pub lang_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ListCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Language code, e.g. `da`
    pub code: String,

    /// Print the phrases of this area instead of the area list
    #[arg(long)]
    pub area: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct SyncCommand {
    /// Language to annotate
    pub destination: String,

    /// Reference language (overrides config file)
    #[arg(long)]
    pub source: Option<String>,

    /// Actually write the annotated language (default is dry-run)
    #[arg(long)]
    pub apply: bool,

    /// Write to this file instead of overwriting the destination
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Do not re-flag phrases already marked with REMOVE ME
    #[arg(long)]
    pub idempotent: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct NewCommand {
    /// Code of the new language, also its file name
    pub code: String,

    /// Language name in English
    #[arg(long)]
    pub int_name: String,

    /// Language name in the language itself (defaults to --int-name)
    #[arg(long)]
    pub local_name: Option<String>,

    /// Culture tag, e.g. `da-DK`
    #[arg(long)]
    pub culture: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List available languages
    List(ListCommand),
    /// Show the areas or phrases of a language
    Show(ShowCommand),
    /// Mark keys to translate or remove so a language matches the reference language
    Sync(SyncCommand),
    /// Create an empty language file
    New(NewCommand),
    /// Initialize a new .langsyncrc.json configuration file
    Init,
}

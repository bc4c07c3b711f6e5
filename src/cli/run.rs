//! Dispatches parsed arguments to the matching command handler.
//!
//! # Returns
//! - `Ok(CommandResult)` with the summary to print and any problems found
//! - `Err` if the command fails (e.g., language folder missing, write errors)

use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{
        CommandResult, init::init, list::list, new::new_language, show::show, sync::sync,
    },
};

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::List(cmd)) => list(cmd),
        Some(Command::Show(cmd)) => show(cmd),
        Some(Command::Sync(cmd)) => sync(cmd),
        Some(Command::New(cmd)) => new_language(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}

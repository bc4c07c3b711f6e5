use anyhow::{Context, Result};

use super::super::args::NewCommand;
use super::context::LangContext;
use super::{CommandResult, CommandSummary, NewSummary};
use crate::dictionary::Dictionary;

pub fn new_language(cmd: NewCommand) -> Result<CommandResult> {
    let ctx = LangContext::new(&cmd.common)?;
    let path = ctx.registry.path_for(&cmd.code);

    if path.exists() {
        let problem = format!("{} already exists", path.display());
        return Ok(CommandResult::new(CommandSummary::New(NewSummary {
            code: cmd.code,
            path,
            created: false,
        }))
        .with_problem(problem));
    }

    let local_name = cmd.local_name.unwrap_or_else(|| cmd.int_name.clone());
    let dict = Dictionary::new(cmd.code.clone(), cmd.int_name, local_name, cmd.culture);
    dict.save_to(&path)
        .with_context(|| format!("Failed to create language file: {}", path.display()))?;

    Ok(CommandResult::new(CommandSummary::New(NewSummary {
        code: cmd.code,
        path,
        created: true,
    })))
}

use anyhow::Result;

use super::super::args::ListCommand;
use super::context::LangContext;
use super::{CommandResult, CommandSummary, LanguageInfo, ListEntry, ListSummary};
use crate::dictionary::Dictionary;

pub fn list(cmd: ListCommand) -> Result<CommandResult> {
    let mut ctx = LangContext::new(&cmd.common)?;
    let codes = ctx.registry.list_codes()?;

    let mut entries = Vec::with_capacity(codes.len());
    let mut problems = Vec::new();

    for code in codes {
        let language = ctx.registry.get(&code).map(language_info);
        if language.is_none() {
            // The registry only reports absence; load once more to tell the user why.
            let reason = match Dictionary::load(ctx.registry.path_for(&code)) {
                Err(err) => format!("{:#}", anyhow::Error::from(err)),
                Ok(_) => format!("Language '{}' could not be loaded", code),
            };
            problems.push(reason);
        }
        entries.push(ListEntry { code, language });
    }

    let mut result = CommandResult::new(CommandSummary::List(ListSummary {
        lang_root: ctx.lang_root,
        entries,
    }));
    result.problems = problems;
    Ok(result)
}

fn language_info(dict: &Dictionary) -> LanguageInfo {
    let areas = dict.areas();
    let key_count = areas
        .iter()
        .map(|area| dict.keys(area).map(|keys| keys.len()).unwrap_or_default())
        .sum();

    LanguageInfo {
        int_name: dict.int_name.clone(),
        local_name: dict.local_name.clone(),
        culture: dict.culture.clone(),
        area_count: areas.len(),
        key_count,
    }
}

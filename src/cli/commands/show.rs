use anyhow::Result;

use super::super::args::ShowCommand;
use super::context::LangContext;
use super::{CommandResult, CommandSummary, ShowSummary, ShowView};

pub fn show(cmd: ShowCommand) -> Result<CommandResult> {
    let mut ctx = LangContext::new(&cmd.common)?;
    let code = cmd.code;

    let Some(dict) = ctx.registry.get(&code) else {
        let problem = format!("Language '{}' not found or unreadable", code);
        return Ok(
            CommandResult::new(CommandSummary::Show(ShowSummary { code, view: None }))
                .with_problem(problem),
        );
    };

    let view = match cmd.area {
        Some(area) => match dict.keys(&area) {
            Ok(keys) => {
                let phrases = keys
                    .into_iter()
                    .map(|key| (key.to_string(), dict.raw_phrase(&area, key).to_string()))
                    .collect();
                ShowView::Phrases { area, phrases }
            }
            Err(err) => {
                return Ok(
                    CommandResult::new(CommandSummary::Show(ShowSummary { code, view: None }))
                        .with_problem(err.to_string()),
                );
            }
        },
        None => ShowView::Areas(
            dict.areas()
                .into_iter()
                .map(|area| {
                    let count = dict.keys(area).map(|keys| keys.len()).unwrap_or_default();
                    (area.to_string(), count)
                })
                .collect(),
        ),
    };

    Ok(CommandResult::new(CommandSummary::Show(ShowSummary {
        code,
        view: Some(view),
    })))
}

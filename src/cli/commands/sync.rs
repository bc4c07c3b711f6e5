use anyhow::{Context, Result};

use super::super::args::SyncCommand;
use super::context::LangContext;
use super::{Annotation, AnnotationKind, CommandResult, CommandSummary, SyncSummary};
use crate::dictionary::{Dictionary, REMOVE_PREFIX, SyncMode, SyncReport, TRANSLATE_PREFIX};

pub fn sync(cmd: SyncCommand) -> Result<CommandResult> {
    let mut ctx = LangContext::new(&cmd.common)?;
    let source_code = cmd
        .source
        .clone()
        .unwrap_or_else(|| ctx.config.source_code.clone());
    let mode = if cmd.idempotent || ctx.config.idempotent {
        SyncMode::Idempotent
    } else {
        SyncMode::Accumulate
    };

    let mut summary = SyncSummary {
        source: source_code.clone(),
        destination: cmd.destination.clone(),
        report: SyncReport::default(),
        annotations: Vec::new(),
        is_apply: cmd.apply,
        target: None,
    };

    if source_code == cmd.destination {
        return Ok(
            CommandResult::new(CommandSummary::Sync(summary)).with_problem(format!(
                "Source and destination are the same language ('{}')",
                source_code
            )),
        );
    }

    let Some(source) = ctx.registry.get(&source_code).cloned() else {
        return Ok(not_found(summary, &source_code));
    };
    let Some(destination) = ctx.registry.get_mut(&cmd.destination) else {
        return Ok(not_found(summary, &cmd.destination));
    };

    summary.report = destination.synchronize_with(&source, mode);
    summary.annotations = annotations(destination);

    // An unchanged language is only written when a copy was asked for.
    if !summary.report.is_empty() || cmd.output.is_some() {
        summary.target = cmd
            .output
            .clone()
            .or_else(|| destination.source_path.clone());
    }

    if cmd.apply
        && let Some(target) = &summary.target
    {
        destination
            .save_to(target)
            .with_context(|| format!("Failed to write language file: {}", target.display()))?;
    }

    Ok(CommandResult::new(CommandSummary::Sync(summary)))
}

fn not_found(summary: SyncSummary, code: &str) -> CommandResult {
    CommandResult::new(CommandSummary::Sync(summary))
        .with_problem(format!("Language '{}' not found or unreadable", code))
}

/// Every phrase of `destination` that still carries an annotation prefix,
/// whether this run or an earlier one put it there.
fn annotations(destination: &Dictionary) -> Vec<Annotation> {
    let mut annotations = Vec::new();

    for area in destination.areas() {
        let Ok(keys) = destination.keys(area) else {
            continue;
        };
        for key in keys {
            let phrase = destination.raw_phrase(area, key);
            let kind = if phrase.starts_with(REMOVE_PREFIX) {
                AnnotationKind::Remove
            } else if phrase.starts_with(TRANSLATE_PREFIX) {
                AnnotationKind::Translate
            } else {
                continue;
            };
            annotations.push(Annotation {
                area: area.to_string(),
                key: key.to_string(),
                kind,
                phrase: phrase.to_string(),
            });
        }
    }

    annotations
}

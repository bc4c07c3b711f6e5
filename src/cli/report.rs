//! Report formatting and printing utilities.
//!
//! Separate from core logic to allow langsync to be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    AnnotationKind, CommandResult, CommandSummary, InitSummary, ListSummary, NewSummary,
    ShowSummary, ShowView, SyncSummary,
};
use crate::config::CONFIG_FILE_NAME;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult, verbose: bool) {
    print_to(
        result,
        verbose,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
}

/// Print a command result to custom writers.
///
/// Useful for testing or redirecting output.
pub fn print_to<W: Write, E: Write>(
    result: &CommandResult,
    verbose: bool,
    out: &mut W,
    err: &mut E,
) {
    match &result.summary {
        CommandSummary::List(summary) => print_list(summary, out),
        CommandSummary::Show(summary) => print_show(summary, out),
        CommandSummary::Sync(summary) if result.problems.is_empty() => {
            print_sync(summary, verbose, out)
        }
        CommandSummary::Sync(_) => {}
        CommandSummary::New(summary) => print_new(summary, out),
        CommandSummary::Init(summary) => print_init(summary, out),
    }

    print_problems(&result.problems, err);
}

fn print_problems<E: Write>(problems: &[String], err: &mut E) {
    if problems.is_empty() {
        return;
    }

    for problem in problems {
        let _ = writeln!(err, "{} {}", "error:".bold().red(), problem);
    }
    let _ = writeln!(
        err,
        "\n{} {} {}",
        FAILURE_MARK.red(),
        problems.len(),
        if problems.len() == 1 {
            "problem"
        } else {
            "problems"
        }
    );
}

fn print_list<W: Write>(summary: &ListSummary, out: &mut W) {
    if summary.entries.is_empty() {
        let _ = writeln!(
            out,
            "No language files found in {}",
            summary.lang_root.display()
        );
        return;
    }

    let _ = writeln!(
        out,
        "{} {}:",
        "Languages in".bold(),
        summary.lang_root.display()
    );

    let code_width = column_width(summary.entries.iter().map(|e| e.code.as_str()));
    let names: Vec<String> = summary
        .entries
        .iter()
        .map(|entry| match &entry.language {
            Some(lang) if lang.local_name != lang.int_name => {
                format!("{} ({})", lang.int_name, lang.local_name)
            }
            Some(lang) => lang.int_name.clone(),
            None => String::new(),
        })
        .collect();
    let name_width = column_width(names.iter().map(String::as_str));

    for (entry, name) in summary.entries.iter().zip(&names) {
        let code = pad(&entry.code, code_width);
        match &entry.language {
            Some(lang) => {
                let _ = writeln!(
                    out,
                    "  {}  {}  {}  {} area(s), {} key(s)",
                    code.cyan(),
                    pad(name, name_width),
                    lang.culture,
                    lang.area_count,
                    lang.key_count
                );
            }
            None => {
                let _ = writeln!(out, "  {}  {}", code.cyan(), "unreadable".red());
            }
        }
    }
}

fn print_show<W: Write>(summary: &ShowSummary, out: &mut W) {
    match &summary.view {
        Some(ShowView::Areas(areas)) => {
            if areas.is_empty() {
                let _ = writeln!(out, "'{}' has no areas", summary.code);
                return;
            }
            let _ = writeln!(out, "{} '{}':", "Areas of".bold(), summary.code);
            let width = column_width(areas.iter().map(|(area, _)| area.as_str()));
            for (area, count) in areas {
                let _ = writeln!(out, "  {}  {} key(s)", pad(area, width), count);
            }
        }
        Some(ShowView::Phrases { area, phrases }) => {
            let _ = writeln!(out, "{} ({}):", area.bold(), summary.code);
            let width = column_width(phrases.iter().map(|(key, _)| key.as_str()));
            for (key, phrase) in phrases {
                let _ = writeln!(
                    out,
                    "  {}  {}",
                    pad(key, width).cyan(),
                    single_line(phrase)
                );
            }
        }
        None => {}
    }
}

fn print_sync<W: Write>(summary: &SyncSummary, verbose: bool, out: &mut W) {
    if verbose {
        for area in &summary.report.skipped_areas {
            let _ = writeln!(
                out,
                "{} skipped empty area '{}' of '{}'",
                "note:".bold(),
                area,
                summary.source
            );
        }
    }

    let report = &summary.report;
    if report.is_empty() && summary.annotations.is_empty() {
        print_in_sync(summary, out);
        if summary.target.is_none() {
            return;
        }
    }

    let width = column_width(summary.annotations.iter().map(|a| a.key.as_str()));
    let mut current_area: Option<&str> = None;
    for annotation in &summary.annotations {
        if current_area != Some(annotation.area.as_str()) {
            if current_area.is_some() {
                let _ = writeln!(out);
            }
            let _ = writeln!(out, "{}", annotation.area.bold());
            current_area = Some(annotation.area.as_str());
        }

        let key = pad(&annotation.key, width);
        let line = match annotation.kind {
            AnnotationKind::Translate => {
                format!("  {} {}  {}", "+".green(), key, single_line(&annotation.phrase))
            }
            AnnotationKind::Remove => {
                format!("  {} {}  {}", "-".red(), key, single_line(&annotation.phrase))
            }
        };
        let _ = writeln!(out, "{}", line);
    }
    if !summary.annotations.is_empty() {
        let _ = writeln!(out);
    }

    if !report.is_empty() {
        let _ = writeln!(
            out,
            "{} {} key(s) in {} area(s) of '{}' against '{}': {} to translate, {} to remove.",
            if summary.is_apply {
                "Annotated".green().bold()
            } else {
                "Would annotate".yellow().bold()
            },
            report.added_count() + report.flagged_count(),
            report.areas.len(),
            summary.destination,
            summary.source,
            report.added_count(),
            report.flagged_count()
        );
    } else if !summary.annotations.is_empty() {
        let _ = writeln!(
            out,
            "{} in '{}' against '{}': {} key(s) still to translate, {} to remove.",
            "Nothing new to annotate".bold(),
            summary.destination,
            summary.source,
            summary.pending_count(AnnotationKind::Translate),
            summary.pending_count(AnnotationKind::Remove)
        );
    }

    if let Some(target) = &summary.target {
        if summary.is_apply {
            let _ = writeln!(
                out,
                "{} {}",
                SUCCESS_MARK.green(),
                format!("Wrote {}", target.display()).green()
            );
        } else {
            let _ = writeln!(
                out,
                "Run with {} to write {}.",
                "--apply".cyan(),
                target.display()
            );
        }
    }
}

fn print_in_sync<W: Write>(summary: &SyncSummary, out: &mut W) {
    let _ = writeln!(
        out,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "'{}' already covers every key of '{}'",
            summary.destination, summary.source
        )
        .green()
    );
}

fn print_new<W: Write>(summary: &NewSummary, out: &mut W) {
    if summary.created {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", summary.path.display()).green()
        );
    }
}

fn print_init<W: Write>(summary: &InitSummary, out: &mut W) {
    if summary.created {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(UnicodeWidthStr::width)
        .max()
        .unwrap_or_default()
}

/// Pad to a display width, counting wide characters correctly.
fn pad(value: &str, width: usize) -> String {
    let padding = width.saturating_sub(UnicodeWidthStr::width(value));
    format!("{}{}", value, " ".repeat(padding))
}

fn single_line(phrase: &str) -> String {
    phrase.replace('\r', "").replace('\n', "\\n")
}

// ============================================================
// Tests
// ============================================================

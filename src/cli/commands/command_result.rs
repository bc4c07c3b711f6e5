use std::path::PathBuf;

use crate::dictionary::SyncReport;

use super::super::exit_status::ExitStatus;

#[derive(Debug)]
pub enum CommandSummary {
    List(ListSummary),
    Show(ShowSummary),
    Sync(SyncSummary),
    New(NewSummary),
    Init(InitSummary),
}

/// One discovered language file.
#[derive(Debug)]
pub struct ListEntry {
    pub code: String,
    /// `None` when the file could not be loaded.
    pub language: Option<LanguageInfo>,
}

#[derive(Debug)]
pub struct LanguageInfo {
    pub int_name: String,
    pub local_name: String,
    pub culture: String,
    pub area_count: usize,
    pub key_count: usize,
}

#[derive(Debug)]
pub struct ListSummary {
    pub lang_root: PathBuf,
    pub entries: Vec<ListEntry>,
}

#[derive(Debug)]
pub enum ShowView {
    /// Area names with their key counts.
    Areas(Vec<(String, usize)>),
    /// Keys of one area with their raw phrases.
    Phrases {
        area: String,
        phrases: Vec<(String, String)>,
    },
}

#[derive(Debug)]
pub struct ShowSummary {
    pub code: String,
    pub view: Option<ShowView>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationKind {
    Translate,
    Remove,
}

/// A destination key still marked for translation or removal.
#[derive(Debug)]
pub struct Annotation {
    pub area: String,
    pub key: String,
    pub kind: AnnotationKind,
    pub phrase: String,
}

#[derive(Debug)]
pub struct SyncSummary {
    pub source: String,
    pub destination: String,
    pub report: SyncReport,
    /// Pending keys of the destination after the run, sorted by area and key.
    pub annotations: Vec<Annotation>,
    pub is_apply: bool,
    /// File the destination would be (or was) written to.
    pub target: Option<PathBuf>,
}

impl SyncSummary {
    pub fn pending_count(&self, kind: AnnotationKind) -> usize {
        self.annotations.iter().filter(|a| a.kind == kind).count()
    }
}

#[derive(Debug)]
pub struct NewSummary {
    pub code: String,
    pub path: PathBuf,
    pub created: bool,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running langsync commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Problems to report to the user, one line each.
    pub problems: Vec<String>,
}

impl CommandResult {
    pub fn new(summary: CommandSummary) -> Self {
        Self {
            summary,
            problems: Vec::new(),
        }
    }

    pub fn with_problem(mut self, problem: impl Into<String>) -> Self {
        self.problems.push(problem.into());
        self
    }

    pub fn error_count(&self) -> usize {
        self.problems.len()
    }

    pub fn exit_status(&self) -> ExitStatus {
        if self.error_count() > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}

//! In-memory language dictionary: area -> key -> phrase.
//!
//! Areas and keys live in ordered maps, so every enumeration (display and
//! persistence alike) comes out sorted without extra work.

use std::{
    collections::{BTreeMap, BTreeSet},
    fmt::Display,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use regex::{Captures, Regex};

use super::codec;
use super::error::{DictionaryError, Result};

/// Prefix stamped on keys the destination is missing.
pub const TRANSLATE_PREFIX: &str = "TRANSLATE ME: ";

/// Prefix stamped on keys the source no longer has.
pub const REMOVE_PREFIX: &str = "REMOVE ME: ";

pub const DEFAULT_CREATOR_NAME: &str = "uTranslator";
pub const DEFAULT_CREATOR_URL: &str = "http://something.dk";

static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{|\}\}|\{(\d+)\}").unwrap());

/// Who made the language file. Round-tripped, never interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribution {
    pub creator_name: String,
    pub url: String,
}

impl Default for Attribution {
    fn default() -> Self {
        Self {
            creator_name: DEFAULT_CREATOR_NAME.to_string(),
            url: DEFAULT_CREATOR_URL.to_string(),
        }
    }
}

/// How `synchronize_with` treats keys that were already flagged for removal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SyncMode {
    /// Every run wraps obsolete phrases again, so repeated runs stack up
    /// `REMOVE ME: REMOVE ME: ...`.
    #[default]
    Accumulate,
    /// Phrases that already start with `REMOVE ME: ` are left alone.
    Idempotent,
}

/// Keys annotated in one area by a synchronize run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AreaChanges {
    pub area: String,
    /// Keys inserted with a `TRANSLATE ME` phrase.
    pub added: Vec<String>,
    /// Keys whose phrase was rewritten with `REMOVE ME`.
    pub flagged: Vec<String>,
}

/// Outcome of a synchronize run, in area order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub areas: Vec<AreaChanges>,
    /// Source areas without keys, which were not touched.
    pub skipped_areas: Vec<String>,
}

impl SyncReport {
    pub fn added_count(&self) -> usize {
        self.areas.iter().map(|a| a.added.len()).sum()
    }

    pub fn flagged_count(&self) -> usize {
        self.areas.iter().map(|a| a.flagged.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}

/// One localization target, e.g. the `da` language of the host platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    code: String,
    pub int_name: String,
    pub local_name: String,
    pub local_id: String,
    pub culture: String,
    pub attribution: Attribution,
    /// File this dictionary was loaded from; `None` for one built in memory.
    pub source_path: Option<PathBuf>,
    entries: BTreeMap<String, BTreeMap<String, String>>,
}

impl Dictionary {
    /// Create an empty dictionary, ready to be filled and saved as a new language file.
    pub fn new(
        code: impl Into<String>,
        int_name: impl Into<String>,
        local_name: impl Into<String>,
        culture: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            int_name: int_name.into(),
            local_name: local_name.into(),
            local_id: String::new(),
            culture: culture.into(),
            attribution: Attribution::default(),
            source_path: None,
            entries: BTreeMap::new(),
        }
    }

    /// Load a dictionary from a language file on disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        codec::read(path.as_ref())
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Area names, sorted.
    pub fn areas(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// Key names of `area`, sorted.
    ///
    /// Unlike the phrase lookups this is strict: callers are expected to pick
    /// `area` from [`Dictionary::areas`].
    pub fn keys(&self, area: &str) -> Result<Vec<&str>> {
        self.entries
            .get(area)
            .map(|keys| keys.keys().map(String::as_str).collect())
            .ok_or_else(|| DictionaryError::AreaNotFound {
                area: area.to_string(),
            })
    }

    pub fn contains(&self, area: &str, key: &str) -> bool {
        self.lookup(area, key).is_some()
    }

    /// Phrase for display. Returns `[key]` when the phrase is missing.
    pub fn phrase(&self, area: &str, key: &str) -> String {
        match self.lookup(area, key) {
            Some(phrase) => phrase.to_string(),
            None => missing_phrase(key),
        }
    }

    /// Phrase with `{0}`, `{1}`, ... replaced by `args`.
    ///
    /// `{{` and `}}` produce literal braces. A placeholder without a matching
    /// argument is kept as written. Returns `[key]` when the phrase is missing.
    pub fn format_phrase(&self, area: &str, key: &str, args: &[&dyn Display]) -> String {
        match self.lookup(area, key) {
            Some(phrase) => format_positional(phrase, args),
            None => missing_phrase(key),
        }
    }

    /// Stored phrase without formatting, or an empty string when missing.
    pub fn raw_phrase(&self, area: &str, key: &str) -> &str {
        self.lookup(area, key).unwrap_or_default()
    }

    /// Insert or overwrite a phrase, creating the area on first use.
    pub fn set_phrase(
        &mut self,
        area: impl Into<String>,
        key: impl Into<String>,
        phrase: impl Into<String>,
    ) {
        self.entries
            .entry(area.into())
            .or_default()
            .insert(key.into(), phrase.into());
    }

    /// Bring this dictionary's key coverage in line with `source`.
    ///
    /// Missing keys are added as `TRANSLATE ME: '<source phrase>'` and keys the
    /// source lacks are rewritten to `REMOVE ME: <phrase>`. Existing
    /// translations are never overwritten and nothing is deleted.
    pub fn synchronize(&mut self, source: &Dictionary) -> SyncReport {
        self.synchronize_with(source, SyncMode::Accumulate)
    }

    pub fn synchronize_with(&mut self, source: &Dictionary, mode: SyncMode) -> SyncReport {
        let mut report = SyncReport::default();

        for (area, source_keys) in &source.entries {
            if source_keys.is_empty() {
                report.skipped_areas.push(area.clone());
                continue;
            }

            let own = self.entries.entry(area.clone()).or_default();
            let mut unmatched: BTreeSet<String> = own.keys().cloned().collect();
            let mut changes = AreaChanges {
                area: area.clone(),
                ..Default::default()
            };

            for (key, phrase) in source_keys {
                if own.contains_key(key) {
                    unmatched.remove(key);
                } else {
                    own.insert(key.clone(), format!("{TRANSLATE_PREFIX}'{phrase}'"));
                    changes.added.push(key.clone());
                }
            }

            for key in unmatched {
                let Some(phrase) = own.get_mut(&key) else {
                    continue;
                };
                if mode == SyncMode::Idempotent && phrase.starts_with(REMOVE_PREFIX) {
                    continue;
                }
                *phrase = format!("{REMOVE_PREFIX}{phrase}");
                changes.flagged.push(key);
            }

            if !changes.added.is_empty() || !changes.flagged.is_empty() {
                report.areas.push(changes);
            }
        }

        report
    }

    /// Write the dictionary back to the file it was loaded from.
    pub fn save(&self) -> Result<()> {
        let path = self.source_path.as_deref().ok_or_else(|| {
            DictionaryError::InvalidState("Can't save language to an empty path".to_string())
        })?;
        self.save_to(path)
    }

    /// Write the dictionary to `path` in the language file format.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        codec::write(self, path.as_ref())
    }

    pub(crate) fn entries(&self) -> impl Iterator<Item = (&str, &BTreeMap<String, String>)> {
        self.entries
            .iter()
            .map(|(area, keys)| (area.as_str(), keys))
    }

    fn lookup(&self, area: &str, key: &str) -> Option<&str> {
        self.entries
            .get(area)
            .and_then(|keys| keys.get(key))
            .map(String::as_str)
    }
}

fn missing_phrase(key: &str) -> String {
    format!("[{}]", key)
}

fn format_positional(template: &str, args: &[&dyn Display]) -> String {
    PLACEHOLDER_REGEX
        .replace_all(template, |caps: &Captures| match &caps[0] {
            "{{" => "{".to_string(),
            "}}" => "}".to_string(),
            placeholder => caps
                .get(1)
                .and_then(|index| index.as_str().parse::<usize>().ok())
                .and_then(|index| args.get(index))
                .map(|arg| arg.to_string())
                .unwrap_or_else(|| placeholder.to_string()),
        })
        .into_owned()
}

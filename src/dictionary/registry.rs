//! Folder-backed cache of language dictionaries, keyed by language code.
//!
//! Files are discovered by name only (`<code>.xml` directly under the root)
//! and parsed on first access. A file that fails to load is reported as
//! absent, so one corrupt language never blocks the others.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use tracing::{debug, warn};
use walkdir::WalkDir;

use super::codec::FILE_EXTENSION;
use super::entity::Dictionary;
use super::error::{DictionaryError, Result};

/// Owns the root folder and every dictionary loaded from it.
///
/// Not synchronized: hosts serving several sessions should give each session
/// its own registry or guard it with a lock.
#[derive(Debug)]
pub struct Registry {
    root: PathBuf,
    dictionaries: HashMap<String, Dictionary>,
}

impl Registry {
    /// Bind a registry to `root`, which must be an existing folder.
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        let root = checked_root(root.as_ref())?;
        debug!(root = %root.display(), "opened language registry");
        Ok(Self {
            root,
            dictionaries: HashMap::new(),
        })
    }

    /// Rebind to another folder, dropping every cached dictionary.
    pub fn reset(&mut self, root: impl AsRef<Path>) -> Result<()> {
        self.root = checked_root(root.as_ref())?;
        self.dictionaries.clear();
        debug!(root = %self.root.display(), "reset language registry");
        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Codes of all language files under the root, sorted.
    ///
    /// Files are not parsed here; a listed code may still fail to load.
    pub fn list_codes(&self) -> Result<Vec<String>> {
        let mut codes = Vec::new();

        for entry in WalkDir::new(&self.root).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|err| DictionaryError::Io {
                path: self.root.clone(),
                source: err.into(),
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let is_language_file = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case(FILE_EXTENSION));
            if !is_language_file {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                codes.push(stem.to_string());
            }
        }

        codes.sort();
        debug!(count = codes.len(), "discovered language files");
        Ok(codes)
    }

    /// Expected file location for `code`. The file may not exist.
    pub fn path_for(&self, code: &str) -> PathBuf {
        self.root.join(format!("{}.{}", code, FILE_EXTENSION))
    }

    /// Dictionary for `code`, loading and caching it on first access.
    ///
    /// Returns `None` when the file is missing or cannot be parsed.
    pub fn get(&mut self, code: &str) -> Option<&Dictionary> {
        self.get_mut(code).map(|dict| &*dict)
    }

    /// Mutable access to the cached dictionary for `code`, loading it if needed.
    pub fn get_mut(&mut self, code: &str) -> Option<&mut Dictionary> {
        if !self.dictionaries.contains_key(code) {
            let dict = self.load(code)?;
            self.dictionaries.insert(code.to_string(), dict);
        }
        self.dictionaries.get_mut(code)
    }

    /// Whether `code` is already in the cache.
    pub fn is_loaded(&self, code: &str) -> bool {
        self.dictionaries.contains_key(code)
    }

    fn load(&self, code: &str) -> Option<Dictionary> {
        let path = self.path_for(code);

        match Dictionary::load(&path) {
            Ok(dict) => {
                if dict.code() != code {
                    warn!(
                        code,
                        alias = dict.code(),
                        "language alias does not match its file name"
                    );
                }
                debug!(code, path = %path.display(), "loaded language");
                Some(dict)
            }
            Err(DictionaryError::NotFound { .. }) => {
                debug!(code, path = %path.display(), "no language file");
                None
            }
            Err(err) => {
                warn!(code, error = %err, cause = ?std::error::Error::source(&err), "skipping unreadable language");
                None
            }
        }
    }
}

fn checked_root(root: &Path) -> Result<PathBuf> {
    if !root.is_dir() {
        return Err(DictionaryError::NotFound {
            path: root.to_path_buf(),
        });
    }
    Ok(root.to_path_buf())
}

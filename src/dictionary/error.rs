//! Error types for dictionary loading, lookup and persistence.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors surfaced by the dictionary core.
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// A folder or file that must exist is missing.
    #[error("Can't find '{}'", path.display())]
    NotFound { path: PathBuf },

    /// The file content does not have the shape of a language file.
    #[error("The file {} is not a valid language", path.display())]
    Format {
        path: PathBuf,
        #[source]
        cause: FormatCause,
    },

    /// Key enumeration was asked for an area the dictionary does not have.
    #[error("Area '{area}' does not exist in this language")]
    AreaNotFound { area: String },

    /// An operation ran without the state it requires.
    #[error("{0}")]
    InvalidState(String),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// The underlying reason a language file was rejected.
#[derive(Debug, Error)]
pub enum FormatCause {
    #[error("document has no root element")]
    EmptyDocument,

    #[error("expected root element <language>, found <{found}>")]
    UnexpectedRoot { found: String },

    /// A required attribute is absent. The language code lives in the root's
    /// `alias` attribute.
    #[error("<{element}> is missing the '{attribute}' attribute")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },

    #[error("document ends inside <{name}>")]
    UnclosedElement { name: String },

    #[error("unexpected content outside the root element: {found}")]
    ContentOutsideRoot { found: String },

    #[error("file is not valid UTF-8")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error(transparent)]
    Xml(#[from] quick_xml::Error),

    #[error(transparent)]
    Attribute(#[from] quick_xml::events::attributes::AttrError),
}

/// A convenience `Result` alias for the dictionary core.
pub type Result<T> = std::result::Result<T, DictionaryError>;

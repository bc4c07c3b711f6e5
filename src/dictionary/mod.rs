//! Language dictionaries: the in-memory model, the file codec and the
//! folder-backed registry.

pub mod codec;
mod entity;
mod error;
mod registry;

pub use entity::{
    AreaChanges, Attribution, DEFAULT_CREATOR_NAME, DEFAULT_CREATOR_URL, Dictionary,
    REMOVE_PREFIX, SyncMode, SyncReport, TRANSLATE_PREFIX,
};
pub use error::{DictionaryError, FormatCause, Result};
pub use registry::Registry;

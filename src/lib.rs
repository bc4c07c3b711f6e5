//! langsync - keeps language dictionaries in step with a reference language
//!
//! A language is an XML file of areas, each holding key/phrase pairs. langsync
//! compares a destination language with a source language, marks the keys the
//! destination is missing (`TRANSLATE ME`) or no longer needs (`REMOVE ME`)
//! without deleting anything, and writes the result back in the same format.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands and reports)
//! - `config`: Configuration file loading and parsing
//! - `dictionary`: Dictionary model, file codec and folder-backed registry

pub mod cli;
pub mod config;
pub mod dictionary;

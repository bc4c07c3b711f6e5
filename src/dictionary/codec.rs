//! Reading and writing language files.
//!
//! A language file looks like this:
//!
//! ```text
//! <?xml version="1.0" encoding="utf-8" standalone="yes"?>
//! <language alias="en" intName="English (UK)" localName="English (UK)" lcid="" culture="en-GB">
//!   <creator>
//!     <name>umbraco</name>
//!     <link>http://umbraco.org</link>
//!   </creator>
//!   <area alias="actions">
//!     <key alias="assignDomain">Culture and Hostnames</key>
//!   </area>
//! </language>
//! ```
//!
//! Output is byte-compatible with the files shipped by the host platform, so
//! language packs can be edited here and dropped back in place.

use std::{
    collections::BTreeMap,
    fmt::Write as _,
    fs, io,
    path::Path,
    sync::LazyLock,
};

use quick_xml::{
    Reader,
    escape::partial_escape,
    events::{BytesStart, Event},
};
use regex::Regex;
use tracing::{info, trace};

use super::entity::{Attribution, Dictionary};
use super::error::{DictionaryError, FormatCause, Result};

pub const FILE_EXTENSION: &str = "xml";

pub const FALLBACK_CREATOR_NAME: &str = "umbraco";
pub const FALLBACK_CREATOR_URL: &str = "http://umbraco.org";

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8" standalone="yes"?>"#;
const ROOT_TAG: &[u8] = b"language";

/// Old files write positional placeholders as `%1%`.
static LEGACY_PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%(\d)%").unwrap());

/// Phrases matching this are written as CDATA instead of escaped text.
static RAW_TEXT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[<>\n]").unwrap());

/// Load a language file from disk. The returned dictionary remembers `path`.
pub fn read(path: &Path) -> Result<Dictionary> {
    let bytes = fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => DictionaryError::NotFound {
            path: path.to_path_buf(),
        },
        _ => DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let mut dict = String::from_utf8(bytes)
        .map_err(FormatCause::from)
        .and_then(|content| parse(&content))
        .map_err(|cause| DictionaryError::Format {
            path: path.to_path_buf(),
            cause,
        })?;
    dict.source_path = Some(path.to_path_buf());
    Ok(dict)
}

/// Write `dict` to `path`, creating parent directories as needed.
pub fn write(dict: &Dictionary, path: &Path) -> Result<()> {
    let io_error = |source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    fs::write(path, serialize(dict)).map_err(io_error)?;

    info!(code = dict.code(), path = %path.display(), "saved language");
    Ok(())
}

/// Parse the content of a language file.
pub fn parse(content: &str) -> std::result::Result<Dictionary, FormatCause> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut reader = Reader::from_str(content);
    let mut parser = LanguageParser::default();

    loop {
        match reader.read_event()? {
            Event::Start(e) => parser.open(&e, false)?,
            Event::Empty(e) => parser.open(&e, true)?,
            Event::End(_) => parser.close(),
            Event::Text(e) => parser.text(&e.unescape()?)?,
            Event::CData(e) => parser.text(&String::from_utf8_lossy(&e))?,
            Event::Eof => break,
            _ => {}
        }
    }

    parser.finish()
}

/// Rewrite `%N%` placeholders to `{N}`.
pub fn rewrite_legacy_placeholders(value: &str) -> String {
    LEGACY_PLACEHOLDER_REGEX
        .replace_all(value, "{$1}")
        .into_owned()
}

/// Render `dict` in the language file format.
pub fn serialize(dict: &Dictionary) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", XML_DECLARATION);
    let _ = writeln!(
        out,
        r#"<language alias="{}" intName="{}" localName="{}" lcid="{}" culture="{}">"#,
        escape_attribute(dict.code()),
        escape_attribute(&dict.int_name),
        escape_attribute(&dict.local_name),
        escape_attribute(&dict.local_id),
        escape_attribute(&dict.culture),
    );
    let _ = writeln!(out, "  <creator>");
    let _ = writeln!(
        out,
        "    <name>{}</name>",
        partial_escape(&dict.attribution.creator_name)
    );
    let _ = writeln!(
        out,
        "    <link>{}</link>",
        partial_escape(&dict.attribution.url)
    );
    let _ = writeln!(out, "  </creator>");

    for (area, keys) in dict.entries() {
        write_area(&mut out, area, keys);
    }

    out.push_str("</language>");
    out
}

fn write_area(out: &mut String, area: &str, keys: &BTreeMap<String, String>) {
    if keys.is_empty() {
        let _ = writeln!(out, r#"  <area alias="{}" />"#, escape_attribute(area));
        return;
    }

    let _ = writeln!(out, r#"  <area alias="{}">"#, escape_attribute(area));
    for (key, phrase) in keys {
        let _ = writeln!(
            out,
            r#"    <key alias="{}">{}</key>"#,
            escape_attribute(key),
            encode_phrase(phrase)
        );
    }
    let _ = writeln!(out, "  </area>");
}

fn encode_phrase(phrase: &str) -> String {
    if RAW_TEXT_REGEX.is_match(phrase) {
        // A CDATA section cannot contain its own terminator, so split it.
        format!("<![CDATA[{}]]>", phrase.replace("]]>", "]]]]><![CDATA[>"))
    } else {
        partial_escape(phrase).into_owned()
    }
}

fn escape_attribute(value: &str) -> String {
    partial_escape(value)
        .replace('"', "&quot;")
        .replace('\r', "&#xD;")
        .replace('\n', "&#xA;")
        .replace('\t', "&#x9;")
}

/// What the text currently being collected belongs to.
enum CaptureTarget {
    CreatorName,
    CreatorLink,
    Key { area: String, key: String },
}

struct Capture {
    target: CaptureTarget,
    depth: usize,
    text: String,
}

/// Event-driven builder for a [`Dictionary`].
///
/// Keys belong to the nearest enclosing `<area>`. Only the first `<creator>`
/// and its first `<name>`/`<link>` are read.
#[derive(Default)]
struct LanguageParser {
    dict: Option<Dictionary>,
    /// Names of the elements currently open, outermost first.
    open_elements: Vec<String>,
    creator_seen: bool,
    creator_depth: Option<usize>,
    name_seen: bool,
    link_seen: bool,
    areas: Vec<(String, usize)>,
    capture: Option<Capture>,
}

impl LanguageParser {
    fn open(&mut self, e: &BytesStart, empty: bool) -> std::result::Result<(), FormatCause> {
        let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
        if self.root_closed() {
            return Err(FormatCause::ContentOutsideRoot {
                found: format!("<{}>", name),
            });
        }

        let depth = self.open_elements.len();
        if !empty {
            self.open_elements.push(name.clone());
        }

        let Some(dict) = self.dict.as_mut() else {
            if name.as_bytes() != ROOT_TAG {
                return Err(FormatCause::UnexpectedRoot { found: name });
            }
            self.dict = Some(read_root(e)?);
            return Ok(());
        };

        // Markup nested inside a phrase only contributes its text.
        if self.capture.is_some() {
            return Ok(());
        }

        let target = match e.name().as_ref() {
            b"creator" if !self.creator_seen => {
                self.creator_seen = true;
                dict.attribution = Attribution {
                    creator_name: FALLBACK_CREATOR_NAME.to_string(),
                    url: FALLBACK_CREATOR_URL.to_string(),
                };
                if !empty {
                    self.creator_depth = Some(depth);
                }
                None
            }
            b"name" if self.creator_depth.is_some() && !self.name_seen => {
                self.name_seen = true;
                Some(CaptureTarget::CreatorName)
            }
            b"link" if self.creator_depth.is_some() && !self.link_seen => {
                self.link_seen = true;
                Some(CaptureTarget::CreatorLink)
            }
            b"area" => {
                let alias = required_attribute(e, "area", "alias")?;
                trace!(area = %alias, "reading area");
                if !empty {
                    self.areas.push((alias, depth));
                }
                None
            }
            b"key" => match self.areas.last() {
                Some((area, _)) => {
                    let key = required_attribute(e, "key", "alias")?;
                    Some(CaptureTarget::Key {
                        area: area.clone(),
                        key,
                    })
                }
                None => None,
            },
            _ => None,
        };

        if let Some(target) = target {
            let capture = Capture {
                target,
                depth,
                text: String::new(),
            };
            if empty {
                self.finish_capture(capture);
            } else {
                self.capture = Some(capture);
            }
        }

        Ok(())
    }

    fn close(&mut self) {
        self.open_elements.pop();
        let depth = self.open_elements.len();

        if self.capture.as_ref().is_some_and(|c| c.depth == depth) {
            if let Some(capture) = self.capture.take() {
                self.finish_capture(capture);
            }
            return;
        }
        if self.areas.last().is_some_and(|(_, d)| *d == depth) {
            self.areas.pop();
        }
        if self.creator_depth == Some(depth) {
            self.creator_depth = None;
        }
    }

    fn text(&mut self, text: &str) -> std::result::Result<(), FormatCause> {
        if self.open_elements.is_empty() {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                return Err(FormatCause::ContentOutsideRoot {
                    found: trimmed.chars().take(40).collect(),
                });
            }
        }
        if let Some(capture) = self.capture.as_mut() {
            capture.text.push_str(text);
        }
        Ok(())
    }

    /// The root element was read and has been closed again.
    fn root_closed(&self) -> bool {
        self.dict.is_some() && self.open_elements.is_empty()
    }

    fn finish(self) -> std::result::Result<Dictionary, FormatCause> {
        if let Some(name) = self.open_elements.last() {
            return Err(FormatCause::UnclosedElement { name: name.clone() });
        }
        self.dict.ok_or(FormatCause::EmptyDocument)
    }

    fn finish_capture(&mut self, capture: Capture) {
        let Some(dict) = self.dict.as_mut() else {
            return;
        };
        match capture.target {
            CaptureTarget::CreatorName => dict.attribution.creator_name = capture.text,
            CaptureTarget::CreatorLink => dict.attribution.url = capture.text,
            CaptureTarget::Key { area, key } => {
                dict.set_phrase(area, key, rewrite_legacy_placeholders(&capture.text));
            }
        }
    }
}

/// The language code is the root's `alias` attribute. `intName` and
/// `culture` are required as well.
fn read_root(e: &BytesStart) -> std::result::Result<Dictionary, FormatCause> {
    let code = required_attribute(e, "language", "alias")?;
    let int_name = required_attribute(e, "language", "intName")?;
    let local_name = optional_attribute(e, "localName")?.unwrap_or_else(|| int_name.clone());
    let culture = required_attribute(e, "language", "culture")?;

    let mut dict = Dictionary::new(code, int_name, local_name, culture);
    dict.local_id = optional_attribute(e, "lcid")?.unwrap_or_default();
    Ok(dict)
}

fn required_attribute(
    e: &BytesStart,
    element: &'static str,
    attribute: &'static str,
) -> std::result::Result<String, FormatCause> {
    optional_attribute(e, attribute)?
        .ok_or(FormatCause::MissingAttribute { element, attribute })
}

fn optional_attribute(
    e: &BytesStart,
    attribute: &str,
) -> std::result::Result<Option<String>, FormatCause> {
    match e.try_get_attribute(attribute)? {
        Some(attr) => Ok(Some(attr.unescape_value()?.into_owned())),
        None => Ok(None),
    }
}

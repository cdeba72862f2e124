//! Annotation extraction from contract sources.
//!
//! Contracts carry their documentation in comment tags:
//!
//! ```solidity
//! /**
//!  * @title Encrypted Counter
//!  * @description Increments a euint32 without revealing it
//!  * @chapter: basic
//!  */
//! ```
//!
//! Each tag is matched independently against the whole file and only the
//! first occurrence of each is kept. Missing tags fall back to defaults when
//! a [`ParsedAnnotation`] is built.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::DocsError;

/// Chapter used when a source has no `@chapter:` tag.
pub const DEFAULT_CHAPTER: &str = "general";

/// `@title`, whitespace (which may span lines), then the rest of the line.
static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@title\s+([^\r\n]+)").expect("title regex is valid"));

/// `@description`, whitespace, then the rest of the line.
static DESCRIPTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@description\s+([^\r\n]+)").expect("description regex is valid")
});

/// `@chapter:`, optional whitespace, then an ASCII word.
static CHAPTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@chapter:\s*([A-Za-z0-9_]+)").expect("chapter regex is valid")
});

/// Raw annotation values as found in a source; `None` when a tag is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotations {
    /// First `@title` value
    pub title: Option<String>,
    /// First `@description` value
    pub description: Option<String>,
    /// First `@chapter:` value
    pub chapter: Option<String>,
}

/// Annotations with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAnnotation {
    /// Title, or the source file name
    pub title: String,
    /// Description, or empty
    pub description: String,
    /// Chapter, or [`DEFAULT_CHAPTER`]
    pub chapter: String,
}

impl ParsedAnnotation {
    /// Applies defaults to raw annotations. `file_name` becomes the title when
    /// the source has none.
    #[must_use]
    pub fn resolve(annotations: Annotations, file_name: &str) -> Self {
        Self {
            title: annotations
                .title
                .unwrap_or_else(|| file_name.to_string()),
            description: annotations.description.unwrap_or_default(),
            chapter: annotations
                .chapter
                .unwrap_or_else(|| DEFAULT_CHAPTER.to_string()),
        }
    }
}

/// Extracts the first value of each annotation tag from `source`.
#[must_use]
pub fn parse_annotations(source: &str) -> Annotations {
    Annotations {
        title: first_capture(&TITLE_RE, source),
        description: first_capture(&DESCRIPTION_RE, source),
        chapter: first_capture(&CHAPTER_RE, source),
    }
}

/// Reads a contract source and returns its annotations with defaults applied.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD.
///
/// # Errors
///
/// Returns `DocsError::Io` if the file cannot be read.
pub fn parse_contract_docs(path: &Path) -> Result<ParsedAnnotation, DocsError> {
    let bytes = std::fs::read(path).map_err(|e| DocsError::io(path, e))?;
    let source = String::from_utf8_lossy(&bytes);
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(ParsedAnnotation::resolve(parse_annotations(&source), &file_name))
}

fn first_capture(re: &Regex, source: &str) -> Option<String> {
    re.captures(source)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

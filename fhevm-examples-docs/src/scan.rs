//! Examples directory scanning.
//!
//! Every immediate subdirectory of the examples root is an example project.
//! Each `*.sol` file in its `contracts/` directory yields one
//! [`ParsedExample`]. Directory and file order is sorted by name so reruns
//! produce identical output.

use std::fs;
use std::path::{Path, PathBuf};

use crate::annotation::parse_contract_docs;
use crate::error::DocsError;

/// Extension of contract sources.
pub const CONTRACT_EXTENSION: &str = "sol";

/// Category used when a directory name has no hyphenated prefix.
pub const UNCATEGORIZED: &str = "uncategorized";

/// One contract source found in an example project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedExample {
    /// Example directory name
    pub name: String,
    /// Path to the contract source
    pub path: PathBuf,
    /// Title annotation (or file name)
    pub title: String,
    /// Description annotation (or empty)
    pub description: String,
    /// Category inferred from the directory name
    pub category: String,
    /// Chapter annotation (or `general`)
    pub chapter: String,
}

/// Category for an example directory: the text before the first hyphen.
///
/// `access-control-basic` is grouped under `access`. Names without a hyphen,
/// or starting with one, fall under [`UNCATEGORIZED`].
#[must_use]
pub fn category_for_dir(name: &str) -> &str {
    match name.split_once('-') {
        Some((prefix, _)) if !prefix.is_empty() => prefix,
        _ => UNCATEGORIZED,
    }
}

/// Contract sources directly inside `contracts_dir`, sorted by file name.
///
/// Returns an empty list if the directory does not exist.
///
/// # Errors
///
/// Returns `DocsError::Glob` if the directory cannot be walked.
pub fn contract_sources(contracts_dir: &Path) -> Result<Vec<PathBuf>, DocsError> {
    if !contracts_dir.is_dir() {
        return Ok(Vec::new());
    }

    let pattern = format!(
        "{}/*.{CONTRACT_EXTENSION}",
        glob::Pattern::escape(&contracts_dir.to_string_lossy())
    );
    let paths = glob::glob(&pattern).map_err(|e| DocsError::Glob {
        pattern: pattern.clone(),
        message: e.to_string(),
    })?;

    let mut sources = Vec::new();
    for entry in paths {
        let path = entry.map_err(|e| DocsError::Glob {
            pattern: pattern.clone(),
            message: e.to_string(),
        })?;
        if path.is_file() {
            sources.push(path);
        }
    }
    sources.sort();
    Ok(sources)
}

/// Immediate subdirectories of `examples_dir`, sorted by name.
///
/// # Errors
///
/// Returns `DocsError::Io` if the directory cannot be read.
pub fn example_dirs(examples_dir: &Path) -> Result<Vec<PathBuf>, DocsError> {
    let entries = fs::read_dir(examples_dir).map_err(|e| DocsError::io(examples_dir, e))?;

    let mut dirs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| DocsError::io(examples_dir, e))?;
        let path = entry.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }
    dirs.sort();
    Ok(dirs)
}

/// Parses every contract in every example project under `examples_dir`.
///
/// Projects without a `contracts/` directory are skipped.
///
/// # Errors
///
/// Returns `DocsError` if a directory cannot be listed or a source cannot be
/// read.
pub fn scan_examples(examples_dir: &Path) -> Result<Vec<ParsedExample>, DocsError> {
    let mut examples = Vec::new();

    for dir in example_dirs(examples_dir)? {
        let name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let contracts_dir = dir.join("contracts");
        if !contracts_dir.is_dir() {
            tracing::debug!(example = %name, "no contracts directory, skipping");
            continue;
        }

        for path in contract_sources(&contracts_dir)? {
            let docs = parse_contract_docs(&path)?;
            tracing::debug!(example = %name, contract = %path.display(), title = %docs.title, "parsed contract");
            examples.push(ParsedExample {
                category: category_for_dir(&name).to_string(),
                name: name.clone(),
                path,
                title: docs.title,
                description: docs.description,
                chapter: docs.chapter,
            });
        }
    }

    Ok(examples)
}

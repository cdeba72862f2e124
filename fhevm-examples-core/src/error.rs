//! Core error types for `fhevm-examples`
//!
//! Catalog loading and validation errors shared across the workspace.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Configuration Errors
// ============================================================================

/// Catalog loading and lookup errors.
///
/// Covers every failure mode between reading a catalog file and resolving a
/// category name against it.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The requested category is not in the catalog.
    #[error(
        "unknown category: {name}{}\navailable categories: {}",
        suggestion.as_ref().map_or_else(String::new, |s| format!(" (did you mean '{s}'?)")),
        available.join(", ")
    )]
    UnknownCategory {
        /// The name that was requested
        name: String,
        /// Every category id in catalog order
        available: Vec<String>,
        /// Closest known id, if one is near enough
        suggestion: Option<String>,
    },

    /// YAML parsing failed
    #[error("parse error in {path}{}: {message}", line.map_or_else(String::new, |l| format!(" (line {l})")))]
    ParseError {
        /// Path to the catalog file
        path: PathBuf,
        /// Line number where the error occurred (if available)
        line: Option<usize>,
        /// Error message from the parser
        message: String,
    },

    /// Referenced catalog file not found
    #[error("file not found: {path}")]
    MissingFile {
        /// Path to the missing file
        path: PathBuf,
    },

    /// The same category id appears twice
    #[error("duplicate category id '{id}'")]
    DuplicateCategory {
        /// The repeated id
        id: String,
    },

    /// The same example name appears twice within one category
    #[error("duplicate example '{example}' in category '{category}'")]
    DuplicateExample {
        /// Category containing the duplicate
        category: String,
        /// The repeated example name
        example: String,
    },

    /// A name cannot be used as a single directory component
    #[error("invalid {field} '{value}': {reason}")]
    InvalidName {
        /// Which kind of name was rejected (e.g. "category id")
        field: &'static str,
        /// The rejected value
        value: String,
        /// Why it was rejected
        reason: &'static str,
    },
}

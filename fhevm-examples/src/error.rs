//! Error types for `fhevm-examples`
//!
//! Domain errors from the catalog, the scaffolder and the documentation
//! generator are aggregated into [`FhevmExamplesError`], which maps each one
//! to a process exit code.

use std::path::PathBuf;
use thiserror::Error;

pub use fhevm_examples_core::error::ConfigError;
pub use fhevm_examples_docs::DocsError;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `fhevm-examples` CLI operations.
///
/// These codes follow Unix conventions: zero for success, non-zero for any
/// fatal condition.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Configuration error (unknown category, invalid catalog, missing template)
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (permission denied, disk full)
    pub const IO_ERROR: i32 = 3;

    /// Usage error (invalid arguments)
    pub const USAGE_ERROR: i32 = 64;

    /// Exit code after clap has reported a parse failure.
    ///
    /// Help and version requests succeed; real usage errors map to
    /// [`ExitCode::USAGE_ERROR`]. If the report itself could not be written,
    /// the run fails with [`ExitCode::IO_ERROR`].
    #[must_use]
    pub fn for_parse_error(err: &clap::Error, printed: &std::io::Result<()>) -> i32 {
        match printed {
            Err(_) => Self::IO_ERROR,
            Ok(()) if err.use_stderr() => Self::USAGE_ERROR,
            Ok(()) => Self::SUCCESS,
        }
    }
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `fhevm-examples` operations.
#[derive(Debug, Error)]
pub enum FhevmExamplesError {
    /// Catalog loading or lookup error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Project scaffolding error
    #[error(transparent)]
    Scaffold(#[from] ScaffoldError),

    /// Documentation generation error
    #[error(transparent)]
    Docs(#[from] DocsError),

    /// JSON rendering of command output failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FhevmExamplesError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::Scaffold(ScaffoldError::MissingTemplate { .. }) => {
                ExitCode::CONFIG_ERROR
            }
            Self::Scaffold(ScaffoldError::Io { .. }) | Self::Docs(_) => ExitCode::IO_ERROR,
            Self::Scaffold(ScaffoldError::Json(_)) | Self::Json(_) => ExitCode::ERROR,
        }
    }
}

// ============================================================================
// Scaffold Errors
// ============================================================================

/// Errors raised while materializing project trees.
///
/// Filesystem failures are not retried and partially created trees are left
/// in place.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Creating a directory or writing a file failed
    #[error("failed to write {}: {source}", path.display())]
    Io {
        /// Path being created or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// A base-template file is required but absent
    #[error("base template file not found: {}", path.display())]
    MissingTemplate {
        /// Expected template path
        path: PathBuf,
    },

    /// Manifest serialization failed
    #[error("failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScaffoldError {
    /// Wraps an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for `fhevm-examples` operations.
pub type Result<T> = std::result::Result<T, FhevmExamplesError>;

// ============================================================================
// Tests
// ============================================================================

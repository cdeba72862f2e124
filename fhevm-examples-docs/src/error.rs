//! Error types for documentation generation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during documentation generation.
#[derive(Debug, Error)]
pub enum DocsError {
    /// I/O error while reading sources or writing Markdown.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// File or directory being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// A directory glob could not be built or walked.
    #[error("failed to list {pattern}: {message}")]
    Glob {
        /// Pattern being expanded
        pattern: String,
        /// Error reported by the glob walker
        message: String,
    },
}

impl DocsError {
    /// Wraps an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

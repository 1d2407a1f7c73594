//! Error types for indexing and search.
//!
//! Library code returns [`SearchError`]; the binary wraps it in `anyhow`
//! for context-rich reporting.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using SearchError
pub type Result<T> = std::result::Result<T, SearchError>;

#[derive(Error, Debug)]
pub enum SearchError {
    // === Input errors ===
    /// The root handed to the walker does not exist
    #[error("{path} doesn't exist")]
    DirectoryNotFound { path: PathBuf },

    /// The root handed to the walker exists but is a file
    #[error("{path} is not a directory")]
    NotADirectory { path: PathBuf },

    /// A file path outside of the walked root
    #[error("{path} is not a descendant of {root}")]
    NotDescendant { path: PathBuf, root: PathBuf },

    /// Directory traversal failed part way through
    #[error("failed to walk {root}: {reason}")]
    Walk { root: PathBuf, reason: String },

    /// A file could not be read while building its index
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Misuse errors ===
    /// Context was requested from a file that was deliberately left unindexed
    #[error(
        "the file '{path}' was not indexed, so the line of the character at offset {offset} \
         cannot be read; this call was probably caused by a bug"
    )]
    NotIndexed { path: String, offset: usize },

    /// Character offset past the end of a file's text
    #[error("offset {offset} is out of bounds for '{path}' ({len} chars)")]
    OffsetOutOfBounds {
        path: String,
        offset: usize,
        len: usize,
    },

    /// A match referring to a file the directory never indexed
    #[error("no indexed file with relative path '{path}'")]
    FileNotInIndex { path: String },

    // === Configuration errors ===
    /// An exclusion glob failed to compile
    #[error("invalid exclusion pattern: {pattern}: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// The background indexing thread could not be started
    #[error("failed to spawn indexing thread: {0}")]
    Spawn(#[source] std::io::Error),

    /// Background indexing thread panicked before producing a result
    #[error("indexing thread panicked")]
    IndexingPanicked,
}

impl SearchError {
    /// Returns true if the error means the caller passed a bad root directory
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            SearchError::DirectoryNotFound { .. } | SearchError::NotADirectory { .. }
        )
    }

    /// Returns true if the error signals a logic bug in the caller
    pub fn is_misuse(&self) -> bool {
        matches!(
            self,
            SearchError::NotIndexed { .. }
                | SearchError::OffsetOutOfBounds { .. }
                | SearchError::FileNotInIndex { .. }
        )
    }

    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SearchError::Read {
            path: path.into(),
            source,
        }
    }
}

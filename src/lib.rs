//! # fts - In-memory full-text search
//!
//! fts indexes every file under a directory in memory and answers exact,
//! case-sensitive substring queries, reporting each occurrence as a relative
//! path plus a character offset.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`index`] - Per-file engines (Ukkonen suffix tree, naive scan) and the indexer
//! - [`search`] - [`IndexedDirectory`](search::IndexedDirectory) and query dispatch
//! - [`output`] - Result formatting for the command line
//! - [`repl`] - Interactive query loop
//! - [`utils`] - Directory walking, text helpers, config and progress
//! - [`error`] - [`SearchError`] and the crate [`Result`] alias
//!
//! ## Quick Start
//!
//! ```no_run
//! use fts::index::build_index;
//!
//! let directory = build_index("/path/to/project")?;
//! for m in directory.query_case_sensitive("fn main") {
//!     println!("{}: {}", m, directory.line_for(&m)?);
//! }
//! # Ok::<(), fts::SearchError>(())
//! ```
//!
//! Files up to a configurable size get a suffix tree, so a query costs time
//! proportional to its length plus the number of matches. Larger files are
//! scanned linearly, and binary or excluded files are never searched.

pub mod error;
pub mod index;
pub mod output;
pub mod repl;
pub mod search;
pub mod utils;

pub use error::{Result, SearchError};
pub use index::{IndexedFile, QueryMatch, SuffixTree};
pub use search::IndexedDirectory;

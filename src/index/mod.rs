//! Per-file indexes and the indexer that builds them
//!
//! - [`suffix_tree`] - Ukkonen suffix tree, the main engine
//! - [`naive`] - Linear scan, for oversized files and as a test oracle
//! - [`file`] - [`IndexedFile`], one file plus its engine
//! - [`strategy`] - Policy choosing an engine per file
//! - [`build`] - [`Indexer`], building every file under a directory

pub mod build;
pub mod file;
pub mod naive;
pub mod strategy;
pub mod suffix_tree;
pub mod types;

pub use build::{Indexer, IndexingHandle, IndexingProgress, NoProgress, build_index};
pub use file::IndexedFile;
pub use naive::NaiveIndex;
pub use strategy::{DefaultStrategy, IndexerStrategy, NaiveStrategy, SuffixTreeStrategy};
pub use suffix_tree::{SuffixTree, SuffixTreeBuilder};
pub use types::*;

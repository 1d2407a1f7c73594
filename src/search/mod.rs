//! Query dispatch across an indexed directory
//!
//! - [`directory`] - The [`IndexedDirectory`] holding every file's index
//! - [`listener`] - Callbacks receiving per-file matches

pub mod directory;
pub mod listener;

pub use directory::IndexedDirectory;
pub use listener::{MatchCollector, QueryMatchListener};

//! Per-file indexing policy
//!
//! The indexer asks an [`IndexerStrategy`] to turn each discovered file into
//! an [`IndexedFile`]. Any `Fn(&Directory, &Path) -> Result<IndexedFile>`
//! closure is a strategy, so tests and callers can plug in their own.

use crate::error::{Result, SearchError};
use crate::index::file::IndexedFile;
use crate::utils::{Directory, decode_lossy, is_binary};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Files matching these globs are never read or indexed
pub const DEFAULT_EXCLUDED_GLOBS: &[&str] = &["*.jar", "*.png", "*.jpg", "*.jpeg"];

/// Files longer than this (in chars) get a naive index by default
pub const DEFAULT_SUFFIX_TREE_MAX_CHARS: usize = 10_000;

/// Decides how one file is indexed
pub trait IndexerStrategy: Send + Sync {
    fn index_file(&self, root: &Directory, file: &Path) -> Result<IndexedFile>;
}

impl<F> IndexerStrategy for F
where
    F: Fn(&Directory, &Path) -> Result<IndexedFile> + Send + Sync,
{
    fn index_file(&self, root: &Directory, file: &Path) -> Result<IndexedFile> {
        self(root, file)
    }
}

/// Read a file as text, returning its relative path alongside
pub fn read_file_text(root: &Directory, file: &Path) -> Result<(String, String)> {
    let relative_path = root.relative_path_of(file)?;
    let content = fs::read(file).map_err(|err| SearchError::read(file, err))?;
    Ok((relative_path, decode_lossy(content)))
}

/// Exclusion by glob and binary sniffing, then a suffix tree for files up to
/// a size threshold and a naive index beyond it
#[derive(Debug, Clone)]
pub struct DefaultStrategy {
    suffix_tree_max_chars: Option<usize>,
    excluded: GlobSet,
    skip_binary: bool,
}

impl DefaultStrategy {
    /// Strategy with the default exclusions. `None` means every readable
    /// file gets a suffix tree.
    pub fn new(suffix_tree_max_chars: Option<usize>) -> Result<Self> {
        Self::with_exclusions(suffix_tree_max_chars, DEFAULT_EXCLUDED_GLOBS)
    }

    /// Strategy excluding files whose relative path matches any of `globs`
    pub fn with_exclusions<S: AsRef<str>>(
        suffix_tree_max_chars: Option<usize>,
        globs: &[S],
    ) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in globs {
            let pattern = pattern.as_ref();
            let glob = Glob::new(pattern).map_err(|err| SearchError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: err.kind().to_string(),
            })?;
            builder.add(glob);
        }
        let excluded = builder.build().map_err(|err| SearchError::InvalidPattern {
            pattern: globs
                .iter()
                .map(|g| g.as_ref())
                .collect::<Vec<_>>()
                .join(","),
            reason: err.to_string(),
        })?;

        Ok(Self {
            suffix_tree_max_chars,
            excluded,
            skip_binary: true,
        })
    }

    /// Whether files that look binary are left unindexed (default: true)
    pub fn skip_binary(mut self, skip: bool) -> Self {
        self.skip_binary = skip;
        self
    }

    pub fn suffix_tree_max_chars(&self) -> Option<usize> {
        self.suffix_tree_max_chars
    }

    fn exceeds_threshold(&self, text: &str) -> bool {
        match self.suffix_tree_max_chars {
            // Byte length bounds the char count from above
            Some(max) => text.len() > max && text.chars().count() > max,
            None => false,
        }
    }
}

impl IndexerStrategy for DefaultStrategy {
    fn index_file(&self, root: &Directory, file: &Path) -> Result<IndexedFile> {
        let relative_path = root.relative_path_of(file)?;
        if self.excluded.is_match(&relative_path) {
            debug!(path = %relative_path, "excluded by pattern");
            return Ok(IndexedFile::not_indexed(relative_path));
        }

        let content = fs::read(file).map_err(|err| SearchError::read(file, err))?;
        if self.skip_binary && is_binary(&content) {
            debug!(path = %relative_path, "skipping binary file");
            return Ok(IndexedFile::not_indexed(relative_path));
        }

        let text = decode_lossy(content);
        if self.exceeds_threshold(&text) {
            Ok(IndexedFile::naive(relative_path, text))
        } else {
            Ok(IndexedFile::suffix_tree(relative_path, text))
        }
    }
}

/// Always build a suffix tree
#[derive(Debug, Clone, Copy, Default)]
pub struct SuffixTreeStrategy;

impl IndexerStrategy for SuffixTreeStrategy {
    fn index_file(&self, root: &Directory, file: &Path) -> Result<IndexedFile> {
        let (relative_path, text) = read_file_text(root, file)?;
        Ok(IndexedFile::suffix_tree(relative_path, text))
    }
}

/// Always scan linearly
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveStrategy;

impl IndexerStrategy for NaiveStrategy {
    fn index_file(&self, root: &Directory, file: &Path) -> Result<IndexedFile> {
        let (relative_path, text) = read_file_text(root, file)?;
        Ok(IndexedFile::naive(relative_path, text))
    }
}

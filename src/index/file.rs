//! One file's index
//!
//! An [`IndexedFile`] pairs a relative path with whichever engine the
//! strategy picked for it. Queries return [`QueryMatch`]es carrying that
//! path.

use crate::error::{Result, SearchError};
use crate::index::naive::NaiveIndex;
use crate::index::suffix_tree::SuffixTree;
use crate::index::types::{CharOffset, IndexKind, QueryMatch};
use crate::utils::line_of_char;

#[derive(Debug, Clone)]
enum Engine {
    SuffixTree { tree: SuffixTree, text: String },
    Naive(NaiveIndex),
    NotIndexed,
}

/// A file of the indexed directory, ready to be queried
#[derive(Debug, Clone)]
pub struct IndexedFile {
    relative_path: String,
    engine: Engine,
}

impl IndexedFile {
    /// Index `text` with a suffix tree
    pub fn suffix_tree(relative_path: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        let tree = SuffixTree::new(&text);
        Self {
            relative_path: relative_path.into(),
            engine: Engine::SuffixTree { tree, text },
        }
    }

    /// Keep `text` for linear scanning
    pub fn naive(relative_path: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            relative_path: relative_path.into(),
            engine: Engine::Naive(NaiveIndex::new(text)),
        }
    }

    /// A file deliberately left out of the index; queries never match
    pub fn not_indexed(relative_path: impl Into<String>) -> Self {
        Self {
            relative_path: relative_path.into(),
            engine: Engine::NotIndexed,
        }
    }

    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }

    pub fn kind(&self) -> IndexKind {
        match self.engine {
            Engine::SuffixTree { .. } => IndexKind::SuffixTree,
            Engine::Naive(_) => IndexKind::Naive,
            Engine::NotIndexed => IndexKind::NotIndexed,
        }
    }

    /// The suffix tree backing this file, if any
    pub fn suffix_tree_index(&self) -> Option<&SuffixTree> {
        match &self.engine {
            Engine::SuffixTree { tree, .. } => Some(tree),
            _ => None,
        }
    }

    /// Indexed text, or `None` for an unindexed file
    pub fn text(&self) -> Option<&str> {
        match &self.engine {
            Engine::SuffixTree { text, .. } => Some(text),
            Engine::Naive(index) => Some(index.text()),
            Engine::NotIndexed => None,
        }
    }

    /// Length of the indexed text in characters
    pub fn char_len(&self) -> Option<usize> {
        match &self.engine {
            Engine::SuffixTree { tree, .. } => Some(tree.len()),
            Engine::Naive(index) => Some(index.text().chars().count()),
            Engine::NotIndexed => None,
        }
    }

    /// Every occurrence of `query` in this file
    pub fn query(&self, query: &str) -> Vec<QueryMatch> {
        let offsets = match &self.engine {
            Engine::SuffixTree { tree, .. } => tree.find_offsets(query),
            Engine::Naive(index) => index.find_offsets(query),
            Engine::NotIndexed => return Vec::new(),
        };

        offsets
            .into_iter()
            .map(|offset| QueryMatch::new(self.relative_path.as_str(), offset))
            .collect()
    }

    /// The line containing the character at `offset`.
    ///
    /// Asking an unindexed file for context is a caller bug and fails with
    /// [`SearchError::NotIndexed`].
    pub fn line_of_char(&self, offset: CharOffset) -> Result<String> {
        let text = self.text().ok_or_else(|| SearchError::NotIndexed {
            path: self.relative_path.clone(),
            offset,
        })?;

        line_of_char(text, offset)
            .map(str::to_owned)
            .ok_or_else(|| SearchError::OffsetOutOfBounds {
                path: self.relative_path.clone(),
                offset,
                len: text.chars().count(),
            })
    }
}

use crate::error::{Result, SearchError};
use crate::index::file::IndexedFile;
use crate::index::types::{IndexKind, QueryMatch};
use crate::search::listener::{MatchCollector, QueryMatchListener};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Every file produced by one indexing run
#[derive(Debug, Clone, Default)]
pub struct IndexedDirectory {
    files: Vec<IndexedFile>,
    /// Relative path to position in `files`; the first file wins on duplicates
    by_path: FxHashMap<String, usize>,
}

impl IndexedDirectory {
    pub fn new(files: Vec<IndexedFile>) -> Self {
        let mut by_path = FxHashMap::default();
        for (i, file) in files.iter().enumerate() {
            by_path
                .entry(file.relative_path().to_string())
                .or_insert(i);
        }
        Self { files, by_path }
    }

    pub fn files(&self) -> &[IndexedFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Find `query` in every file.
    ///
    /// Every occurrence is returned exactly once; the order across files is
    /// not specified.
    pub fn query_case_sensitive(&self, query: &str) -> Vec<QueryMatch> {
        let collector = MatchCollector::new();
        self.query_with(query, &collector);
        collector.into_matches()
    }

    /// Query every file concurrently, handing each file's non-empty match
    /// list to `listener`. Returns once every file has been queried.
    pub fn query_with(&self, query: &str, listener: &dyn QueryMatchListener) {
        if query.is_empty() {
            return;
        }

        self.files.par_iter().for_each(|file| {
            let matches = file.query(query);
            if !matches.is_empty() {
                listener.on_query_matches(matches);
            }
        });
    }

    /// The line of text a match was found on
    pub fn line_for(&self, query_match: &QueryMatch) -> Result<String> {
        self.file(&query_match.path)
            .ok_or_else(|| SearchError::FileNotInIndex {
                path: query_match.path.clone(),
            })?
            .line_of_char(query_match.offset)
    }

    /// Look up a file by its relative path
    pub fn file(&self, relative_path: &str) -> Option<&IndexedFile> {
        self.by_path
            .get(relative_path)
            .map(|&i| &self.files[i])
    }

    /// Number of files backed by each kind of index
    pub fn count_by_kind(&self, kind: IndexKind) -> usize {
        self.files.iter().filter(|f| f.kind() == kind).count()
    }
}

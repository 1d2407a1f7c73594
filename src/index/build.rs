use crate::error::{Result, SearchError};
use crate::index::file::IndexedFile;
use crate::index::strategy::{DEFAULT_SUFFIX_TREE_MAX_CHARS, DefaultStrategy, IndexerStrategy};
use crate::search::IndexedDirectory;
use crate::utils::Directory;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Receives indexing events. Called from worker threads.
pub trait IndexingProgress: Send + Sync {
    /// Called once, after the walk and before any file is indexed
    fn on_indexing_started(&self, _total_files: usize) {}

    /// Called once per file, as soon as its index is built
    fn on_file_indexed(&self, file: &IndexedFile);

    /// Called once, after every file has been indexed
    fn on_indexing_completed(&self, _directory: &IndexedDirectory) {}
}

/// Progress listener that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl IndexingProgress for NoProgress {
    fn on_file_indexed(&self, _file: &IndexedFile) {}
}

impl<F> IndexingProgress for F
where
    F: Fn(&IndexedFile) + Send + Sync,
{
    fn on_file_indexed(&self, file: &IndexedFile) {
        self(file)
    }
}

/// Builds an [`IndexedDirectory`] by indexing every file under a root
#[derive(Clone)]
pub struct Indexer {
    strategy: Arc<dyn IndexerStrategy>,
    parallel: bool,
    threads: usize,
}

impl Indexer {
    pub fn new(strategy: impl IndexerStrategy + 'static) -> Self {
        Self {
            strategy: Arc::new(strategy),
            parallel: true,
            threads: 0,
        }
    }

    /// Index files concurrently (default: true)
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Worker threads for parallel indexing; 0 uses the global rayon pool
    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Index every file under `directory` without reporting progress
    pub fn index(&self, directory: &Directory) -> Result<IndexedDirectory> {
        self.build_index(directory, &NoProgress)
    }

    /// Index every file under `directory`.
    ///
    /// `progress` sees exactly one `on_file_indexed` per file, then one
    /// `on_indexing_completed`. If any file cannot be indexed the first
    /// error is returned once all other files have finished.
    pub fn build_index(
        &self,
        directory: &Directory,
        progress: &dyn IndexingProgress,
    ) -> Result<IndexedDirectory> {
        let started = Instant::now();
        let files = directory.files()?;
        info!(
            root = %directory.root().display(),
            files = files.len(),
            parallel = self.parallel,
            "indexing"
        );
        progress.on_indexing_started(files.len());

        let index_one = |path: &PathBuf| -> Result<IndexedFile> {
            let file = self.strategy.index_file(directory, path)?;
            debug!(path = %file.relative_path(), kind = %file.kind(), "indexed");
            progress.on_file_indexed(&file);
            Ok(file)
        };

        let results: Vec<Result<IndexedFile>> = if self.parallel {
            self.run_parallel(|| files.par_iter().map(&index_one).collect())
        } else {
            files.iter().map(&index_one).collect()
        };

        let indexed = results.into_iter().collect::<Result<Vec<_>>>()?;
        let indexed_directory = IndexedDirectory::new(indexed);

        info!(
            files = indexed_directory.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "indexing complete"
        );
        progress.on_indexing_completed(&indexed_directory);

        Ok(indexed_directory)
    }

    /// Index `directory` on a background thread
    pub fn spawn(
        self,
        directory: Directory,
        progress: Arc<dyn IndexingProgress>,
    ) -> Result<IndexingHandle> {
        let handle = thread::Builder::new()
            .name("fts-indexer".to_string())
            .spawn(move || self.build_index(&directory, progress.as_ref()))
            .map_err(SearchError::Spawn)?;
        Ok(IndexingHandle { handle })
    }

    fn run_parallel<T: Send>(&self, op: impl FnOnce() -> T + Send) -> T {
        if self.threads == 0 {
            return op();
        }

        match rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .thread_name(|i| format!("fts-index-{i}"))
            .build()
        {
            Ok(pool) => pool.install(op),
            Err(err) => {
                warn!(threads = self.threads, error = %err, "falling back to global thread pool");
                op()
            }
        }
    }
}

/// A background indexing run
pub struct IndexingHandle {
    handle: JoinHandle<Result<IndexedDirectory>>,
}

impl IndexingHandle {
    /// Whether the run has finished (successfully or not)
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the run and return its result
    pub fn join(self) -> Result<IndexedDirectory> {
        self.handle
            .join()
            .map_err(|_| SearchError::IndexingPanicked)?
    }
}

/// Index `root` with the default strategy and threshold
pub fn build_index(root: impl AsRef<Path>) -> Result<IndexedDirectory> {
    let directory = Directory::open(root)?;
    let strategy = DefaultStrategy::new(Some(DEFAULT_SUFFIX_TREE_MAX_CHARS))?;
    Indexer::new(strategy).index(&directory)
}

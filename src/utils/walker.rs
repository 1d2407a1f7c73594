//! Directory traversal for indexing
//!
//! [`Directory`] validates the root once and then enumerates its regular
//! files recursively. By default every file is visited, hidden and
//! git-ignored ones included; [`WalkOptions`] turns the usual filters on.

use crate::error::{Result, SearchError};
use ignore::WalkBuilder;
use std::path::{Component, Path, PathBuf};

/// Filters applied while walking
#[derive(Debug, Clone, Copy, Default)]
pub struct WalkOptions {
    /// Honour `.gitignore`, `.ignore` and global git excludes
    pub respect_ignore_files: bool,
    /// Skip files and directories whose names start with a dot
    pub skip_hidden: bool,
}

/// A validated root directory to index
#[derive(Debug, Clone)]
pub struct Directory {
    root: PathBuf,
    options: WalkOptions,
}

impl Directory {
    /// Open `path` as an indexing root.
    ///
    /// Fails if the path does not exist or is not a directory.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::with_options(path, WalkOptions::default())
    }

    pub fn with_options(path: impl AsRef<Path>, options: WalkOptions) -> Result<Self> {
        let root = path.as_ref().to_path_buf();
        if !root.exists() {
            return Err(SearchError::DirectoryNotFound { path: root });
        }
        if !root.is_dir() {
            return Err(SearchError::NotADirectory { path: root });
        }
        Ok(Self { root, options })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Every regular file beneath the root, sorted by path
    pub fn files(&self) -> Result<Vec<PathBuf>> {
        let walker = WalkBuilder::new(&self.root)
            .standard_filters(false)
            .hidden(self.options.skip_hidden)
            .ignore(self.options.respect_ignore_files)
            .git_ignore(self.options.respect_ignore_files)
            .git_global(self.options.respect_ignore_files)
            .git_exclude(self.options.respect_ignore_files)
            .require_git(false)
            .sort_by_file_path(|a, b| a.cmp(b))
            .build();

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|err| SearchError::Walk {
                root: self.root.clone(),
                reason: err.to_string(),
            })?;
            let Some(file_type) = entry.file_type() else {
                continue;
            };
            // Links are not descended into, but a link to a regular file is
            // indexed under the link's own path
            let is_file = file_type.is_file()
                || (file_type.is_symlink() && entry.path().is_file());
            if is_file {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }

    /// Path of `file` relative to the root, with `/` separators
    pub fn relative_path_of(&self, file: &Path) -> Result<String> {
        let relative = file
            .strip_prefix(&self.root)
            .map_err(|_| SearchError::NotDescendant {
                path: file.to_path_buf(),
                root: self.root.clone(),
            })?;

        let parts: Vec<_> = relative
            .components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part.to_string_lossy()),
                _ => None,
            })
            .collect();
        Ok(parts.join("/"))
    }
}

//! Terminal progress for indexing runs
//!
//! [`BarProgress`] drives an indicatif bar from indexing events. Without the
//! `progress` feature the bar is a no-op shim with the same surface.

use crate::index::build::IndexingProgress;
use crate::index::file::IndexedFile;
use crate::search::IndexedDirectory;

#[cfg(feature = "progress")]
use indicatif::{ProgressBar, ProgressStyle};

#[cfg(not(feature = "progress"))]
use self::noop::{ProgressBar, ProgressStyle};

#[cfg(not(feature = "progress"))]
mod noop {
    #[derive(Clone)]
    pub struct ProgressBar;

    impl ProgressBar {
        pub fn no_length() -> Self {
            ProgressBar
        }

        pub fn hidden() -> Self {
            ProgressBar
        }

        pub fn set_length(&self, _len: u64) {}
        pub fn set_style(&self, _style: ProgressStyle) {}
        pub fn set_message(&self, _msg: impl Into<std::borrow::Cow<'static, str>>) {}
        pub fn println(&self, _msg: impl AsRef<str>) {}
        pub fn inc(&self, _delta: u64) {}
        pub fn finish_with_message(&self, _msg: impl Into<std::borrow::Cow<'static, str>>) {}
    }

    pub struct ProgressStyle;

    impl ProgressStyle {
        pub fn default_bar() -> Self {
            ProgressStyle
        }

        pub fn template(self, _template: &str) -> Result<Self, std::convert::Infallible> {
            Ok(self)
        }

        pub fn progress_chars(self, _chars: &str) -> Self {
            self
        }
    }
}

/// Progress bar advanced once per indexed file
pub struct BarProgress {
    bar: ProgressBar,
    /// Print a line naming each file as it finishes
    verbose: bool,
}

impl BarProgress {
    /// Bar sized once the indexer reports how many files it found
    pub fn new(verbose: bool) -> Self {
        let bar = ProgressBar::no_length();
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
        {
            bar.set_style(style.progress_chars("█▓▒░  "));
        }
        bar.set_message("Indexing files...");
        Self { bar, verbose }
    }

    /// A bar that draws nothing (for `--quiet` and non-interactive output)
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            verbose: false,
        }
    }
}

impl IndexingProgress for BarProgress {
    fn on_indexing_started(&self, total_files: usize) {
        self.bar.set_length(total_files as u64);
    }

    fn on_file_indexed(&self, file: &IndexedFile) {
        if self.verbose {
            self.bar
                .println(format!("Index built for {}", file.relative_path()));
        }
        self.bar.inc(1);
    }

    fn on_indexing_completed(&self, directory: &IndexedDirectory) {
        self.bar
            .finish_with_message(format!("Indexed {} files", directory.len()));
    }
}

#[cfg(all(test, feature = "progress"))]
mod tests {
    use super::*;

    #[test]
    fn test_bar_is_sized_when_indexing_starts() {
        let progress = BarProgress::hidden();
        assert_eq!(progress.bar.length(), None);

        progress.on_indexing_started(3);
        progress.on_file_indexed(&IndexedFile::not_indexed("a.jar"));
        assert_eq!(progress.bar.length(), Some(3));
        assert_eq!(progress.bar.position(), 1);
    }
}

//! End-to-end tests: walk a real directory, index it and query it.

use fts::index::{
    DefaultStrategy, IndexKind, Indexer, IndexingProgress, NaiveStrategy, NoProgress,
    SuffixTreeStrategy, build_index,
};
use fts::search::{IndexedDirectory, MatchCollector};
use fts::utils::{Directory, WalkOptions};
use fts::{IndexedFile, QueryMatch, SearchError};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;

/// `len` chars of text that never contains the letter 'h'
fn filler(len: usize) -> String {
    "lorem ipsum dolor sit amet, consectetur adipiscing elit. "
        .chars()
        .cycle()
        .take(len)
        .collect()
}

fn write(root: &Path, relative: &str, content: impl AsRef<[u8]>) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn sorted(mut matches: Vec<QueryMatch>) -> Vec<QueryMatch> {
    matches.sort();
    matches
}

fn two_file_fixture() -> TempDir {
    let tmp = tempfile::tempdir().unwrap();
    write(tmp.path(), "file-1.txt", format!("{}this file", filler(169)));
    write(tmp.path(), "file-2.txt", format!("{}this too", filler(56)));
    tmp
}

#[test]
fn test_finds_match_in_each_file() {
    let tmp = two_file_fixture();
    let directory = build_index(tmp.path()).unwrap();

    assert_eq!(
        sorted(directory.query_case_sensitive("this")),
        vec![
            QueryMatch::new("file-1.txt", 169),
            QueryMatch::new("file-2.txt", 56),
        ]
    );
    assert!(directory.query_case_sensitive("This").is_empty());
    assert!(directory.query_case_sensitive("").is_empty());
}

#[test]
fn test_engines_give_identical_results() {
    let tmp = two_file_fixture();
    write(tmp.path(), "nested/deeper/notes.md", "this and this and that\n");
    let root = Directory::open(tmp.path()).unwrap();

    let by_tree = Indexer::new(SuffixTreeStrategy).index(&root).unwrap();
    let by_scan = Indexer::new(NaiveStrategy).index(&root).unwrap();
    assert_eq!(by_tree.count_by_kind(IndexKind::SuffixTree), 3);
    assert_eq!(by_scan.count_by_kind(IndexKind::Naive), 3);

    for query in ["this", "th", "t", " and ", "lorem", "notes", "that\n", "zzz"] {
        assert_eq!(
            sorted(by_tree.query_case_sensitive(query)),
            sorted(by_scan.query_case_sensitive(query)),
            "query: {query:?}"
        );
    }
}

#[test]
fn test_nested_paths_use_forward_slashes() {
    let tmp = tempfile::tempdir().unwrap();
    write(tmp.path(), "a/b/c.txt", "needle");
    write(tmp.path(), "top.txt", "no match here");

    let directory = build_index(tmp.path()).unwrap();
    assert_eq!(
        directory.query_case_sensitive("needle"),
        vec![QueryMatch::new("a/b/c.txt", 0)]
    );
}

#[test]
fn test_excluded_and_binary_files_never_match() {
    let tmp = tempfile::tempdir().unwrap();
    write(tmp.path(), "app.jar", "secret");
    write(tmp.path(), "images/logo.PNG.png", "secret");
    write(tmp.path(), "blob.bin", b"secret\0\0\0");
    write(tmp.path(), "readme.txt", "the secret is out");

    let directory = build_index(tmp.path()).unwrap();
    assert_eq!(directory.len(), 4);
    assert_eq!(directory.count_by_kind(IndexKind::NotIndexed), 3);
    assert_eq!(
        directory.query_case_sensitive("secret"),
        vec![QueryMatch::new("readme.txt", 4)]
    );

    let err = directory
        .line_for(&QueryMatch::new("app.jar", 0))
        .unwrap_err();
    assert!(err.is_misuse());
}

#[test]
fn test_threshold_switches_to_naive_scan() {
    let tmp = tempfile::tempdir().unwrap();
    write(tmp.path(), "small.txt", "tiny word");
    write(tmp.path(), "large.txt", format!("{}word", filler(40)));

    let root = Directory::open(tmp.path()).unwrap();
    let directory = Indexer::new(DefaultStrategy::new(Some(20)).unwrap())
        .index(&root)
        .unwrap();

    assert_eq!(
        directory.file("small.txt").map(IndexedFile::kind),
        Some(IndexKind::SuffixTree)
    );
    assert_eq!(
        directory.file("large.txt").map(IndexedFile::kind),
        Some(IndexKind::Naive)
    );
    assert_eq!(
        sorted(directory.query_case_sensitive("word")),
        vec![
            QueryMatch::new("large.txt", 40),
            QueryMatch::new("small.txt", 5),
        ]
    );
}

#[test]
fn test_threshold_counts_chars_not_bytes() {
    let tmp = tempfile::tempdir().unwrap();
    // 10 chars, 20 bytes
    write(tmp.path(), "greek.txt", "αβγδεζηθικ");

    let root = Directory::open(tmp.path()).unwrap();
    let directory = Indexer::new(DefaultStrategy::new(Some(10)).unwrap())
        .index(&root)
        .unwrap();
    assert_eq!(directory.count_by_kind(IndexKind::SuffixTree), 1);
    assert_eq!(
        directory.query_case_sensitive("ικ"),
        vec![QueryMatch::new("greek.txt", 8)]
    );
}

#[test]
fn test_progress_fires_once_per_file() {
    let tmp = two_file_fixture();
    write(tmp.path(), "nested/three.txt", "3");

    struct Counter {
        files: AtomicUsize,
        completed: AtomicUsize,
    }

    impl IndexingProgress for Counter {
        fn on_file_indexed(&self, _file: &IndexedFile) {
            self.files.fetch_add(1, Ordering::SeqCst);
        }

        fn on_indexing_completed(&self, directory: &IndexedDirectory) {
            assert_eq!(directory.len(), self.files.load(Ordering::SeqCst));
            self.completed.fetch_add(1, Ordering::SeqCst);
        }
    }

    let counter = Counter {
        files: AtomicUsize::new(0),
        completed: AtomicUsize::new(0),
    };
    let root = Directory::open(tmp.path()).unwrap();
    let directory = Indexer::new(DefaultStrategy::new(None).unwrap())
        .build_index(&root, &counter)
        .unwrap();

    assert_eq!(directory.len(), 3);
    assert_eq!(counter.files.load(Ordering::SeqCst), 3);
    assert_eq!(counter.completed.load(Ordering::SeqCst), 1);
}

#[test]
fn test_background_indexing() {
    let tmp = two_file_fixture();
    let root = Directory::open(tmp.path()).unwrap();

    let seen = Arc::new(AtomicUsize::new(0));
    let progress = {
        let seen = Arc::clone(&seen);
        move |_: &IndexedFile| {
            seen.fetch_add(1, Ordering::SeqCst);
        }
    };

    let handle = Indexer::new(DefaultStrategy::new(None).unwrap())
        .threads(2)
        .spawn(root, Arc::new(progress))
        .unwrap();
    let directory = handle.join().unwrap();

    assert_eq!(seen.load(Ordering::SeqCst), 2);
    assert_eq!(directory.query_case_sensitive("this").len(), 2);
}

#[test]
fn test_listener_receives_each_matching_file_once() {
    let tmp = two_file_fixture();
    write(tmp.path(), "unrelated.txt", "nothing to see");
    let directory = build_index(tmp.path()).unwrap();

    let collector = MatchCollector::new();
    directory.query_with("this", &collector);
    assert_eq!(
        sorted(collector.into_matches()),
        vec![
            QueryMatch::new("file-1.txt", 169),
            QueryMatch::new("file-2.txt", 56),
        ]
    );
}

#[test]
fn test_line_for_match() {
    let tmp = tempfile::tempdir().unwrap();
    write(
        tmp.path(),
        "Main.kt",
        "fun main() {\r\n    println(\"hi\")\r\n}\r\n",
    );
    let directory = build_index(tmp.path()).unwrap();

    let m = directory.query_case_sensitive("println").remove(0);
    assert_eq!(directory.line_for(&m).unwrap(), "    println(\"hi\")");
}

#[test]
fn test_hidden_files_follow_walk_options() {
    let tmp = tempfile::tempdir().unwrap();
    write(tmp.path(), ".config/settings.txt", "marker");
    write(tmp.path(), "visible.txt", "marker");

    let all = Directory::open(tmp.path()).unwrap();
    let directory = Indexer::new(SuffixTreeStrategy).index(&all).unwrap();
    assert_eq!(directory.query_case_sensitive("marker").len(), 2);

    let visible = Directory::with_options(
        tmp.path(),
        WalkOptions {
            skip_hidden: true,
            ..WalkOptions::default()
        },
    )
    .unwrap();
    let directory = Indexer::new(SuffixTreeStrategy).index(&visible).unwrap();
    assert_eq!(
        directory.query_case_sensitive("marker"),
        vec![QueryMatch::new("visible.txt", 0)]
    );
}

#[cfg(unix)]
#[test]
fn test_symlinked_file_matches_are_found() {
    use std::os::unix::fs::symlink;

    let outside = tempfile::tempdir().unwrap();
    write(outside.path(), "shared.txt", "needle");

    let tmp = tempfile::tempdir().unwrap();
    write(tmp.path(), "plain.txt", "needle");
    symlink(outside.path().join("shared.txt"), tmp.path().join("link.txt")).unwrap();

    let directory = build_index(tmp.path()).unwrap();
    assert_eq!(directory.len(), 2);
    assert_eq!(
        sorted(directory.query_case_sensitive("needle")),
        vec![
            QueryMatch::new("link.txt", 0),
            QueryMatch::new("plain.txt", 0),
        ]
    );
}

#[test]
fn test_empty_directory() {
    let tmp = tempfile::tempdir().unwrap();
    let root = Directory::open(tmp.path()).unwrap();
    let directory = Indexer::new(SuffixTreeStrategy)
        .build_index(&root, &NoProgress)
        .unwrap();
    assert!(directory.is_empty());
    assert!(directory.query_case_sensitive("anything").is_empty());
}

#[test]
fn test_bad_roots_are_rejected() {
    let tmp = tempfile::tempdir().unwrap();

    let err = build_index(tmp.path().join("missing")).unwrap_err();
    assert!(matches!(err, SearchError::DirectoryNotFound { .. }));
    assert!(err.is_input_error());

    write(tmp.path(), "file.txt", "text");
    let err = build_index(tmp.path().join("file.txt")).unwrap_err();
    assert!(matches!(err, SearchError::NotADirectory { .. }));
}

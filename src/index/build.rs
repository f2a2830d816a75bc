//! Concurrent index construction pipeline.
//!
//! ```text
//! Discovery (1 thread)
//!   |  file paths via rendezvous channel
//!   v
//! Loader pool (N threads competing on the shared channel)
//!   |  FileRecord via rendezvous channel
//!   v
//! Indexer (1 thread, sole writer of the trie)
//! ```
//!
//! Both channels have capacity zero, so every hop is a blocking
//! handoff: a fast producer waits for a free consumer instead of
//! buffering whole files in memory. Channel disconnection is the only
//! completion signal, paired with a two-stage join: discovery and all
//! loaders first (their dropped senders close the content channel),
//! then the indexer, which returns the finished trie by value.

use crate::index::trie::Trie;
use crate::utils::{decode_lossy, extract_words};
use anyhow::{Context, Result, anyhow};
use crossbeam_channel::{Receiver, Sender};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use walkdir::WalkDir;

/// Default size of the loader pool.
pub const DEFAULT_WORKERS: usize = 10;

/// Tunables for a pipeline run.
pub struct IndexOptions {
    /// Number of concurrent file-reading workers.
    pub workers: usize,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
        }
    }
}

/// Counters reported after a build.
#[derive(Debug, Clone, Copy)]
pub struct BuildStats {
    /// Files whose contents reached the indexer.
    pub files_indexed: usize,
    /// Files that failed to read and were left out of the index.
    pub files_skipped: usize,
}

/// One fully loaded file, handed from a loader to the indexer and
/// discarded once tokenized.
struct FileRecord {
    path: PathBuf,
    content: Vec<u8>,
}

/// Walk `root` and feed every regular file path into the channel.
///
/// Traversal errors (unreadable directories, broken entries) are
/// logged and skipped; paths already emitted stand. Dropping the
/// sender on return is the pool's only end-of-input signal.
fn discover_files(root: PathBuf, paths: Sender<PathBuf>) {
    for entry in WalkDir::new(&root) {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_file() && paths.send(entry.into_path()).is_err() {
                    // Every loader is gone; nothing left to feed.
                    break;
                }
            }
            Err(err) => eprintln!("warning: skipping unreadable entry: {err}"),
        }
    }
}

/// Loader worker: read whole files, pass them on, skip failures.
fn load_files(paths: Receiver<PathBuf>, records: Sender<FileRecord>, skipped: &AtomicUsize) {
    for path in paths.iter() {
        match fs::read(&path) {
            Ok(content) => {
                if records.send(FileRecord { path, content }).is_err() {
                    break;
                }
            }
            Err(err) => {
                skipped.fetch_add(1, Ordering::Relaxed);
                eprintln!("warning: could not read {}: {err}", path.display());
            }
        }
    }
}

/// Indexer: drain the content channel, tokenize, populate the trie.
///
/// Runs as the single consumer, so the trie needs no locking while it
/// is being written. Returns the trie and the number of files indexed.
fn index_contents(records: Receiver<FileRecord>) -> (Trie, usize) {
    let mut trie = Trie::new();
    let mut files = 0usize;

    for record in records.iter() {
        files += 1;
        let path: Arc<Path> = Arc::from(record.path.as_path());
        let text = decode_lossy(&record.content);
        for word in extract_words(&text) {
            trie.insert(&word, Arc::clone(&path));
        }
    }

    (trie, files)
}

/// Build the word-to-file index for the tree rooted at `root`.
///
/// Every discovered file has either been indexed or skipped with a
/// logged warning by the time this returns; the caller receives sole
/// ownership of the trie, which is read-only from here on.
pub fn build_index(root: &Path, options: &IndexOptions) -> Result<(Trie, BuildStats)> {
    let workers = options.workers.max(1);
    let (path_tx, path_rx) = crossbeam_channel::bounded::<PathBuf>(0);
    let (record_tx, record_rx) = crossbeam_channel::bounded::<FileRecord>(0);
    let skipped = Arc::new(AtomicUsize::new(0));

    let discover_root = root.to_path_buf();
    let discovery = thread::Builder::new()
        .name("widx-discover".into())
        .spawn(move || discover_files(discover_root, path_tx))
        .context("failed to spawn discovery thread")?;

    let mut loaders = Vec::with_capacity(workers);
    for idx in 0..workers {
        let rx = path_rx.clone();
        let tx = record_tx.clone();
        let skipped = Arc::clone(&skipped);
        let handle = thread::Builder::new()
            .name(format!("widx-loader-{idx}"))
            .spawn(move || load_files(rx, tx, &skipped))
            .context("failed to spawn loader thread")?;
        loaders.push(handle);
    }

    let indexer = thread::Builder::new()
        .name("widx-indexer".into())
        .spawn(move || index_contents(record_rx))
        .context("failed to spawn indexer thread")?;

    // Drop the coordinator's endpoints so disconnection is driven
    // entirely by thread exits.
    drop(path_rx);
    drop(record_tx);

    // Barrier stage one: discovery and every loader. The content
    // channel cannot close before the last loader has exited, so no
    // in-flight record is ever dropped.
    discovery
        .join()
        .map_err(|_| anyhow!("discovery thread panicked"))?;
    for handle in loaders {
        handle
            .join()
            .map_err(|_| anyhow!("loader thread panicked"))?;
    }

    // Barrier stage two: the indexer drains what is left and hands the
    // trie back by value.
    let (trie, files_indexed) = indexer
        .join()
        .map_err(|_| anyhow!("indexer thread panicked"))?;

    let stats = BuildStats {
        files_indexed,
        files_skipped: skipped.load(Ordering::Relaxed),
    };
    Ok((trie, stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn names(results: Vec<Arc<Path>>) -> BTreeSet<String> {
        results
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    fn set(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn end_to_end_scenario() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("a.txt"), "Hello world").unwrap();
        fs::write(temp.path().join("b.txt"), "hello there").unwrap();

        let (trie, stats) = build_index(temp.path(), &IndexOptions::default()).unwrap();
        assert_eq!(stats.files_indexed, 2);
        assert_eq!(stats.files_skipped, 0);

        assert_eq!(names(trie.search("hello")), set(&["a.txt", "b.txt"]));
        assert_eq!(names(trie.search("wor")), set(&["a.txt"]));
        assert!(trie.search("xyz").is_empty());
        assert_eq!(names(trie.search("")), set(&["a.txt", "b.txt"]));
    }

    #[test]
    fn nested_directories_are_discovered() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("deep/er/still")).unwrap();
        fs::write(temp.path().join("top.txt"), "alpha").unwrap();
        fs::write(temp.path().join("deep/mid.txt"), "beta").unwrap();
        fs::write(temp.path().join("deep/er/still/leaf.txt"), "gamma").unwrap();

        let (trie, stats) = build_index(temp.path(), &IndexOptions::default()).unwrap();
        assert_eq!(stats.files_indexed, 3);
        assert_eq!(
            names(trie.search("")),
            set(&["top.txt", "mid.txt", "leaf.txt"])
        );
        assert_eq!(names(trie.search("gam")), set(&["leaf.txt"]));
    }

    #[test]
    fn empty_directory_builds_empty_index() {
        let temp = tempdir().unwrap();

        let (trie, stats) = build_index(temp.path(), &IndexOptions::default()).unwrap();
        assert_eq!(stats.files_indexed, 0);
        assert!(trie.search("").is_empty());
    }

    #[test]
    fn worker_count_does_not_change_results() {
        let temp = tempdir().unwrap();
        for i in 0..40 {
            let content = format!("file{i} shared token{i} Common WORDS here");
            fs::write(temp.path().join(format!("f{i}.txt")), content).unwrap();
        }

        let mut seen: Option<(BTreeSet<String>, BTreeSet<String>, usize)> = None;
        for workers in [1, 10, 100] {
            let (trie, stats) = build_index(temp.path(), &IndexOptions { workers }).unwrap();
            assert_eq!(stats.files_indexed, 40);

            let snapshot = (
                names(trie.search("shared")),
                names(trie.search("token1")),
                trie.word_count(),
            );
            match &seen {
                Some(first) => assert_eq!(*first, snapshot, "workers={workers}"),
                None => seen = Some(snapshot),
            }
        }
    }

    #[test]
    fn zero_workers_is_clamped_to_one() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("a.txt"), "solo").unwrap();

        let (trie, stats) = build_index(temp.path(), &IndexOptions { workers: 0 }).unwrap();
        assert_eq!(stats.files_indexed, 1);
        assert_eq!(names(trie.search("solo")), set(&["a.txt"]));
    }

    #[test]
    fn missing_root_yields_empty_index() {
        let temp = tempdir().unwrap();
        let gone = temp.path().join("does-not-exist");

        // Traversal errors are recoverable: logged, not returned.
        let (trie, stats) = build_index(&gone, &IndexOptions::default()).unwrap();
        assert_eq!(stats.files_indexed, 0);
        assert!(trie.search("").is_empty());
    }

    #[test]
    fn non_utf8_content_is_indexed_best_effort() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("bin.dat"), b"magic \xff\xfe header").unwrap();

        let (trie, stats) = build_index(temp.path(), &IndexOptions::default()).unwrap();
        assert_eq!(stats.files_indexed, 1);
        assert_eq!(names(trie.search("magic")), set(&["bin.dat"]));
        assert_eq!(names(trie.search("header")), set(&["bin.dat"]));
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_file_is_skipped_not_fatal() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempdir().unwrap();
        fs::write(temp.path().join("open.txt"), "visible words").unwrap();
        let blocked = temp.path().join("blocked.txt");
        fs::write(&blocked, "secret words").unwrap();
        fs::set_permissions(&blocked, fs::Permissions::from_mode(0o000)).unwrap();

        // Root ignores file modes; nothing to verify in that case.
        if fs::read(&blocked).is_ok() {
            return;
        }

        let (trie, stats) = build_index(temp.path(), &IndexOptions::default()).unwrap();
        assert_eq!(stats.files_indexed, 1);
        assert_eq!(stats.files_skipped, 1);
        assert!(trie.search("secret").is_empty());
        assert_eq!(names(trie.search("visible")), set(&["open.txt"]));
        // "words" lives in both files but only the readable one got in.
        assert_eq!(names(trie.search("words")), set(&["open.txt"]));
    }
}

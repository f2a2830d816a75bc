//! # widx - word-to-file prefix search
//!
//! widx scans a directory tree once, tokenizes every file's contents
//! into lowercase words, indexes each word against the files that
//! contain it, and answers prefix queries against the result.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`index`] - Concurrent build pipeline and the trie it populates
//! - [`query`] - Term lookup against a built trie
//! - [`output`] - Result formatting
//! - [`utils`] - Whitespace tokenization
//!
//! ## Quick Start
//!
//! ```ignore
//! use widx::index::{build_index, IndexOptions};
//! use widx::query;
//! use std::path::Path;
//!
//! // Build the index; the returned trie is read-only from here on.
//! let (trie, stats) = build_index(Path::new("."), &IndexOptions::default()).unwrap();
//! eprintln!("indexed {} files", stats.files_indexed);
//!
//! for path in query::search(&trie, "hello") {
//!     println!("- {}", path.display());
//! }
//! ```
//!
//! ## Pipeline
//!
//! The build phase runs one discovery thread, a pool of file-reading
//! workers, and a single indexer thread, wired together with blocking
//! rendezvous channels. A two-stage join guarantees the trie is fully
//! built before the first query reads it; after that barrier the trie
//! never changes.

pub mod index;
pub mod output;
pub mod query;
pub mod utils;

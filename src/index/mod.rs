//! Index construction and the trie it produces.
//!
//! - [`build`] - concurrent discovery/load/tokenize pipeline
//! - [`trie`] - the word-to-file prefix index

pub mod build;
pub mod trie;

pub use build::{BuildStats, IndexOptions, build_index};
pub use trie::Trie;

//! Query surface over a built index.
//!
//! The term is lowercased exactly the way indexing lowercases every
//! token, so matching is case-insensitive by construction.

use crate::index::Trie;
use std::path::Path;
use std::sync::Arc;

/// Look up every file containing a word that starts with `term`.
pub fn search(trie: &Trie, term: &str) -> Vec<Arc<Path>> {
    trie.search(&term.to_lowercase())
}

//! Word-to-file trie: the index itself.
//!
//! Each edge is labeled with one character; a node marked `is_word`
//! carries the set of files whose contents contained the word spelled
//! by the root-to-node path. Built once by a single writer, then read
//! freely with no locking.

use ahash::{AHashMap, AHashSet};
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Default)]
struct TrieNode {
    /// One child per distinct next character. Owned exclusively by
    /// this node, so the structure is a tree, never a graph.
    children: AHashMap<char, TrieNode>,
    is_word: bool,
    files: AHashSet<Arc<Path>>,
}

/// Prefix-searchable index mapping words to the files containing them.
#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
    words: usize,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct words inserted so far.
    pub fn word_count(&self) -> usize {
        self.words
    }

    /// Record that `file` contains `word`.
    ///
    /// Walks (creating on demand) one child per character of `word`,
    /// marks the final node terminal, and adds `file` to its set.
    /// Re-inserting the same (word, file) pair is a no-op.
    pub fn insert(&mut self, word: &str, file: Arc<Path>) {
        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node.children.entry(ch).or_default();
        }
        if !node.is_word {
            node.is_word = true;
            self.words += 1;
        }
        node.files.insert(file);
    }

    /// All files containing a word that starts with `prefix`.
    ///
    /// Walks the prefix character by character; a missing child means
    /// no indexed word has this prefix and the result is empty. The
    /// empty prefix matches the root and therefore every indexed file.
    /// The returned list is deduplicated and unordered.
    pub fn search(&self, prefix: &str) -> Vec<Arc<Path>> {
        let mut node = &self.root;
        for ch in prefix.chars() {
            match node.children.get(&ch) {
                Some(child) => node = child,
                None => return Vec::new(),
            }
        }

        // Explicit stack rather than recursion: chain depth is bounded
        // only by the longest word in the indexed files.
        let mut found: AHashSet<&Arc<Path>> = AHashSet::new();
        let mut stack = vec![node];
        while let Some(node) = stack.pop() {
            if node.is_word {
                found.extend(node.files.iter());
            }
            stack.extend(node.children.values());
        }

        found.into_iter().cloned().collect()
    }
}

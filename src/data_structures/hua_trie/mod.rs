// Copyright (c) 2025 Hua Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Hua Trie Implementation
//!
//! An in-memory word dictionary built on a prefix tree. It supports exact
//! membership, prefix completion and close matching within one character edit.
//!
//! # Example
//!
//! ```
//! use hua_lib::data_structures::hua_trie::HuaTrie;
//!
//! let mut trie = HuaTrie::new();
//! trie.insert("abate").unwrap();
//! trie.insert("abated").unwrap();
//! trie.insert("cat").unwrap();
//! trie.insert("bat").unwrap();
//!
//! assert!(trie.contains_word("abate"));
//! assert!(!trie.contains_word("abat"));
//!
//! let completions = trie.autocomplete("abat");
//! assert_eq!(completions.len(), 2);
//!
//! let matches = trie.close_matches("cat");
//! assert!(matches.contains("bat"));
//! assert!(matches.contains("cat"));
//! ```
//!
//! # Lifecycle
//!
//! A trie is populated through `insert` and then queried. Queries take `&self`
//! and never mutate, so a populated trie can be shared between threads behind
//! an `Arc`, or through [`SharedHuaTrie`] when loading and querying overlap.

mod autocomplete;
mod close_match;
mod config;
mod error;
pub mod node;
mod shared;

use std::borrow::Cow;
use std::collections::BTreeSet;

use tracing::trace;

pub use close_match::CandidateStrategy;
pub use config::{Alphabet, HuaTrieConfig};
pub use error::{HuaTrieError, HuaTrieResult};
pub use node::TrieNode;
pub use shared::SharedHuaTrie;

/// Hua Trie is a prefix tree over single characters holding a set of words.
///
/// Key features:
/// * Case-insensitive word lookup (configurable)
/// * Optional fixed alphabet
/// * Prefix completion
/// * Close matching within one insertion, deletion or substitution
#[derive(Debug, Clone)]
pub struct HuaTrie {
    /// The root sentinel node; never terminal
    root: TrieNode,

    /// Configuration options
    config: HuaTrieConfig,

    /// Number of distinct stored words
    word_count: usize,

    /// Number of nodes below the root
    node_count: usize,

    /// Every character labelling at least one edge
    edge_labels: BTreeSet<char>,
}

impl HuaTrie {
    /// Creates a new empty `HuaTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(HuaTrieConfig::default())
    }

    /// Creates a new empty `HuaTrie` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the trie.
    ///
    /// Without case sensitivity the alphabet is folded the same way as words,
    /// so an upper-case listing admits the lower-cased letters.
    pub fn with_config(mut config: HuaTrieConfig) -> Self {
        if !config.case_sensitive {
            config.alphabet = config.alphabet.to_lowercase();
        }

        Self {
            root: TrieNode::root(),
            config,
            word_count: 0,
            node_count: 0,
            edge_labels: BTreeSet::new(),
        }
    }

    /// Returns the configuration this trie was built with.
    pub fn config(&self) -> &HuaTrieConfig {
        &self.config
    }

    /// Inserts a word into the trie.
    ///
    /// Inserting a word that is already stored leaves the trie unchanged.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to insert.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - `true` if the word was new, `false` if it was already stored.
    /// * `Err(HuaTrieError)` - If the word is empty, too long, or uses a
    ///   character outside the configured alphabet.
    pub fn insert<W>(&mut self, word: W) -> HuaTrieResult<bool>
    where
        W: AsRef<str>,
    {
        let word = word.as_ref();
        if word.is_empty() {
            return Err(HuaTrieError::EmptyWord);
        }

        let processed_word = self.normalize(word);

        if processed_word.chars().count() > self.config.max_depth {
            return Err(HuaTrieError::WordTooLong {
                word: processed_word.into_owned(),
                max_depth: self.config.max_depth,
            });
        }

        if let Some(character) = processed_word
            .chars()
            .find(|c| !self.config.alphabet.admits(*c))
        {
            return Err(HuaTrieError::CharacterOutsideAlphabet {
                word: processed_word.into_owned(),
                character,
            });
        }

        // Walk the path, creating nodes as needed
        let mut node = &mut self.root;
        for c in processed_word.chars() {
            let (child, created) = node.child_or_insert(c);
            if created {
                self.node_count += 1;
                self.edge_labels.insert(c);
            }
            node = child;
        }

        let is_new = !node.is_terminal;
        node.is_terminal = true;

        if is_new {
            self.word_count += 1;
            trace!(word = %processed_word, "stored word");
        }

        Ok(is_new)
    }

    /// Inserts every word from an iterator.
    ///
    /// Stops at the first invalid word.
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - The number of words that were not already stored.
    /// * `Err(HuaTrieError)` - The first insertion error.
    pub fn insert_all<I, W>(&mut self, words: I) -> HuaTrieResult<usize>
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let mut added = 0;
        for word in words {
            if self.insert(word)? {
                added += 1;
            }
        }
        Ok(added)
    }

    /// Checks if a word is stored in the trie.
    ///
    /// A strict prefix of a stored word is not itself stored unless it was
    /// inserted separately.
    pub fn contains_word<W>(&self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        let processed_word = self.normalize(word.as_ref());
        self.contains_normalized(&processed_word)
    }

    /// Returns the number of distinct stored words.
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// Checks if no word has been stored.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Returns the number of nodes below the root.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Returns every character that labels at least one edge.
    pub fn edge_labels(&self) -> &BTreeSet<char> {
        &self.edge_labels
    }

    /// Applies case folding according to the configuration.
    pub(crate) fn normalize<'w>(&self, word: &'w str) -> Cow<'w, str> {
        if self.config.case_sensitive {
            Cow::Borrowed(word)
        } else {
            Cow::Owned(word.to_lowercase())
        }
    }

    /// Membership walk for a word that is already normalized.
    pub(crate) fn contains_normalized(&self, word: &str) -> bool {
        self.find_node(word).is_some_and(|node| node.is_terminal)
    }

    /// Returns the node reached by following `prefix` from the root.
    ///
    /// `prefix` must already be normalized. The empty prefix yields the root.
    pub(crate) fn find_node(&self, prefix: &str) -> Option<&TrieNode> {
        prefix
            .chars()
            .try_fold(&self.root, |node, c| node.child(c))
    }

    /// Collects every stored word in the subtree below `node`.
    ///
    /// `path` holds the characters from the root to `node` and is restored
    /// before returning.
    pub(crate) fn collect_words(node: &TrieNode, path: &mut String, words: &mut BTreeSet<String>) {
        if node.is_terminal {
            words.insert(path.clone());
        }

        for child in node.children() {
            path.push(child.character);
            Self::collect_words(child, path, words);
            path.pop();
        }
    }
}

impl Default for HuaTrie {
    fn default() -> Self {
        Self::new()
    }
}

// Copyright (c) 2025 Hua Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the Hua Trie.
//!
//! Nodes own their children outright, so the structure is a plain rooted tree:
//! every node is reachable by exactly one character path from the root.

use std::collections::hash_map::Entry;

use fnv::FnvHashMap;

/// Character stored in the root node. It is never compared against input.
pub const ROOT_SENTINEL: char = '\0';

/// A node in the Hua Trie.
///
/// Each node represents one character of a word path. Terminal nodes mark the
/// end of a stored word.
#[derive(Debug, Clone)]
pub struct TrieNode {
    /// The character on the edge leading into this node
    pub character: char,

    /// Map of characters to child nodes
    pub children: FnvHashMap<char, TrieNode>,

    /// Whether the path to this node is a stored word
    pub is_terminal: bool,
}

impl TrieNode {
    /// Creates a new non-terminal node for `character`.
    pub fn new(character: char) -> Self {
        Self {
            character,
            children: FnvHashMap::default(),
            is_terminal: false,
        }
    }

    /// Creates the root sentinel node.
    pub fn root() -> Self {
        Self::new(ROOT_SENTINEL)
    }

    /// Returns the child labelled `character`, if any.
    pub fn child(&self, character: char) -> Option<&TrieNode> {
        self.children.get(&character)
    }

    /// Iterates over the direct children in unspecified order.
    pub fn children(&self) -> impl Iterator<Item = &TrieNode> {
        self.children.values()
    }

    /// Returns the child labelled `character`, creating it when missing.
    ///
    /// The flag is `true` when a new node was created.
    pub(crate) fn child_or_insert(&mut self, character: char) -> (&mut TrieNode, bool) {
        match self.children.entry(character) {
            Entry::Occupied(entry) => (entry.into_mut(), false),
            Entry::Vacant(entry) => (entry.insert(TrieNode::new(character)), true),
        }
    }

    /// Returns `true` if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

impl Default for TrieNode {
    fn default() -> Self {
        Self::root()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_empty_sentinel() {
        let root = TrieNode::default();
        assert_eq!(root.character, ROOT_SENTINEL);
        assert!(!root.is_terminal);
        assert!(root.is_leaf());
    }

    #[test]
    fn test_child_or_insert_reuses_existing_child() {
        let mut root = TrieNode::root();

        let (child, created) = root.child_or_insert('a');
        assert!(created);
        child.is_terminal = true;

        let (child, created) = root.child_or_insert('a');
        assert!(!created);
        assert!(child.is_terminal);

        assert_eq!(root.children.len(), 1);
        assert_eq!(root.child('a').map(|c| c.character), Some('a'));
        assert!(root.child('b').is_none());
    }
}

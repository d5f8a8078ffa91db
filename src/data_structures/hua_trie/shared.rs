// Copyright (c) 2025 Hua Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Thread-safe handle around a Hua Trie.
//!
//! Insertions take the exclusive lock; every query takes the shared lock, so
//! any number of readers run together once loading has finished.

use std::collections::BTreeSet;
use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard};

use super::{HuaTrie, HuaTrieConfig, HuaTrieResult};

/// A cloneable, lock-guarded [`HuaTrie`].
#[derive(Debug, Clone, Default)]
pub struct SharedHuaTrie {
    inner: Arc<RwLock<HuaTrie>>,
}

impl SharedHuaTrie {
    /// Creates an empty shared trie with the given configuration.
    pub fn with_config(config: HuaTrieConfig) -> Self {
        Self::from(HuaTrie::with_config(config))
    }

    /// Inserts a word under the exclusive lock.
    pub fn insert<W>(&self, word: W) -> HuaTrieResult<bool>
    where
        W: AsRef<str>,
    {
        self.inner.write().insert(word)
    }

    /// Checks if a word is stored.
    pub fn contains_word<W>(&self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        self.inner.read().contains_word(word)
    }

    /// Finds all stored words starting with `prefix`.
    pub fn autocomplete<P>(&self, prefix: P) -> BTreeSet<String>
    where
        P: AsRef<str>,
    {
        self.inner.read().autocomplete(prefix)
    }

    /// Finds stored words within one edit of `word`.
    pub fn close_matches<W>(&self, word: W) -> BTreeSet<String>
    where
        W: AsRef<str>,
    {
        self.inner.read().close_matches(word)
    }

    /// Returns the number of stored words.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Checks if no word has been stored.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Holds the shared lock for a batch of queries.
    pub fn read(&self) -> RwLockReadGuard<'_, HuaTrie> {
        self.inner.read()
    }
}

impl From<HuaTrie> for SharedHuaTrie {
    fn from(trie: HuaTrie) -> Self {
        Self {
            inner: Arc::new(RwLock::new(trie)),
        }
    }
}

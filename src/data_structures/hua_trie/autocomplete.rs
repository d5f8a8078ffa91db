// Copyright (c) 2025 Hua Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Prefix completion for the Hua Trie.

use std::collections::BTreeSet;

use tracing::debug;

use super::HuaTrie;

impl HuaTrie {
    /// Finds all stored words that start with a given prefix.
    ///
    /// The prefix itself is included when it is a stored word. An unknown
    /// prefix yields an empty set, and the empty prefix yields every word.
    ///
    /// # Arguments
    ///
    /// * `prefix` - The prefix to complete.
    pub fn autocomplete<P>(&self, prefix: P) -> BTreeSet<String>
    where
        P: AsRef<str>,
    {
        let processed_prefix = self.normalize(prefix.as_ref());
        let mut words = BTreeSet::new();

        if let Some(anchor) = self.find_node(&processed_prefix) {
            let mut path = processed_prefix.into_owned();
            Self::collect_words(anchor, &mut path, &mut words);
        }

        debug!(prefix = prefix.as_ref(), completions = words.len(), "autocomplete");
        words
    }
}

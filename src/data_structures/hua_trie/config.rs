// Copyright (c) 2025 Hua Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration for the Hua Trie.

use std::collections::BTreeSet;

use super::close_match::CandidateStrategy;

/// The set of characters a trie accepts in stored words.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Alphabet {
    /// Any character may appear in a word.
    #[default]
    Unrestricted,

    /// Only the listed characters may appear in a word.
    Restricted(BTreeSet<char>),
}

impl Alphabet {
    /// Builds a fixed alphabet from the given characters.
    pub fn restricted<I>(chars: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        Alphabet::Restricted(chars.into_iter().collect())
    }

    /// The lower-case ASCII letters `a` to `z`.
    pub fn english_lowercase() -> Self {
        Self::restricted('a'..='z')
    }

    /// Parses an alphabet listing. An empty listing means unrestricted.
    pub fn from_listing(listing: &str) -> Self {
        if listing.is_empty() {
            Alphabet::Unrestricted
        } else {
            Self::restricted(listing.chars())
        }
    }

    /// Returns the alphabet with every character lower-cased.
    pub fn to_lowercase(&self) -> Self {
        match self {
            Alphabet::Unrestricted => Alphabet::Unrestricted,
            Alphabet::Restricted(chars) => {
                Self::restricted(chars.iter().flat_map(|c| c.to_lowercase()))
            }
        }
    }

    /// Returns `true` if `character` may appear in a stored word.
    pub fn admits(&self, character: char) -> bool {
        match self {
            Alphabet::Unrestricted => true,
            Alphabet::Restricted(chars) => chars.contains(&character),
        }
    }
}

/// Configuration options for the Hua Trie.
#[derive(Debug, Clone)]
pub struct HuaTrieConfig {
    /// Whether to use case-sensitive words
    pub case_sensitive: bool,

    /// Maximum length of a stored word. Close-match queries longer than this
    /// plus one are answered without generating candidates.
    pub max_depth: usize,

    /// Characters allowed in stored words
    pub alphabet: Alphabet,

    /// How close-match candidates are generated
    pub candidate_strategy: CandidateStrategy,
}

impl HuaTrieConfig {
    /// Create a new default configuration.
    ///
    /// Default values:
    /// - case_sensitive: false
    /// - max_depth: 64
    /// - alphabet: unrestricted
    /// - candidate_strategy: exhaustive
    pub fn new() -> Self {
        Self {
            case_sensitive: false,
            max_depth: 64,
            alphabet: Alphabet::Unrestricted,
            candidate_strategy: CandidateStrategy::Exhaustive,
        }
    }

    /// Set whether words are compared case-sensitively.
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Set the maximum word length accepted by `insert`.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Restrict stored words to an alphabet.
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Select the close-match candidate strategy.
    pub fn with_candidate_strategy(mut self, strategy: CandidateStrategy) -> Self {
        self.candidate_strategy = strategy;
        self
    }
}

impl Default for HuaTrieConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_listing() {
        assert_eq!(Alphabet::from_listing(""), Alphabet::Unrestricted);

        let alphabet = Alphabet::from_listing("abc'");
        assert!(alphabet.admits('a'));
        assert!(alphabet.admits('\''));
        assert!(!alphabet.admits('d'));
        assert!(Alphabet::Unrestricted.admits('é'));
    }

    #[test]
    fn test_alphabet_to_lowercase() {
        let folded = Alphabet::from_listing("AbC").to_lowercase();
        assert_eq!(folded, Alphabet::restricted(['a', 'b', 'c']));
        assert_eq!(Alphabet::Unrestricted.to_lowercase(), Alphabet::Unrestricted);
    }

    #[test]
    fn test_english_lowercase() {
        let alphabet = Alphabet::english_lowercase();
        assert!(alphabet.admits('a'));
        assert!(alphabet.admits('z'));
        assert!(!alphabet.admits('A'));
        assert!(!alphabet.admits('-'));
    }

    #[test]
    fn test_builder() {
        let config = HuaTrieConfig::new()
            .with_case_sensitive(true)
            .with_max_depth(8)
            .with_alphabet(Alphabet::english_lowercase())
            .with_candidate_strategy(CandidateStrategy::TrieGuided);

        assert!(config.case_sensitive);
        assert_eq!(config.max_depth, 8);
        assert_eq!(config.alphabet, Alphabet::english_lowercase());
        assert_eq!(config.candidate_strategy, CandidateStrategy::TrieGuided);
    }
}

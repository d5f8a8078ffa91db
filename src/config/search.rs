//! Search configuration module.
//!
//! This module defines the trie settings: case folding, word length limit,
//! alphabet, and the close-match candidate strategy.

use super::{ConfigResult, Validate};
use crate::data_structures::hua_trie::{Alphabet, CandidateStrategy, HuaTrieConfig};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Upper bound accepted for `max_depth`.
const MAX_DEPTH_LIMIT: usize = 1024;

/// Trie and query configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Whether words are compared case-sensitively
    pub case_sensitive: bool,

    /// Maximum word length accepted when loading
    pub max_depth: usize,

    /// Characters allowed in words; empty means any character
    pub alphabet: String,

    /// How close-match candidates are generated
    pub candidate_strategy: CandidateStrategy,
}

impl Default for SearchConfig {
    fn default() -> Self {
        let trie = HuaTrieConfig::default();
        Self {
            case_sensitive: trie.case_sensitive,
            max_depth: trie.max_depth,
            alphabet: String::new(),
            candidate_strategy: trie.candidate_strategy,
        }
    }
}

impl SearchConfig {
    /// Builds the trie configuration described by this section.
    ///
    /// Without case sensitivity the alphabet listing is lower-cased to match
    /// the folded words.
    pub fn to_trie_config(&self) -> HuaTrieConfig {
        let mut alphabet = Alphabet::from_listing(&self.alphabet);
        if !self.case_sensitive {
            alphabet = alphabet.to_lowercase();
        }

        HuaTrieConfig::new()
            .with_case_sensitive(self.case_sensitive)
            .with_max_depth(self.max_depth)
            .with_alphabet(alphabet)
            .with_candidate_strategy(self.candidate_strategy)
    }
}

impl Validate for SearchConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_depth == 0 || self.max_depth > MAX_DEPTH_LIMIT {
            return Err(ConfigError::ValueOutOfRange {
                key: "search.max_depth".to_string(),
                message: format!("must be between 1 and {MAX_DEPTH_LIMIT}"),
            });
        }

        if self.alphabet.chars().any(char::is_whitespace) {
            return Err(ConfigError::ValidationError(
                "search.alphabet must not contain whitespace".to_string(),
            ));
        }

        Ok(())
    }
}

// Copyright (c) 2025 Hua Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Hua Trie.
//!
//! Every variant is an invalid-argument condition raised while inserting a
//! word. Queries never fail.

/// Errors that can occur when inserting into a Hua Trie.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HuaTrieError {
    /// Error when an empty word is provided.
    #[error("Empty word not allowed")]
    EmptyWord,

    /// Error when a word exceeds the maximum depth allowed.
    #[error("Word '{word}' exceeds maximum trie depth of {max_depth}")]
    WordTooLong {
        /// The word that was too long.
        word: String,
        /// The maximum allowed depth.
        max_depth: usize,
    },

    /// Error when a word contains a character the trie's alphabet rejects.
    #[error("Word '{word}' contains '{character}', which is outside the trie alphabet")]
    CharacterOutsideAlphabet {
        /// The offending word.
        word: String,
        /// The first character not admitted by the alphabet.
        character: char,
    },
}

/// Result type for Hua Trie operations
pub type HuaTrieResult<T> = Result<T, HuaTrieError>;

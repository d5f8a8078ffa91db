//! Error module for Hua.
//!
//! This module provides the crate-level error type. Errors raised by the trie
//! itself and by configuration loading convert into it with `?`.

use std::path::PathBuf;
use thiserror::Error;

use crate::data_structures::hua_trie::HuaTrieError;

pub mod config;

/// Result type alias used throughout Hua.
pub type HuaResult<T> = Result<T, HuaError>;

/// Core error enum for Hua.
#[derive(Error, Debug)]
pub enum HuaError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// A word was rejected by the trie.
    #[error("Dictionary error: {0}")]
    Trie(#[from] HuaTrieError),

    /// A word list contained a word the trie rejected.
    #[error("Invalid word on line {line}: {source}")]
    InvalidWord {
        /// One-based line number in the word list
        line: usize,
        /// Why the trie rejected the word
        source: HuaTrieError,
    },

    /// A word list line is not valid UTF-8.
    #[error("Line {line} of the word list is not valid UTF-8")]
    InvalidEncoding {
        /// One-based line number in the word list
        line: usize,
    },

    /// The word list file does not exist.
    #[error("Dictionary file not found: {0}")]
    DictionaryNotFound(PathBuf),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/Deserialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}

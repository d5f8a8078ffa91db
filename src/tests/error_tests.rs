//! Tests for the error module.
//!
//! This module contains tests for error conversion and display.

use crate::data_structures::hua_trie::HuaTrieError;
use crate::error::config::ConfigError;
use crate::error::{HuaError, HuaResult};
use std::path::PathBuf;

fn insert_into_empty_word() -> HuaResult<bool> {
    let mut trie = crate::data_structures::HuaTrie::new();
    Ok(trie.insert("")?)
}

/// Test that trie errors convert with `?`.
#[test]
fn test_trie_error_conversion() {
    let err = insert_into_empty_word().unwrap_err();
    assert!(matches!(err, HuaError::Trie(HuaTrieError::EmptyWord)));
    assert_eq!(err.to_string(), "Dictionary error: Empty word not allowed");
}

/// Test that nested errors work correctly.
#[test]
fn test_nested_errors() {
    let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
    let hua_error = HuaError::from(io_error);

    let error_string = format!("{hua_error}");
    assert!(error_string.contains("access denied"));
}

/// Test that invalid words keep their source error.
#[test]
fn test_invalid_word_source() {
    let err = HuaError::InvalidWord {
        line: 7,
        source: HuaTrieError::EmptyWord,
    };

    assert_eq!(err.to_string(), "Invalid word on line 7: Empty word not allowed");
    let source = std::error::Error::source(&err).map(|s| s.to_string());
    assert_eq!(source.as_deref(), Some("Empty word not allowed"));
}

/// Test configuration error display.
#[test]
fn test_config_error_display() {
    let err = HuaError::from(ConfigError::FileNotFound(PathBuf::from("hua.toml")));
    assert_eq!(
        err.to_string(),
        "Configuration error: Configuration file not found: hua.toml"
    );

    let err = HuaError::DictionaryNotFound(PathBuf::from("words.txt"));
    assert_eq!(err.to_string(), "Dictionary file not found: words.txt");

    let err = HuaError::InvalidEncoding { line: 7 };
    assert_eq!(err.to_string(), "Line 7 of the word list is not valid UTF-8");
}

//! Hua Library
//!
//! This library contains the core components of Hua, an in-memory word
//! dictionary built on a trie. It answers exact membership queries, prefix
//! completion, and close matching within one character edit.
//!
//! # Architecture
//!
//! - [`data_structures::hua_trie`] holds the trie and its two searches
//! - [`dictionary`] feeds word lists into a trie
//! - [`config`] loads and validates layered configuration
//! - [`error`] defines the crate-level error type

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod dictionary;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Hua.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

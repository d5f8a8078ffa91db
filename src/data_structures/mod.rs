//! Data structures for Hua.
//!
//! This module contains the in-memory dictionary structures used by the
//! library and the `hua` binary.

pub mod hua_trie;

// Re-export common data structures
pub use hua_trie::{HuaTrie, HuaTrieConfig, HuaTrieError, HuaTrieResult, SharedHuaTrie};

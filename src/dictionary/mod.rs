//! Dictionary loading for Hua.
//!
//! Word lists are plain text: any run of whitespace separates words, and each
//! word is inserted once, in file order.

mod loader;

pub use loader::{DictionaryLoader, LoadReport};

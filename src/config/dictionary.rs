//! Dictionary configuration module.
//!
//! This module defines where the word list is read from and how invalid
//! entries are treated.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Word list configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DictionaryConfig {
    /// Path to a whitespace-delimited word list
    pub path: Option<PathBuf>,

    /// Whether an invalid word aborts loading instead of being skipped
    pub strict: bool,
}

impl Validate for DictionaryConfig {
    fn validate(&self) -> ConfigResult<()> {
        if let Some(path) = &self.path {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::ValidationError(
                    "dictionary path must not be empty".to_string(),
                ));
            }
        }
        Ok(())
    }
}

// Copyright (c) 2025 Hua Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Bulk insertion of word lists into a Hua Trie.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use serde::Serialize;
use tracing::{info, warn};

use crate::data_structures::hua_trie::HuaTrie;
use crate::error::{HuaError, HuaResult};

/// Counts gathered while loading a word list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Whitespace-separated tokens read
    pub tokens: usize,

    /// Tokens stored as new words
    pub inserted: usize,

    /// Tokens that were already stored
    pub duplicates: usize,

    /// Tokens the trie rejected
    pub rejected: usize,
}

/// Feeds word lists into a trie.
#[derive(Debug)]
pub struct DictionaryLoader<'t> {
    trie: &'t mut HuaTrie,
    strict: bool,
}

impl<'t> DictionaryLoader<'t> {
    /// Creates a lenient loader for `trie`.
    pub fn new(trie: &'t mut HuaTrie) -> Self {
        Self {
            trie,
            strict: false,
        }
    }

    /// Set whether the first invalid word aborts loading.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Loads the word list at `path`.
    ///
    /// # Returns
    ///
    /// * `Ok(LoadReport)` - Counts for the loaded file.
    /// * `Err(HuaError::DictionaryNotFound)` - If the file does not exist.
    /// * `Err(HuaError)` - On other I/O failures, or an invalid word in strict mode.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> HuaResult<LoadReport> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => HuaError::DictionaryNotFound(path.to_path_buf()),
            _ => HuaError::Io(e),
        })?;

        let report = self.load_reader(BufReader::new(file))?;
        info!(
            path = %path.display(),
            words = self.trie.len(),
            inserted = report.inserted,
            duplicates = report.duplicates,
            rejected = report.rejected,
            "dictionary loaded"
        );
        Ok(report)
    }

    /// Loads whitespace-separated words from `reader`.
    ///
    /// A line that is not valid UTF-8 is skipped and counted as one rejected
    /// token, or aborts the load in strict mode.
    pub fn load_reader<R: BufRead>(&mut self, mut reader: R) -> HuaResult<LoadReport> {
        let mut report = LoadReport::default();
        let mut buffer = Vec::new();
        let mut line_number = 0;

        loop {
            buffer.clear();
            if reader.read_until(b'\n', &mut buffer)? == 0 {
                break;
            }
            line_number += 1;

            let Ok(line) = std::str::from_utf8(&buffer) else {
                if self.strict {
                    return Err(HuaError::InvalidEncoding { line: line_number });
                }
                warn!(line = line_number, "skipping line that is not valid UTF-8");
                report.rejected += 1;
                continue;
            };

            for token in line.split_whitespace() {
                report.tokens += 1;
                match self.trie.insert(token) {
                    Ok(true) => report.inserted += 1,
                    Ok(false) => report.duplicates += 1,
                    Err(source) if self.strict => {
                        return Err(HuaError::InvalidWord {
                            line: line_number,
                            source,
                        })
                    }
                    Err(source) => {
                        warn!(line = line_number, error = %source, "skipping word");
                        report.rejected += 1;
                    }
                }
            }
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structures::hua_trie::{Alphabet, HuaTrieConfig, HuaTrieError};
    use std::io::Cursor;

    #[test]
    fn test_load_reader_counts() {
        let mut trie = HuaTrie::new();
        let text = "abate abates\n  abated\tabating\n\nabate\n";

        let report = DictionaryLoader::new(&mut trie)
            .load_reader(Cursor::new(text))
            .unwrap();

        assert_eq!(
            report,
            LoadReport {
                tokens: 5,
                inserted: 4,
                duplicates: 1,
                rejected: 0,
            }
        );
        assert_eq!(trie.autocomplete("abat").len(), 4);
    }

    #[test]
    fn test_lenient_loader_skips_invalid_words() {
        let config = HuaTrieConfig::new().with_alphabet(Alphabet::english_lowercase());
        let mut trie = HuaTrie::with_config(config);

        let report = DictionaryLoader::new(&mut trie)
            .load_reader(Cursor::new("cat\ndon't\ndog"))
            .unwrap();

        assert_eq!(report.inserted, 2);
        assert_eq!(report.rejected, 1);
        assert!(trie.contains_word("dog"));
    }

    #[test]
    fn test_strict_loader_reports_line() {
        let config = HuaTrieConfig::new().with_max_depth(4);
        let mut trie = HuaTrie::with_config(config);

        let err = DictionaryLoader::new(&mut trie)
            .strict(true)
            .load_reader(Cursor::new("cat\ndog\nelephant\nemu"))
            .unwrap_err();

        match err {
            HuaError::InvalidWord { line, source } => {
                assert_eq!(line, 3);
                assert!(matches!(source, HuaTrieError::WordTooLong { .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(!trie.contains_word("emu"));
    }

    #[test]
    fn test_lenient_loader_skips_invalid_utf8_line() {
        let mut trie = HuaTrie::new();
        let bytes: &[u8] = b"cat\nd\xffg bad\r\ndog\n";

        let report = DictionaryLoader::new(&mut trie).load_reader(bytes).unwrap();

        assert_eq!(report.inserted, 2);
        assert_eq!(report.rejected, 1);
        assert!(trie.contains_word("cat"));
        assert!(trie.contains_word("dog"));
        assert!(!trie.contains_word("bad"));
    }

    #[test]
    fn test_strict_loader_rejects_invalid_utf8_line() {
        let mut trie = HuaTrie::new();
        let bytes: &[u8] = b"cat\n\xfe\ndog";

        let err = DictionaryLoader::new(&mut trie)
            .strict(true)
            .load_reader(bytes)
            .unwrap_err();

        assert!(matches!(err, HuaError::InvalidEncoding { line: 2 }));
        assert!(trie.contains_word("cat"));
        assert!(!trie.contains_word("dog"));
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        std::fs::write(&path, "an and\nsand\n").unwrap();

        let mut trie = HuaTrie::new();
        let report = DictionaryLoader::new(&mut trie).load_file(&path).unwrap();

        assert_eq!(report.inserted, 3);
        assert!(trie.close_matches("an").contains("and"));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let mut trie = HuaTrie::new();
        let err = DictionaryLoader::new(&mut trie).load_file(&path).unwrap_err();

        assert!(matches!(err, HuaError::DictionaryNotFound(p) if p == path));
    }
}

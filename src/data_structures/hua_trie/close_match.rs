// Copyright (c) 2025 Hua Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Close matching within a single character edit.
//!
//! A close match of a query is a stored word reachable from it by exactly one
//! insertion, deletion or substitution, or the query itself when it is stored.
//! Two candidate generators are provided:
//!
//! - [`CandidateStrategy::Exhaustive`] tries every single edit of the query
//!   over every character that labels an edge of the trie. A character
//!   labelling no edge cannot occur in a stored word, so this is the same set
//!   of matches as enumerating the full alphabet. Each edit is checked by
//!   walking the trie over slices of the query, and only hits are allocated.
//! - [`CandidateStrategy::TrieGuided`] walks the trie alongside the query with
//!   an edit budget of one and only proposes characters found on the edges it
//!   visits. After the edit is spent the walk matches exactly. Its candidates
//!   are confirmed with the membership walk before they are reported.
//!
//! A query more than one character longer than `max_depth` cannot be one edit
//! from a stored word and is answered without any search.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::node::TrieNode;
use super::HuaTrie;

/// How close-match candidates are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateStrategy {
    /// Enumerate every single edit over the trie's edge labels.
    #[default]
    Exhaustive,

    /// Follow trie edges next to the query, spending at most one edit.
    TrieGuided,
}

impl HuaTrie {
    /// Finds stored words within one edit of `word`, using the configured
    /// candidate strategy.
    ///
    /// # Arguments
    ///
    /// * `word` - The query word.
    pub fn close_matches<W>(&self, word: W) -> BTreeSet<String>
    where
        W: AsRef<str>,
    {
        self.close_matches_with(word, self.config.candidate_strategy)
    }

    /// Finds stored words within one edit of `word` using `strategy`.
    pub fn close_matches_with<W>(&self, word: W, strategy: CandidateStrategy) -> BTreeSet<String>
    where
        W: AsRef<str>,
    {
        let query = self.normalize(word.as_ref());
        let chars: Vec<char> = query.chars().collect();
        let mut matches = BTreeSet::new();

        if chars.len() > self.config.max_depth + 1 {
            debug!(query_len = chars.len(), "close match query longer than any word");
            return matches;
        }

        let examined = match strategy {
            CandidateStrategy::Exhaustive => self.exhaustive_matches(&chars, &mut matches),
            CandidateStrategy::TrieGuided => {
                let candidates = self.guided_candidates(&chars);
                let examined = candidates.len();
                matches.extend(
                    candidates
                        .into_iter()
                        .filter(|candidate| self.contains_normalized(candidate)),
                );
                examined
            }
        };

        if self.contains_normalized(&query) {
            matches.insert(query.into_owned());
        }

        debug!(
            query = word.as_ref(),
            ?strategy,
            candidates = examined,
            matches = matches.len(),
            "close matches"
        );
        matches
    }

    /// Checks every deletion, substitution and insertion of `query` and adds
    /// the stored ones to `matches`.
    ///
    /// Substituted and inserted characters come from the edge labels. The
    /// node reached by the unedited head is carried from one position to the
    /// next, and the scan stops once the head leaves the trie since every
    /// later edit keeps that head. Returns the number of edits examined.
    fn exhaustive_matches(&self, query: &[char], matches: &mut BTreeSet<String>) -> usize {
        let alphabet = &self.edge_labels;
        let mut examined = 0;
        let mut head_node = &self.root;

        for position in 0..=query.len() {
            let (head, tail) = query.split_at(position);
            let mut check = |middle: Option<char>, rest: &[char]| {
                examined += 1;
                if spliced_is_stored(head_node, middle, rest) {
                    matches.insert(splice(head, middle, rest));
                }
            };

            if let Some((&current, rest)) = tail.split_first() {
                check(None, rest);

                for &c in alphabet.iter().filter(|&&c| c != current) {
                    check(Some(c), rest);
                }
            }

            for &c in alphabet {
                check(Some(c), tail);
            }

            match tail.first().and_then(|&c| head_node.child(c)) {
                Some(next) => head_node = next,
                None => break,
            }
        }

        examined
    }

    /// Candidates found by walking the trie next to `query`.
    fn guided_candidates(&self, query: &[char]) -> Vec<String> {
        let mut walk = GuidedWalk {
            query,
            path: String::with_capacity(query.len() + 1),
            candidates: Vec::new(),
        };
        walk.descend(&self.root, 0, false);
        walk.candidates
    }
}

/// Follows an optional `middle` character and then `tail` down from `from`,
/// reporting whether the walk ends on a terminal node.
fn spliced_is_stored(from: &TrieNode, middle: Option<char>, tail: &[char]) -> bool {
    middle
        .into_iter()
        .chain(tail.iter().copied())
        .try_fold(from, |node, c| node.child(c))
        .is_some_and(|node| node.is_terminal)
}

/// Joins `head`, an optional middle character and `tail` into a new string.
fn splice(head: &[char], middle: Option<char>, tail: &[char]) -> String {
    head.iter()
        .copied()
        .chain(middle)
        .chain(tail.iter().copied())
        .collect()
}

/// State for one trie-guided walk. `path` always spells the route from the
/// root to the node being visited.
struct GuidedWalk<'q> {
    query: &'q [char],
    path: String,
    candidates: Vec<String>,
}

impl GuidedWalk<'_> {
    /// Visits `node` having consumed `query[..position]`.
    ///
    /// Every call either advances `position` or spends the single edit, so the
    /// depth is bounded by twice the query length plus one.
    fn descend(&mut self, node: &TrieNode, position: usize, edited: bool) {
        let Some(&expected) = self.query.get(position) else {
            if edited {
                if node.is_terminal {
                    self.candidates.push(self.path.clone());
                }
            } else {
                // Insertion after the last character
                for child in node.children() {
                    self.path.push(child.character);
                    self.descend(child, position, true);
                    self.path.pop();
                }
            }
            return;
        };

        if let Some(child) = node.child(expected) {
            self.path.push(expected);
            self.descend(child, position + 1, edited);
            self.path.pop();
        }

        if edited {
            return;
        }

        // Deletion of query[position]
        self.descend(node, position + 1, true);

        for child in node.children() {
            self.path.push(child.character);
            if child.character != expected {
                self.descend(child, position + 1, true);
            }
            // Insertion before query[position]
            self.descend(child, position, true);
            self.path.pop();
        }
    }
}

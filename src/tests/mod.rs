//! Test modules for Hua.
//!
//! This module contains crate-internal test suites:
//! - Property-based tests for the trie using proptest
//! - Configuration loading and validation tests
//! - Error conversion and display tests
//! - Shared strategies and oracles in `test_utils`

pub mod error_tests;

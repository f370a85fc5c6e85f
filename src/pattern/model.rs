//! Wildcard pattern model
//!
//! This module contains the immutable Pattern type shared by the classifier
//! and the name mapper.

use crate::constants::{WILDCARD, WILDCARD_CHAR};
use crate::errors::{empty_pattern_error, Result};

/// An immutable search or replace pattern
///
/// A pattern is a literal string containing zero or more `*` wildcard
/// tokens. Only patterns with at most one wildcard can be resolved
/// positionally; the classifier decides what to do with the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    /// The original pattern text
    raw: String,
    /// Number of `*` tokens in the pattern
    wildcard_count: usize,
    /// Text before the first wildcard, empty if there is none or it leads
    prefix: String,
    /// Text after the first wildcard, empty if there is none or it trails
    suffix: String,
}

impl Pattern {
    /// Parses a pattern from its raw text
    ///
    /// # Arguments
    /// * `raw` - The pattern text as given on the command line
    ///
    /// # Returns
    /// * `Result<Pattern>` - The parsed pattern
    ///
    /// # Errors
    /// Returns an error if the pattern text is empty
    pub fn new(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Err(empty_pattern_error());
        }

        let wildcard_count = raw.matches(WILDCARD).count();
        let (prefix, suffix) = match raw.find(WILDCARD_CHAR) {
            Some(position) => (
                raw[..position].to_string(),
                raw[position + WILDCARD.len()..].to_string(),
            ),
            None => (String::new(), String::new()),
        };

        Ok(Pattern {
            raw: raw.to_string(),
            wildcard_count,
            prefix,
            suffix,
        })
    }

    /// Gets the original pattern text
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Gets the number of wildcard tokens in the pattern
    pub fn wildcard_count(&self) -> usize {
        self.wildcard_count
    }

    /// Gets the text before the first wildcard
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Gets the text after the first wildcard
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Checks whether the pattern contains at least one wildcard
    pub fn has_wildcard(&self) -> bool {
        self.wildcard_count > 0
    }
}

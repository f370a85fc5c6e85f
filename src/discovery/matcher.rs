//! Candidate filtering functionality
//!
//! This module checks explicitly given filenames against the search
//! pattern, so the mapper only ever sees names that actually matched. The
//! wildcard pattern is compiled into an anchored regex once per run.

use log::{debug, info};
use regex::Regex;

use crate::constants::WILDCARD_CHAR;
use crate::errors::{pattern_matching_error, Result};
use crate::logging::format_message;

use super::scanner::FileInfo;

/// Compiles a wildcard search pattern into an anchored regex
///
/// Literal segments are escaped and every wildcard becomes `.*`, so the
/// regex matches the whole filename exactly the way the pattern does.
pub fn search_pattern_regex(search: &str) -> Result<Regex> {
    let escaped: Vec<String> = search
        .split(WILDCARD_CHAR)
        .map(|segment| regex::escape(segment))
        .collect();
    let anchored = format!("^{}$", escaped.join(".*"));

    Regex::new(&anchored).map_err(|e| pattern_matching_error(e, search))
}

/// Checks whether a filename matches the search pattern
pub fn matches_search_pattern(filename: &str, search: &str) -> Result<bool> {
    let regex = search_pattern_regex(search)?;
    Ok(regex.is_match(filename))
}

/// Filters an explicit candidate list against the search pattern
///
/// Input order is preserved; candidates that do not match are dropped.
///
/// # Arguments
/// * `candidates` - The explicitly given candidate files
/// * `search` - The search pattern
///
/// # Returns
/// * `Result<Vec<FileInfo>>` - The matching candidates, in input order
///
/// # Errors
/// Returns an error if the search pattern cannot be compiled
pub fn filter_candidates(candidates: Vec<FileInfo>, search: &str) -> Result<Vec<FileInfo>> {
    let regex = search_pattern_regex(search)?;

    let matching: Vec<FileInfo> = candidates
        .into_iter()
        .filter(|file| {
            if regex.is_match(&file.filename) {
                let message = format!("{} found! Applying pattern {}.", file.filename, search);
                info!("{}", format_message(&message, &message));
                true
            } else {
                debug!("{} does not match {}", file.filename, search);
                false
            }
        })
        .collect();

    debug!(
        "{} of the given candidates match the search pattern",
        matching.len()
    );

    Ok(matching)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn file(name: &str) -> FileInfo {
        FileInfo {
            path: PathBuf::from(name),
            filename: name.to_string(),
        }
    }

    #[test]
    fn test_matches_search_pattern_with_wildcard() {
        assert!(matches_search_pattern("file2.htm", "*.htm").unwrap());
        assert!(matches_search_pattern("img007.png", "img*").unwrap());
        assert!(!matches_search_pattern("file2.html", "*.htm").unwrap());
    }

    #[test]
    fn test_matches_search_pattern_literal() {
        assert!(matches_search_pattern("notes.txt", "notes.txt").unwrap());
        assert!(!matches_search_pattern("notes.txt.bak", "notes.txt").unwrap());
    }

    #[test]
    fn test_matches_search_pattern_escapes_regex_metacharacters() {
        // The dot must match literally, not as a regex metacharacter
        assert!(!matches_search_pattern("filexhtm", "file.htm").unwrap());
        assert!(matches_search_pattern("file.htm", "file.htm").unwrap());
    }

    #[test]
    fn test_filter_candidates_preserves_order() {
        let candidates = vec![file("b.htm"), file("a.txt"), file("c.htm")];

        let matching = filter_candidates(candidates, "*.htm").unwrap();

        let names: Vec<&str> = matching.iter().map(|f| f.filename.as_str()).collect();
        assert_eq!(names, vec!["b.htm", "c.htm"]);
    }

    #[test]
    fn test_filter_candidates_empty_result() {
        let candidates = vec![file("a.txt"), file("b.txt")];

        let matching = filter_candidates(candidates, "*.htm").unwrap();

        assert!(matching.is_empty(), "No candidate should match the pattern");
    }
}

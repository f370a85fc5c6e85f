//! Candidate file discovery
//!
//! This module produces the concrete candidate list the mapping core
//! consumes, either by expanding the search pattern against a directory or
//! by filtering an explicitly given list of filenames.

mod matcher;
mod scanner;

pub use matcher::{filter_candidates, matches_search_pattern};
pub use scanner::{scan_pattern, FileInfo};

//! Run context
//!
//! This module defines the options a run starts from and the context it
//! reports back.

use std::path::PathBuf;

use crate::MappingList;

/// Options for a single rename run
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// The directory the renames are applied in
    pub directory: PathBuf,
    /// The search pattern
    pub search: String,
    /// The replace pattern
    pub replace: String,
    /// Explicitly given candidate filenames; empty to expand the search pattern
    pub candidates: Vec<String>,
    /// Whether to only log the renames instead of performing them
    pub dry_run: bool,
    /// Whether to wait for confirmation before applying the plan
    pub interactive: bool,
}

/// Statistics about a run
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    /// Number of candidate files that matched the search pattern
    pub files_matched: usize,
    /// Number of files actually renamed
    pub files_renamed: usize,
}

/// Context reported back from a run
#[derive(Debug, Clone)]
pub struct RunContext {
    /// The options the run started from
    pub options: RunOptions,
    /// Statistics about the run
    pub stats: RunStats,
    /// The planned renames, also populated in dry-run mode
    pub planned: MappingList,
}

impl RunContext {
    /// Creates a new run context
    pub fn new(options: RunOptions) -> Self {
        RunContext {
            options,
            stats: RunStats::default(),
            planned: Vec::new(),
        }
    }
}

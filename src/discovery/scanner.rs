//! Directory scanning functionality
//!
//! This module expands the search pattern against a working directory to
//! find candidate files. Hidden files and directories are skipped; the
//! result is sorted by filename so every run processes a fixed order.

use std::path::{Path, PathBuf};

use glob::glob;
use log::debug;

use crate::errors::{
    file_operation_error, glob_pattern_error, invalid_filename_error, path_operation_error, Result,
};
use crate::utils::is_hidden_file;

/// A candidate file found during discovery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    /// The path to the file
    pub path: PathBuf,
    /// The filename portion of the path
    pub filename: String,
}

impl FileInfo {
    /// Creates a new FileInfo from a path
    ///
    /// # Arguments
    /// * `path` - The path to the file
    ///
    /// # Returns
    /// * `Result<FileInfo>` - The file information or an error
    ///
    /// # Errors
    /// Returns an error if the filename cannot be extracted or converted to a string
    pub fn new(path: PathBuf) -> Result<Self> {
        let filename = path
            .file_name()
            .ok_or_else(|| path_operation_error(path.clone(), "get filename"))?
            .to_str()
            .ok_or_else(|| invalid_filename_error(path.clone()))?
            .to_string();

        Ok(FileInfo { path, filename })
    }
}

/// Expands the search pattern inside a directory into candidate files
///
/// The search pattern doubles as a glob pattern, so expanding it against
/// the working directory yields exactly the files that can match it.
///
/// # Arguments
/// * `directory` - The directory to search in
/// * `search` - The search pattern
///
/// # Returns
/// * `Result<Vec<FileInfo>>` - The candidate files, sorted by filename
///
/// # Errors
/// * Returns an error if the pattern is not a valid glob pattern
/// * Returns an error if a matched path cannot be accessed
pub fn scan_pattern(directory: &Path, search: &str) -> Result<Vec<FileInfo>> {
    let pattern_path = directory.join(search);
    let pattern_str = pattern_path
        .to_str()
        .ok_or_else(|| invalid_filename_error(pattern_path.clone()))?;

    debug!("Expanding search pattern: {pattern_str}");

    let entries = glob(pattern_str).map_err(|e| glob_pattern_error(e, pattern_str))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| {
            file_operation_error(e.into_error(), directory.to_path_buf(), "access")
        })?;
        if !path.is_file() || is_hidden_file(&path) {
            continue;
        }
        files.push(FileInfo::new(path)?);
    }

    files.sort_by(|a, b| a.filename.cmp(&b.filename));

    debug!("Found {} candidate files", files.len());

    Ok(files)
}

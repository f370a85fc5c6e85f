//! Settings model
//!
//! This module defines the settings structure deserialized from the
//! optional YAML settings file. Every field is a default for the matching
//! command-line flag; flags given on the command line win.

use std::path::PathBuf;
use std::str::FromStr;

use serde::Deserialize;

use crate::errors::{generic_error, Result};
use crate::logging::LogLevel;
use crate::utils::process_path;

/// Defaults for the command-line flags
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Settings {
    /// Default working directory the renames are applied in
    #[serde(default)]
    pub directory: Option<String>,
    /// Run without renaming any files unless overridden
    #[serde(default)]
    pub dry_run: bool,
    /// Wait for confirmation before applying a plan
    #[serde(default)]
    pub interactive: bool,
    /// Default verbosity level name (error, warn, info, debug, trace)
    #[serde(default)]
    pub verbosity: Option<String>,
    /// Default log file path, empty to disable file logging
    #[serde(default)]
    pub log_file: Option<String>,
}

impl Settings {
    /// Gets the configured working directory, tilde-expanded
    pub fn working_directory(&self) -> Option<PathBuf> {
        self.directory.as_deref().map(process_path)
    }

    /// Parses the configured verbosity level name
    ///
    /// # Errors
    /// Returns an error if the configured name is not a known level
    pub fn verbosity_level(&self) -> Result<Option<LogLevel>> {
        match self.verbosity.as_deref() {
            None => Ok(None),
            Some(name) => LogLevel::from_str(name)
                .map(Some)
                .map_err(|e| generic_error(&e)),
        }
    }
}

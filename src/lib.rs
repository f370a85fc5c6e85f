pub use discovery::FileInfo;
pub use path_gen::{RenameMapping, RenamePlan};
pub use pattern::{classify, Pattern, PatternShape};

pub mod cli;
pub mod config;
pub mod constants;
pub mod discovery;
pub mod errors;
pub mod file_ops;
pub mod logging;
pub mod path_gen;
pub mod pattern;
pub mod utils;
pub mod workflow;

pub mod prelude {
    pub use crate::cli::{
        check_for_stdout_stream, get_log_file, get_matches, resolve_verbosity,
    };
    pub use crate::config::{load_settings, read_or_create, Settings};
    pub use crate::constants::DEFAULT_CONFIG_PATH;
    pub use crate::errors::{
        ambiguous_wildcard_error, destination_exists_error, empty_pattern_error,
        file_operation_error, generic_error, invalid_filename_error, path_operation_error,
        unparsable_dot_pattern_error,
    };
    pub use crate::errors::{Error, Result};
    pub use crate::logging::{format_message, init_default_logger, init_logger, LogLevel};
    pub use crate::workflow::{run, run_from_matches, RunContext, RunOptions};
}

/// Ordered batch of computed renames
pub type MappingList = Vec<RenameMapping>;
/// Ordered list of candidate files for one run
pub type CandidateList = Vec<FileInfo>;

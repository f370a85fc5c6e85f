use glob::PatternError;
use regex::Error as RegexError;
use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Custom error type for the File Rename application
#[derive(Debug)]
pub enum Error {
    /// Error when the classifier is invoked with an empty pattern
    EmptyPattern,
    /// Error when a double-dot wildcard pattern does not split into stem and extension
    UnparsableDotPattern { pattern: String },
    /// Error when a wildcard's substitution target cannot be located in a filename
    AmbiguousWildcard { pattern: String, file: String },
    /// Error when a computed destination already exists or collides within a batch
    DestinationExists {
        source: PathBuf,
        destination: PathBuf,
    },
    /// Error related to file operations
    FileOperation {
        source: io::Error,
        path: PathBuf,
        operation: String,
    },
    /// Error related to pattern matching
    PatternMatching { source: RegexError, pattern: String },
    /// Error related to glob pattern matching
    GlobPattern {
        source: PatternError,
        pattern: String,
    },
    /// Error related to path operations
    PathOperation { path: PathBuf, operation: String },
    /// Error related to configuration parsing
    ConfigParsing {
        source: Box<dyn StdError + Send + Sync>,
        detail: String,
    },
    /// Error when a filename is not valid Unicode or not a bare filename
    InvalidFilename { path: PathBuf },
    /// Generic error with a message
    Generic { message: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyPattern => {
                write!(f, "Pattern must not be empty")
            }
            Error::UnparsableDotPattern { pattern } => {
                write!(f, "Cannot parse wildcard dot pattern: '{pattern}'")
            }
            Error::AmbiguousWildcard { pattern, file } => {
                write!(
                    f,
                    "Cannot locate wildcard substitution target for pattern '{pattern}' in '{file}'"
                )
            }
            Error::DestinationExists {
                source,
                destination,
            } => {
                write!(
                    f,
                    "Destination already exists: {} (renaming {})",
                    destination.display(),
                    source.display()
                )
            }
            Error::FileOperation {
                path, operation, ..
            } => {
                write!(f, "Failed to {} file: {}", operation, path.display())
            }
            Error::PatternMatching { pattern, .. } => {
                write!(f, "Invalid pattern: {pattern}")
            }
            Error::GlobPattern { pattern, .. } => {
                write!(f, "Invalid glob pattern: {pattern}")
            }
            Error::PathOperation { path, operation } => {
                write!(f, "Failed to {} path: {}", operation, path.display())
            }
            Error::ConfigParsing { detail, .. } => {
                write!(f, "Configuration parsing error: {detail}")
            }
            Error::InvalidFilename { path } => {
                write!(f, "Not a valid filename: {}", path.display())
            }
            Error::Generic { message } => {
                write!(f, "{message}")
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::FileOperation { source, .. } => Some(source),
            Error::PatternMatching { source, .. } => Some(source),
            Error::GlobPattern { source, .. } => Some(source),
            Error::ConfigParsing { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::FileOperation {
            source: err,
            path: PathBuf::new(),
            operation: "perform operation on".to_string(),
        }
    }
}

impl From<RegexError> for Error {
    fn from(err: RegexError) -> Self {
        Error::PatternMatching {
            source: err,
            pattern: String::new(),
        }
    }
}

impl From<PatternError> for Error {
    fn from(err: PatternError) -> Self {
        Error::GlobPattern {
            source: err,
            pattern: String::new(),
        }
    }
}

/// Custom Result type for the File Rename application
///
/// This type alias simplifies error handling throughout the application by
/// using the custom Error type. It's used as the return type for most functions
/// that can fail.
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create an empty pattern error
pub fn empty_pattern_error() -> Error {
    Error::EmptyPattern
}

/// Helper function to create an unparsable dot pattern error
pub fn unparsable_dot_pattern_error(pattern: &str) -> Error {
    Error::UnparsableDotPattern {
        pattern: pattern.to_string(),
    }
}

/// Helper function to create an ambiguous wildcard error
pub fn ambiguous_wildcard_error(pattern: &str, file: &str) -> Error {
    Error::AmbiguousWildcard {
        pattern: pattern.to_string(),
        file: file.to_string(),
    }
}

/// Helper function to create a destination conflict error
pub fn destination_exists_error(source: PathBuf, destination: PathBuf) -> Error {
    Error::DestinationExists {
        source,
        destination,
    }
}

/// Helper function to create a file operation error
pub fn file_operation_error(err: io::Error, path: PathBuf, operation: &str) -> Error {
    Error::FileOperation {
        source: err,
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create a pattern matching error
pub fn pattern_matching_error(err: RegexError, pattern: &str) -> Error {
    Error::PatternMatching {
        source: err,
        pattern: pattern.to_string(),
    }
}

/// Helper function to create a glob pattern error
pub fn glob_pattern_error(err: PatternError, pattern: &str) -> Error {
    Error::GlobPattern {
        source: err,
        pattern: pattern.to_string(),
    }
}

/// Helper function to create a path operation error
pub fn path_operation_error(path: PathBuf, operation: &str) -> Error {
    Error::PathOperation {
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create a config parsing error
pub fn config_parsing_error<E: StdError + Send + Sync + 'static>(err: E, detail: &str) -> Error {
    Error::ConfigParsing {
        source: Box::new(err),
        detail: detail.to_string(),
    }
}

/// Helper function to create an invalid filename error
pub fn invalid_filename_error(path: PathBuf) -> Error {
    Error::InvalidFilename { path }
}

/// Helper function to create a generic error
pub fn generic_error(message: &str) -> Error {
    Error::Generic {
        message: message.to_string(),
    }
}

/// Constants used throughout the application
///
/// This module centralises all constants used in the application to make
/// them easier to manage and update.

/// Wildcard token used in search and replace patterns
pub const WILDCARD: &str = "*";

/// Wildcard token as a character, for pattern splitting
pub const WILDCARD_CHAR: char = '*';

/// Stem/extension separator in filenames and patterns
pub const DOT: char = '.';

/// Literal shape of a pattern that wildcards both stem and extension
pub const DOUBLE_DOT_WILDCARD: &str = "*.*";

/// Leading wildcard followed by an extension anchor (`*.htm`)
pub const WILDCARD_DOT_PREFIX: &str = "*.";

/// Trailing wildcard preceded by a stem anchor (`img.*`)
pub const DOT_WILDCARD_SUFFIX: &str = ".*";

/// Qualifier string used for application identification
///
/// This is used as part of the application's unique identifier.
pub const QUALIFIER: &str = "com";

/// Organisation name used for application identification
///
/// This is used as part of the application's unique identifier.
pub const ORGANIZATION: &str = "Ondřej Vágner";

/// Application name used for identification
///
/// This is the name of the application used in various contexts like
/// configuration file paths and application identification.
pub const APPLICATION: &str = "file_rename";

/// Help text for the search pattern positional argument
pub const SEARCH_HELP: &str = "Search pattern with at most one * wildcard (e.g. *.htm)";

/// Help text for the replace pattern positional argument
pub const REPLACE_HELP: &str = "Replace pattern with at most one * wildcard (e.g. *.html)";

/// Help text for the explicit candidate files argument
pub const FILES_HELP: &str =
    "Explicit candidate filenames inside the working directory (defaults to expanding the search pattern)";

/// Help text for the working directory command-line option
pub const DIRECTORY_HELP: &str = "Directory the renames are applied in";

/// Help text for the config command-line option
pub const CONFIG_HELP: &str = "Read from a specific config file";

/// Help text for the dry-run command-line option
pub const DRY_RUN_HELP: &str = "Run without renaming any files";

/// Help text for the interactive command-line option
pub const INTERACTIVE_HELP: &str = "Show the planned renames and wait for confirmation";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the log file command-line option
pub const LOG_FILE_HELP: &str = "Write the log to a specific file";

/// Help text for the local logging command-line option
pub const LOCAL_LOGGING_HELP: &str =
    "Write the log file to the working directory instead of the config directory";

/// Default path for the configuration file
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Default filename for the log file
pub const LOG_FILE_DEFAULT: &str = "file_rename.log";

/// Default working directory when none is configured
pub const DEFAULT_DIRECTORY: &str = ".";

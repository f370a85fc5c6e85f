use atty::Stream;
use clap::parser::ValueSource;
use clap::{command, crate_authors, crate_description, crate_name, crate_version, Arg, ArgMatches};

use crate::config::Settings;
use crate::constants::{
    CONFIG_HELP, DEFAULT_CONFIG_PATH, DIRECTORY_HELP, DRY_RUN_HELP, FILES_HELP, INTERACTIVE_HELP,
    LOCAL_LOGGING_HELP, LOG_FILE_DEFAULT, LOG_FILE_HELP, REPLACE_HELP, SEARCH_HELP, VERBOSE_HELP,
};
use crate::errors::{generic_error, Result};
use crate::logging::LogLevel;
use crate::utils::find_project_folder;

/// Checks if stdout is a terminal and waits for user input if it is
///
/// This function is used to prevent the console window from closing
/// immediately after the program finishes when run from a GUI.
pub fn check_for_stdout_stream() {
    if atty::is(Stream::Stdout) {
        dont_disappear::enter_to_continue::default();
    }
}

/// Waits for confirmation before a plan is applied
///
/// Used by the interactive mode after the planned renames were printed.
pub fn confirm_before_apply() {
    dont_disappear::enter_to_continue::custom_msg(
        "Press Enter to apply the renames above, or Ctrl-C to abort.",
    );
}

/// Sets up and returns command-line argument matches
///
/// Defines the following arguments:
/// - `search`: Search pattern with at most one wildcard
/// - `replace`: Replace pattern with at most one wildcard
/// - `files`: Explicit candidate filenames
/// - `directory`: Directory the renames are applied in
/// - `dry`: Run without renaming any files
/// - `interactive`: Wait for confirmation before applying
/// - `verbose`: Increase verbosity level
///
/// # Returns
/// * `Result<ArgMatches>` - The parsed command-line arguments
///
/// # Errors
/// Returns an error if the command-line arguments cannot be parsed
pub fn get_matches() -> Result<ArgMatches> {
    // define arg for the search pattern
    let arg_search = Arg::new("search").help(SEARCH_HELP).required(true).index(1);

    // define arg for the replace pattern
    let arg_replace = Arg::new("replace")
        .help(REPLACE_HELP)
        .required(true)
        .index(2);

    // define arg for explicit candidate files
    let arg_files = Arg::new("files").help(FILES_HELP).num_args(0..).index(3);

    // define arg for the working directory
    let arg_directory = Arg::new("directory")
        .short('d')
        .long("directory")
        .help(DIRECTORY_HELP);

    // define arg for reading from a specific config file
    let arg_config = Arg::new("config")
        .short('c')
        .long("config")
        .help(CONFIG_HELP)
        .default_value(DEFAULT_CONFIG_PATH);

    // define arg for dry run
    let arg_dry = Arg::new("dry")
        .short('n')
        .long("dry")
        .help(DRY_RUN_HELP)
        .action(clap::ArgAction::SetTrue);

    // define arg for interactive confirmation
    let arg_interactive = Arg::new("interactive")
        .short('i')
        .long("interactive")
        .help(INTERACTIVE_HELP)
        .action(clap::ArgAction::SetTrue);

    // define arg for verbosity level
    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .action(clap::ArgAction::Count);

    // define arg for log file
    let log_file = Arg::new("log_file")
        .short('l')
        .long("log-file")
        .help(LOG_FILE_HELP)
        .default_value(LOG_FILE_DEFAULT);

    // define arg for local logging
    let log_locally = Arg::new("log_locally")
        .short('L')
        .long("log-locally")
        .help(LOCAL_LOGGING_HELP)
        .action(clap::ArgAction::SetTrue);

    let matches = command!()
        .author(crate_authors!())
        .about(crate_description!())
        .name(crate_name!())
        .version(crate_version!())
        .arg(arg_search)
        .arg(arg_replace)
        .arg(arg_files)
        .arg(arg_directory)
        .arg(arg_config)
        .arg(arg_dry)
        .arg(arg_interactive)
        .arg(log_file)
        .arg(log_locally)
        .arg(arg_verbose)
        .get_matches();

    Ok(matches)
}

/// Resolves the verbosity level from the command line and the settings
///
/// Occurrences of the verbose flag win over the configured default; with
/// neither present, the level is Info.
///
/// # Arguments
/// * `matches` - The parsed command-line arguments
/// * `settings` - The loaded settings
///
/// # Returns
/// * `Result<LogLevel>` - The effective verbosity level
///
/// # Errors
/// Returns an error if the configured level name is unknown
pub fn resolve_verbosity(matches: &ArgMatches, settings: &Settings) -> Result<LogLevel> {
    let verbose_count = matches.get_count("verbose");
    if verbose_count > 0 {
        return Ok(LogLevel::from_occurrences(verbose_count));
    }
    Ok(settings.verbosity_level()?.unwrap_or(LogLevel::Info))
}

/// Resolves the log file path from the command line and the settings
///
/// An explicit `--log-file` wins over the configured default. Unless local
/// logging is requested, the file is placed in the application's config
/// directory.
pub fn get_log_file(matches: &ArgMatches, settings: &Settings) -> Result<String> {
    let filename = if matches.value_source("log_file") == Some(ValueSource::CommandLine) {
        matches
            .get_one::<String>("log_file")
            .cloned()
            .unwrap_or_else(|| LOG_FILE_DEFAULT.to_string())
    } else {
        settings
            .log_file
            .clone()
            .unwrap_or_else(|| LOG_FILE_DEFAULT.to_string())
    };

    if filename.is_empty() || matches.get_flag("log_locally") {
        return Ok(filename);
    }

    let folder = find_project_folder()?;
    let path = folder.config_dir().join(filename);
    let path_str = path
        .as_path()
        .to_str()
        .ok_or_else(|| generic_error(&format!("Failed to convert path to string: {path:?}")))?;
    Ok(path_str.to_string())
}

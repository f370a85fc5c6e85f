use std::path::PathBuf;

use anyhow::Result;
use human_panic::setup_panic;
use log::error;

use file_rename::prelude::*;

fn main() -> Result<()> {
    setup_panic!();

    let matches = get_matches()?;

    let config_argument = matches
        .get_one::<String>("config")
        .ok_or_else(|| generic_error("Configuration file option not found"))?;
    let settings_path = read_or_create(PathBuf::from(config_argument))?;
    let settings = load_settings(settings_path)?;

    let verbosity = resolve_verbosity(&matches, &settings)?;
    let log_file = get_log_file(&matches, &settings)?;
    init_logger(verbosity, &log_file)?;

    let outcome = run_from_matches(&matches, &settings);
    if let Err(run_error) = outcome {
        error!("{run_error:#}");
        check_for_stdout_stream();
        std::process::exit(1);
    }

    check_for_stdout_stream();

    Ok(())
}

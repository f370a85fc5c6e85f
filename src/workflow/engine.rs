//! Run engine
//!
//! This module contains the engine that orchestrates a rename run.

use anyhow::Result;
use clap::ArgMatches;
use log::{debug, info};

use crate::cli::confirm_before_apply;
use crate::config::Settings;
use crate::constants::DEFAULT_DIRECTORY;
use crate::discovery::{filter_candidates, scan_pattern, FileInfo};
use crate::file_ops::{apply_plan, verify_plan};
use crate::path_gen::build_plan;
use crate::pattern::{classify, Pattern};
use crate::utils::process_path;

use super::context::{RunContext, RunOptions};

/// Performs a rename run
///
/// The run proceeds in fixed steps:
/// 1. Parse and classify the pattern pair, once for the whole batch
/// 2. Resolve the candidate list, by expanding the search pattern or by
///    filtering the explicitly given filenames
/// 3. Map every candidate to its destination name and plan the batch
/// 4. Verify the plan against the filesystem, refusing any overwrite
/// 5. Apply the moves serially, or only log them in dry-run mode
///
/// # Arguments
/// * `options` - Options for the run
///
/// # Returns
/// * `Result<RunContext>` - The run context with statistics or an error
///
/// # Errors
/// * Returns an error if the pattern pair cannot be resolved
/// * Returns an error if a destination collides or already exists
/// * Returns an error if a move fails
pub fn run(options: RunOptions) -> Result<RunContext> {
    let search = Pattern::new(&options.search)?;
    let replace = Pattern::new(&options.replace)?;

    let shape = classify(&search, &replace);
    debug!(
        "Classified pattern pair '{}' -> '{}' as {shape:?}",
        options.search, options.replace
    );

    let candidates = if options.candidates.is_empty() {
        scan_pattern(&options.directory, &options.search)?
    } else {
        let explicit = options
            .candidates
            .iter()
            .map(|name| FileInfo::new(options.directory.join(name)))
            .collect::<crate::errors::Result<Vec<FileInfo>>>()?;
        filter_candidates(explicit, &options.search)?
    };

    let mut context = RunContext::new(options);
    context.stats.files_matched = candidates.len();

    if candidates.is_empty() {
        info!(
            "No files match the search pattern '{}'",
            context.options.search
        );
        return Ok(context);
    }

    let plan = build_plan(
        &context.options.directory,
        &candidates,
        shape,
        &search,
        &replace,
    )?;
    verify_plan(&plan)?;

    context.planned = plan.mappings.clone();

    if plan.mappings.is_empty() {
        info!("Nothing to rename, all matched names are unchanged");
        return Ok(context);
    }

    info!(
        "Renaming {} files{}...",
        plan.mappings.len(),
        if context.options.dry_run {
            " (dry run)"
        } else {
            ""
        }
    );

    if context.options.interactive && !context.options.dry_run {
        for mapping in &plan.mappings {
            info!("{} -> {}", mapping.source_name, mapping.dest_name);
        }
        confirm_before_apply();
    }

    context.stats.files_renamed = apply_plan(&plan, context.options.dry_run)?;

    info!(
        "Done, {} of {} matched files renamed",
        context.stats.files_renamed, context.stats.files_matched
    );

    Ok(context)
}

/// Builds run options from the command line and the settings, then runs
///
/// Command-line flags override their settings-file defaults.
///
/// # Arguments
/// * `matches` - The parsed command-line arguments
/// * `settings` - The loaded settings
///
/// # Returns
/// * `Result<RunContext>` - The run context with statistics or an error
pub fn run_from_matches(matches: &ArgMatches, settings: &Settings) -> Result<RunContext> {
    let directory = match matches.get_one::<String>("directory") {
        Some(directory) => process_path(directory),
        None => settings
            .working_directory()
            .unwrap_or_else(|| process_path(DEFAULT_DIRECTORY)),
    };

    let candidates: Vec<String> = matches
        .get_many::<String>("files")
        .map(|files| files.cloned().collect())
        .unwrap_or_default();

    let options = RunOptions {
        directory,
        search: matches
            .get_one::<String>("search")
            .cloned()
            .unwrap_or_default(),
        replace: matches
            .get_one::<String>("replace")
            .cloned()
            .unwrap_or_default(),
        candidates,
        dry_run: matches.get_flag("dry") || settings.dry_run,
        interactive: matches.get_flag("interactive") || settings.interactive,
    };

    run(options)
}

//! Rename application
//!
//! This module contains the verification pass that enforces the no-clobber
//! contract and the serial apply pass that performs one move per mapping.

use std::io;

use colored::Colorize;
use fs_extra::file::{move_file, CopyOptions};
use log::{debug, info};

use crate::errors::{destination_exists_error, file_operation_error, Result};
use crate::logging::format_message;
use crate::path_gen::RenamePlan;

/// Verifies a rename plan against the filesystem
///
/// Every source must still exist and no destination may exist yet. The
/// whole batch fails on the first violation, before anything is moved, so
/// a conflicting plan renames zero files.
///
/// # Arguments
/// * `plan` - The plan to verify
///
/// # Returns
/// * `Result<()>` - Ok when the whole plan is applicable
///
/// # Errors
/// * Returns an error if a source file has disappeared
/// * Returns an error if a destination already exists
pub fn verify_plan(plan: &RenamePlan) -> Result<()> {
    for mapping in &plan.mappings {
        let source = plan.source_path(mapping);
        let destination = plan.destination_path(mapping);

        if !source.exists() {
            return Err(file_operation_error(
                io::Error::new(io::ErrorKind::NotFound, "source file not found"),
                source,
                "rename",
            ));
        }
        if destination.exists() {
            return Err(destination_exists_error(source, destination));
        }
    }
    Ok(())
}

/// Applies a verified rename plan
///
/// Moves are performed one at a time in plan order. In dry-run mode every
/// move is logged and none is performed. The move primitive keeps
/// overwriting disabled, so a file appearing between verification and
/// application still cannot be clobbered.
///
/// # Arguments
/// * `plan` - The plan to apply
/// * `dry_run` - Whether to only log the moves instead of performing them
///
/// # Returns
/// * `Result<usize>` - The number of files actually renamed
///
/// # Errors
/// Returns an error if a move fails
pub fn apply_plan(plan: &RenamePlan, dry_run: bool) -> Result<usize> {
    let options = CopyOptions::new();
    let mut renamed = 0;

    for mapping in &plan.mappings {
        let source = plan.source_path(mapping);
        let destination = plan.destination_path(mapping);

        let message = format!("New filename: {}", mapping.dest_name);
        let colored_message = format!("New filename: {}", mapping.dest_name.red().bold());
        info!("{}", format_message(&message, &colored_message));

        if dry_run {
            debug!(
                "Simulating move: {} -> {}",
                source.display(),
                destination.display()
            );
            continue;
        }

        move_file(&source, &destination, &options)
            .map_err(|e| file_operation_error(io::Error::other(e), source.clone(), "move"))?;
        renamed += 1;
    }

    Ok(renamed)
}

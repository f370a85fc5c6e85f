//! Batch rename planning
//!
//! This module maps a whole candidate list into an ordered rename plan.
//! Mapping each file is independent and side-effect-free, so the batch is
//! computed in parallel; collision detection and everything after it stays
//! sequential in input order.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use log::debug;
use rayon::prelude::*;

use crate::discovery::FileInfo;
use crate::errors::{destination_exists_error, Result};
use crate::path_gen::mapper::{map_filename, RenameMapping};
use crate::pattern::{Pattern, PatternShape};

/// An ordered batch of renames, all applying inside one directory
#[derive(Debug, Clone)]
pub struct RenamePlan {
    /// The directory the renames are applied in
    pub directory: PathBuf,
    /// The mappings, in candidate input order
    pub mappings: Vec<RenameMapping>,
}

impl RenamePlan {
    /// Gets the full source path of a mapping
    pub fn source_path(&self, mapping: &RenameMapping) -> PathBuf {
        self.directory.join(&mapping.source_name)
    }

    /// Gets the full destination path of a mapping
    pub fn destination_path(&self, mapping: &RenameMapping) -> PathBuf {
        self.directory.join(&mapping.dest_name)
    }
}

/// Builds a rename plan for a candidate batch
///
/// The pattern pair is classified once by the caller; each candidate is then
/// mapped independently under rayon, preserving input order. The first
/// mapping error aborts the whole batch. Mappings whose destination equals
/// their source are dropped, and two sources mapping to one destination fail
/// the batch before anything is applied.
///
/// # Arguments
/// * `directory` - The directory the renames will be applied in
/// * `candidates` - The candidate files, in input order
/// * `shape` - The classification of the pattern pair
/// * `search` - The search pattern
/// * `replace` - The replace pattern
///
/// # Returns
/// * `Result<RenamePlan>` - The plan, or the first mapping or collision error
pub fn build_plan(
    directory: &Path,
    candidates: &[FileInfo],
    shape: PatternShape,
    search: &Pattern,
    replace: &Pattern,
) -> Result<RenamePlan> {
    let mapped: Vec<RenameMapping> = candidates
        .par_iter()
        .map(|file| {
            map_filename(shape, search, replace, &file.filename).map(|dest_name| RenameMapping {
                source_name: file.filename.clone(),
                dest_name,
            })
        })
        .collect::<Result<Vec<RenameMapping>>>()?;

    let mappings: Vec<RenameMapping> = mapped
        .into_iter()
        .filter(|mapping| {
            if mapping.source_name == mapping.dest_name {
                debug!("Skipping {}: name is unchanged", mapping.source_name);
                false
            } else {
                true
            }
        })
        .collect();

    ensure_unique_destinations(directory, &mappings)?;

    Ok(RenamePlan {
        directory: directory.to_path_buf(),
        mappings,
    })
}

/// Rejects plans in which two sources map to the same destination
///
/// Candidates are checked in input order, so the conflict reported is the
/// first collision encountered and no partial batch is ever applied.
fn ensure_unique_destinations(directory: &Path, mappings: &[RenameMapping]) -> Result<()> {
    let mut seen: HashSet<&str> = HashSet::new();
    for mapping in mappings {
        if !seen.insert(mapping.dest_name.as_str()) {
            return Err(destination_exists_error(
                directory.join(&mapping.source_name),
                directory.join(&mapping.dest_name),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::classify;

    fn candidates(names: &[&str]) -> Vec<FileInfo> {
        names
            .iter()
            .map(|name| FileInfo {
                path: PathBuf::from(name),
                filename: name.to_string(),
            })
            .collect()
    }

    fn plan(search: &str, replace: &str, names: &[&str]) -> Result<RenamePlan> {
        let search = Pattern::new(search).unwrap();
        let replace = Pattern::new(replace).unwrap();
        let shape = classify(&search, &replace);
        build_plan(Path::new("work"), &candidates(names), shape, &search, &replace)
    }

    #[test]
    fn test_build_plan_preserves_input_order() {
        let plan = plan("*.htm", "*.html", &["b.htm", "a.htm", "c.htm"]).unwrap();

        let sources: Vec<&str> = plan
            .mappings
            .iter()
            .map(|mapping| mapping.source_name.as_str())
            .collect();
        assert_eq!(
            sources,
            vec!["b.htm", "a.htm", "c.htm"],
            "Plan order must match candidate input order"
        );
        assert_eq!(plan.mappings[0].dest_name, "b.html");
    }

    #[test]
    fn test_build_plan_drops_unchanged_names() {
        // `notes.txt` maps onto itself and has nothing to do
        let plan = plan("*.txt", "*.txt", &["notes.txt"]).unwrap();

        assert!(
            plan.mappings.is_empty(),
            "A mapping onto the same name should be dropped from the plan"
        );
    }

    #[test]
    fn test_build_plan_rejects_colliding_destinations() {
        // Both sources collapse onto the literal destination
        let result = plan("file1.htm", "file1.html", &["file1.htm", "other.htm"]);

        assert!(result.is_err(), "Colliding destinations must fail the batch");
        let error_string = result.unwrap_err().to_string();
        assert!(
            error_string.contains("file1.html"),
            "Error message should name the colliding destination"
        );
    }

    #[test]
    fn test_build_plan_aborts_on_first_mapping_error() {
        // The second candidate does not contain the search anchor
        let result = plan("img*", "photo", &["img007.png", "picture.png"]);

        assert!(
            result.is_err(),
            "A single unmappable candidate must abort the whole batch"
        );
    }

    #[test]
    fn test_plan_paths_join_the_directory() {
        let plan = plan("*.htm", "*.html", &["a.htm"]).unwrap();
        let mapping = &plan.mappings[0];

        assert_eq!(plan.source_path(mapping), PathBuf::from("work/a.htm"));
        assert_eq!(plan.destination_path(mapping), PathBuf::from("work/a.html"));
    }
}

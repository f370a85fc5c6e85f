//! Settings loading functionality
//!
//! This module resolves and reads the optional settings file. An absent
//! file is not an error; the application then runs on flag defaults alone.

use std::fs;
use std::path::PathBuf;

use log::debug;
use serde_yaml::from_str;

use crate::config::Settings;
use crate::errors::{config_parsing_error, file_operation_error, Result};
use crate::utils::find_project_folder;

/// Resolves the settings file path
///
/// A path that exists is used as given; anything else is resolved inside
/// the application's standard configuration directory.
///
/// # Arguments
/// * `config` - The settings file path as given on the command line
///
/// # Returns
/// * `Result<PathBuf>` - The resolved settings file path
///
/// # Errors
/// Returns an error if the configuration directory cannot be determined
pub fn read_or_create(config: PathBuf) -> Result<PathBuf> {
    if config.exists() {
        Ok(config)
    } else {
        let folder = find_project_folder()?;
        Ok(folder.config_dir().join(config))
    }
}

/// Loads settings from a file
///
/// A file that does not exist yields default settings, since the settings
/// file is optional for this tool.
///
/// # Arguments
/// * `file` - Path to the settings file
///
/// # Returns
/// * `Result<Settings>` - The loaded settings or an error
///
/// # Errors
/// * Returns an error if an existing file cannot be read
/// * Returns an error if the file is not valid YAML
pub fn load_settings(file: PathBuf) -> Result<Settings> {
    if !file.exists() {
        debug!("No settings file at {}, using defaults", file.display());
        return Ok(Settings::default());
    }

    let content = fs::read_to_string(&file)
        .map_err(|e| file_operation_error(e, file.clone(), "read"))?;

    let settings: Settings = from_str(&content).map_err(|e| {
        config_parsing_error(
            e,
            &format!(
                "Failed to parse settings file {}, please check the YAML syntax",
                file.display()
            ),
        )
    })?;

    debug!("Loaded settings from {}", file.display());

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::write;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_missing_file_yields_defaults() {
        let temp_dir = tempdir().expect("Failed to create temp directory");

        let settings = load_settings(temp_dir.path().join("absent.yaml")).unwrap();

        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_settings_reads_yaml() {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let file = temp_dir.path().join("config.yaml");
        write(
            &file,
            "dry_run: true\ninteractive: false\nverbosity: debug\nlog_file: run.log\n",
        )
        .unwrap();

        let settings = load_settings(file).unwrap();

        assert!(settings.dry_run);
        assert!(!settings.interactive);
        assert_eq!(settings.verbosity.as_deref(), Some("debug"));
        assert_eq!(settings.log_file.as_deref(), Some("run.log"));
    }

    #[test]
    fn test_load_settings_rejects_invalid_yaml() {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let file = temp_dir.path().join("config.yaml");
        write(&file, "dry_run: [unclosed").unwrap();

        let result = load_settings(file);
        assert!(result.is_err(), "Invalid YAML must be rejected");
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("check the YAML syntax"),
            "Error message should point at the YAML syntax"
        );
    }

    #[test]
    fn test_read_or_create_keeps_existing_path() {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let file = temp_dir.path().join("config.yaml");
        write(&file, "dry_run: false\n").unwrap();

        let resolved = read_or_create(file.clone()).unwrap();
        assert_eq!(resolved, file);
    }
}

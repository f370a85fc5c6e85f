use std::fs::create_dir_all;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use shellexpand::tilde;

use crate::constants::{APPLICATION, ORGANIZATION, QUALIFIER};
use crate::errors::{generic_error, Result};

/// Expand a tilde in a user-supplied path
pub fn process_path(path: &str) -> PathBuf {
    let mut expanded: String = tilde(path).to_string();
    if expanded.ends_with(':') {
        expanded.push('\\');
    }
    PathBuf::from(expanded)
}

pub(crate) fn find_project_folder() -> Result<ProjectDirs> {
    let folder = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .ok_or_else(|| generic_error("Failed to determine project directories"))?;

    if !folder.config_dir().exists() {
        create_dir_all(folder.config_dir())?;
    }
    Ok(folder)
}

#[cfg(unix)]
pub(crate) fn is_hidden_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}

#[cfg(windows)]
pub(crate) fn is_hidden_file(path: &Path) -> bool {
    use std::os::windows::fs::MetadataExt;

    if let Ok(metadata) = path.metadata() {
        metadata.file_attributes() & 0x2 != 0 // FILE_ATTRIBUTE_HIDDEN
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_path_plain() {
        assert_eq!(process_path("work/files"), PathBuf::from("work/files"));
    }

    #[test]
    fn test_process_path_expands_tilde() {
        let expanded = process_path("~/files");
        assert!(
            !expanded.to_string_lossy().starts_with('~'),
            "Tilde should be expanded to the home directory"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_is_hidden_file() {
        assert!(is_hidden_file(Path::new("dir/.hidden")));
        assert!(!is_hidden_file(Path::new("dir/visible.txt")));
    }
}

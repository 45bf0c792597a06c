//! Figure destination validation.

use crate::utils::error::OutputError;
use log::debug;
use std::path::Path;

/// Validate an output path before rendering
///
/// **Public** - called for both figure destinations up front
///
/// The destination directory must already exist; this tool never creates
/// directories, so the operator fixes the path and reruns.
///
/// # Errors
/// * `OutputError::InvalidPath` - empty path, or path is a directory
/// * `OutputError::MissingDirectory` - parent directory does not exist
pub fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        // An empty parent means a bare filename in the working directory
        if !parent.as_os_str().is_empty() && !parent.exists() {
            return Err(OutputError::MissingDirectory(parent.to_path_buf()));
        }
    }

    if let Some(ext) = path.extension() {
        if ext != "png" && ext != "svg" {
            debug!("Unusual figure extension: {}", path.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_validate_empty_path() {
        let result = validate_output_path(Path::new(""));
        assert!(matches!(result, Err(OutputError::InvalidPath(_))));
    }

    #[test]
    fn test_validate_directory_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = validate_output_path(temp_dir.path());
        assert!(matches!(result, Err(OutputError::InvalidPath(_))));
    }

    #[test]
    fn test_validate_missing_parent() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("no/such/dir/histogram.png");

        let result = validate_output_path(&path);

        match result {
            Err(OutputError::MissingDirectory(parent)) => {
                assert_eq!(parent, temp_dir.path().join("no/such/dir"));
            }
            other => panic!("expected MissingDirectory, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_bare_filename() {
        assert!(validate_output_path(&PathBuf::from("histogram.png")).is_ok());
    }

    #[test]
    fn test_validate_existing_parent() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("histogram.svg");

        assert!(validate_output_path(&path).is_ok());
    }
}

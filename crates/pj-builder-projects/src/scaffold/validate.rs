//! Pre-flight checks run before anything touches the filesystem

use crate::error::{Error, Result};
use camino::Utf8Path;
use tracing::debug;

/// Ensure the project name is usable
///
/// Only emptiness is rejected. Names containing characters the filesystem
/// refuses surface later as rename/move errors.
pub fn validate_project_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::EmptyProjectName);
    }
    Ok(())
}

/// Ensure nothing occupies the target path
///
/// Any entry counts, including regular files and dangling symlinks. A
/// metadata lookup that fails for another reason (e.g. permissions) is
/// treated as "absent"; the final move reports the real problem.
pub fn check_target_available(target: &Utf8Path) -> Result<()> {
    match std::fs::symlink_metadata(target) {
        Ok(_) => Err(Error::project_exists(target.as_str())),
        Err(e) => {
            debug!("Target {} is free ({})", target, e.kind());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_validate_project_name() {
        assert!(validate_project_name("myapp").is_ok());
        assert!(validate_project_name("my app/with:odd*chars").is_ok());
        assert!(matches!(
            validate_project_name(""),
            Err(Error::EmptyProjectName)
        ));
    }

    #[test]
    fn test_target_available_when_missing() {
        let temp_dir = TempDir::new().unwrap();
        let base = Utf8Path::from_path(temp_dir.path()).unwrap();

        assert!(check_target_available(&base.join("myapp")).is_ok());
    }

    #[test]
    fn test_target_taken_by_directory() {
        let temp_dir = TempDir::new().unwrap();
        let base = Utf8Path::from_path(temp_dir.path()).unwrap();
        std::fs::create_dir(base.join("myapp")).unwrap();

        let err = check_target_available(&base.join("myapp")).unwrap_err();
        assert!(matches!(err, Error::ProjectExists { .. }));
        assert!(err.to_string().ends_with("myapp already exists"));
    }

    #[test]
    fn test_target_taken_by_file() {
        let temp_dir = TempDir::new().unwrap();
        let base = Utf8Path::from_path(temp_dir.path()).unwrap();
        std::fs::write(base.join("myapp"), "occupied").unwrap();

        assert!(matches!(
            check_target_available(&base.join("myapp")),
            Err(Error::ProjectExists { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_target_taken_by_dangling_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let base = Utf8Path::from_path(temp_dir.path()).unwrap();
        std::os::unix::fs::symlink(base.join("nowhere"), base.join("myapp")).unwrap();

        assert!(check_target_available(&base.join("myapp")).is_err());
    }
}

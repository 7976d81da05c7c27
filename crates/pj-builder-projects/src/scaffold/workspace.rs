//! Temporary workspace the template is cloned and prepared in

use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::io;
use std::path::Path;
use tempfile::TempDir;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Exclusively owned scratch directory for one scaffold run
///
/// The directory is removed when the workspace is dropped, so any failure
/// between provisioning and [`Workspace::finalize`] leaves nothing behind.
#[derive(Debug)]
pub struct Workspace {
    dir: TempDir,
    path: Utf8PathBuf,
}

impl Workspace {
    /// Create a uniquely named directory under the system temp directory,
    /// or under `parent` when given
    pub fn provision(prefix: &str, parent: Option<&Utf8Path>) -> Result<Self> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(prefix);
        let dir = match parent {
            Some(parent) => builder.tempdir_in(parent),
            None => builder.tempdir(),
        }
        .map_err(Error::TempDir)?;

        let path = Utf8PathBuf::from_path_buf(dir.path().to_path_buf())
            .map_err(|p| Error::invalid_path(p.display().to_string()))?;

        info!("Working directory: {}", path);
        Ok(Self { dir, path })
    }

    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Move the prepared tree to `target`
    ///
    /// A plain rename is tried first. When the temp directory sits on a
    /// different filesystem the tree is copied into a target directory
    /// created by this call, and the workspace is removed afterwards.
    pub async fn finalize(self, target: &Utf8Path) -> Result<Utf8PathBuf> {
        let Workspace { dir, path } = self;

        match tokio::fs::rename(&path, target).await {
            Ok(()) => {
                // Nothing left at the old path for TempDir to clean up
                let _ = dir.keep();
            }
            Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
                warn!(
                    "{} and {} are on different filesystems, copying instead",
                    path, target
                );
                let (src, dst) = (path.clone(), target.to_path_buf());
                tokio::task::spawn_blocking(move || {
                    move_by_copy(src.as_std_path(), dst.as_std_path())
                })
                .await
                .map_err(|e| {
                    Error::move_failed(path.as_str(), target.as_str(), io::Error::other(e))
                })?
                .map_err(|e| Error::move_failed(path.as_str(), target.as_str(), e))?;
                drop(dir);
            }
            Err(e) => return Err(Error::move_failed(path.as_str(), target.as_str(), e)),
        }

        Ok(target.to_path_buf())
    }
}

/// Copy `src` into a newly created `dst`, then remove `src`
///
/// `dst` must not exist yet: an existing entry fails with
/// `AlreadyExists` and is left as it was. A failed copy removes only the
/// directory created here.
fn move_by_copy(src: &Path, dst: &Path) -> io::Result<()> {
    std::fs::create_dir(dst)?;

    if let Err(e) = copy_tree(src, dst) {
        if let Err(cleanup) = std::fs::remove_dir_all(dst) {
            debug!("Could not remove partial copy {}: {}", dst.display(), cleanup);
        }
        return Err(e);
    }

    // The project is in place; a leftover source is still removed with the TempDir
    if let Err(e) = std::fs::remove_dir_all(src) {
        debug!("Could not remove {}: {}", src.display(), e);
    }
    Ok(())
}

/// Copy the contents of `src` into the existing directory `dst`,
/// recreating symlinks instead of following them
fn copy_tree(src: &Path, dst: &Path) -> io::Result<()> {
    for entry in WalkDir::new(src).min_depth(1).follow_links(false) {
        let entry = entry?;
        let relative = entry.path().strip_prefix(src).map_err(io::Error::other)?;
        let dest = dst.join(relative);
        let file_type = entry.file_type();

        if file_type.is_dir() {
            std::fs::create_dir(&dest)?;
        } else if file_type.is_symlink() {
            copy_symlink(entry.path(), &dest)?;
        } else {
            std::fs::copy(entry.path(), &dest)?;
        }
    }
    Ok(())
}

#[cfg(unix)]
fn copy_symlink(src: &Path, dest: &Path) -> io::Result<()> {
    let link = std::fs::read_link(src)?;
    std::os::unix::fs::symlink(link, dest)
}

#[cfg(not(unix))]
fn copy_symlink(src: &Path, dest: &Path) -> io::Result<()> {
    std::fs::copy(src, dest).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utf8(temp_dir: &TempDir) -> &Utf8Path {
        Utf8Path::from_path(temp_dir.path()).unwrap()
    }

    #[test]
    fn test_provision_uses_prefix() {
        let parent = TempDir::new().unwrap();
        let workspace = Workspace::provision("pj", Some(utf8(&parent))).unwrap();

        assert!(workspace.path().is_dir());
        assert!(workspace.path().file_name().unwrap().starts_with("pj"));
        assert_eq!(workspace.path().parent().unwrap(), utf8(&parent));
    }

    #[test]
    fn test_provision_is_unique() {
        let parent = TempDir::new().unwrap();
        let first = Workspace::provision("pj", Some(utf8(&parent))).unwrap();
        let second = Workspace::provision("pj", Some(utf8(&parent))).unwrap();

        assert_ne!(first.path(), second.path());
    }

    #[test]
    fn test_provision_in_missing_parent_fails() {
        let parent = TempDir::new().unwrap();
        let missing = utf8(&parent).join("missing");

        let err = Workspace::provision("pj", Some(&missing)).unwrap_err();
        assert!(matches!(err, Error::TempDir(_)));
    }

    #[test]
    fn test_drop_removes_workspace() {
        let parent = TempDir::new().unwrap();
        let workspace = Workspace::provision("pj", Some(utf8(&parent))).unwrap();
        let path = workspace.path().to_path_buf();
        std::fs::write(path.join("file.txt"), "data").unwrap();

        drop(workspace);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_finalize_moves_tree() {
        let parent = TempDir::new().unwrap();
        let workspace = Workspace::provision("pj", Some(utf8(&parent))).unwrap();
        let old_path = workspace.path().to_path_buf();
        std::fs::create_dir(old_path.join("cmd")).unwrap();
        std::fs::write(old_path.join("cmd/main.go"), "package main").unwrap();

        let target = utf8(&parent).join("myapp");
        let result = workspace.finalize(&target).await.unwrap();

        assert_eq!(result, target);
        assert!(target.join("cmd/main.go").is_file());
        assert!(!old_path.exists());
    }

    #[tokio::test]
    async fn test_finalize_failure_still_cleans_up() {
        let parent = TempDir::new().unwrap();
        let workspace = Workspace::provision("pj", Some(utf8(&parent))).unwrap();
        let old_path = workspace.path().to_path_buf();

        let target = utf8(&parent).join("no-such-dir").join("myapp");
        let err = workspace.finalize(&target).await.unwrap_err();

        assert!(matches!(err, Error::Move { .. }));
        assert!(!old_path.exists());
    }

    fn source_tree(root: &Path) -> std::path::PathBuf {
        let src = root.join("src");
        std::fs::create_dir_all(src.join("a/b")).unwrap();
        std::fs::write(src.join("top.txt"), "top").unwrap();
        std::fs::write(src.join("a/b/deep.txt"), "deep").unwrap();
        std::fs::create_dir(src.join("empty")).unwrap();
        src
    }

    #[test]
    fn test_move_by_copy_moves_tree() {
        let temp_dir = TempDir::new().unwrap();
        let src = source_tree(temp_dir.path());
        let dst = temp_dir.path().join("dst");

        move_by_copy(&src, &dst).unwrap();

        assert_eq!(std::fs::read_to_string(dst.join("top.txt")).unwrap(), "top");
        assert_eq!(
            std::fs::read_to_string(dst.join("a/b/deep.txt")).unwrap(),
            "deep"
        );
        assert!(dst.join("empty").is_dir());
        assert!(!src.exists());
    }

    #[test]
    fn test_move_by_copy_leaves_existing_target_alone() {
        let temp_dir = TempDir::new().unwrap();
        let src = source_tree(temp_dir.path());
        let dst = temp_dir.path().join("dst");
        std::fs::create_dir(&dst).unwrap();
        std::fs::write(dst.join("keep.txt"), "mine").unwrap();

        let err = move_by_copy(&src, &dst).unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert_eq!(std::fs::read_to_string(dst.join("keep.txt")).unwrap(), "mine");
        assert!(!dst.join("top.txt").exists());
        assert!(src.join("a/b/deep.txt").is_file());
    }

    #[test]
    fn test_move_by_copy_failure_removes_partial_target() {
        let temp_dir = TempDir::new().unwrap();
        let src = temp_dir.path().join("missing");
        let dst = temp_dir.path().join("dst");

        assert!(move_by_copy(&src, &dst).is_err());
        assert!(!dst.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_move_by_copy_keeps_symlinks() {
        let temp_dir = TempDir::new().unwrap();
        let src = temp_dir.path().join("src");
        let dst = temp_dir.path().join("dst");
        std::fs::create_dir(&src).unwrap();
        std::fs::write(src.join("real.txt"), "real").unwrap();
        std::os::unix::fs::symlink("real.txt", src.join("link.txt")).unwrap();

        move_by_copy(&src, &dst).unwrap();

        let link = std::fs::read_link(dst.join("link.txt")).unwrap();
        assert_eq!(link, Path::new("real.txt"));
        assert_eq!(std::fs::read_to_string(dst.join("link.txt")).unwrap(), "real");
    }
}

//! Renaming and deletion passes over the scanned template

use crate::error::{Error, Result};
use crate::types::METADATA_DIR;
use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, info};

/// Path `dir` takes once the placeholder in its own name is replaced
///
/// Only the final component changes. Ancestors are renamed separately,
/// which is why the scan hands over directories innermost first.
pub fn renamed_path(dir: &Utf8Path, placeholder: &str, name: &str) -> Utf8PathBuf {
    match dir.file_name() {
        Some(file_name) => dir.with_file_name(file_name.replace(placeholder, name)),
        None => dir.to_path_buf(),
    }
}

/// Rename every placeholder directory, stopping at the first failure
///
/// Returns the `(from, to)` pairs in the order they were applied.
pub async fn rename_placeholder_dirs(
    dirs: &[Utf8PathBuf],
    placeholder: &str,
    name: &str,
) -> Result<Vec<(Utf8PathBuf, Utf8PathBuf)>> {
    info!("Renaming {} placeholder directories", dirs.len());

    let mut renames = Vec::with_capacity(dirs.len());
    for dir in dirs {
        let target = renamed_path(dir, placeholder, name);
        debug!("Renaming {} -> {}", dir, target);
        tokio::fs::rename(dir, &target)
            .await
            .map_err(|e| Error::rename(dir.as_str(), target.as_str(), e))?;
        renames.push((dir.clone(), target));
    }

    Ok(renames)
}

/// Where `path`, recorded before renaming, lives after `renames` were applied
///
/// `renames` must be in application order (innermost first).
pub fn relocate(path: &Utf8Path, renames: &[(Utf8PathBuf, Utf8PathBuf)]) -> Utf8PathBuf {
    renames
        .iter()
        .fold(path.to_path_buf(), |current, (from, to)| {
            match current.strip_prefix(from) {
                Ok(rest) if rest.as_str().is_empty() => to.clone(),
                Ok(rest) => to.join(rest),
                Err(_) => current,
            }
        })
}

/// Delete every listed file, stopping at the first failure
pub async fn remove_files(files: &[Utf8PathBuf]) -> Result<usize> {
    info!("Removing {} README files", files.len());

    for file in files {
        debug!("Removing {}", file);
        tokio::fs::remove_file(file)
            .await
            .map_err(|e| Error::remove_readme(file.as_str(), e))?;
    }

    Ok(files.len())
}

/// Recursively delete the version-control metadata at the root of `dir`
///
/// A tree without metadata is left as is.
pub async fn remove_metadata(dir: &Utf8Path) -> Result<()> {
    let metadata = dir.join(METADATA_DIR);
    info!("Removing {}", metadata);

    match tokio::fs::remove_dir_all(&metadata).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("No {} directory to remove", METADATA_DIR);
            Ok(())
        }
        Err(e) => Err(Error::remove_metadata(metadata.as_str(), e)),
    }
}

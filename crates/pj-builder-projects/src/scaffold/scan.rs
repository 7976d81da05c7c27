//! Single-pass walk of the cloned template

use crate::error::{Error, Result};
use crate::types::{ScanResult, METADATA_DIR};
use camino::{Utf8Path, Utf8PathBuf};
use std::ffi::OsStr;
use std::path::Path;
use tracing::{debug, info};
use walkdir::WalkDir;

/// Collect placeholder directories and README files under `root`
///
/// The walk is depth-first in file-name order and does not follow
/// symlinks. The top-level `.git` directory is not descended into since it
/// is deleted wholesale afterwards.
///
/// Placeholder directories are returned innermost first (reverse pre-order),
/// so every directory is renamed before any of its ancestors and recorded
/// paths stay valid while the list is processed. README files keep walk
/// order.
///
/// # Errors
/// Any traversal error aborts the scan with [`Error::Scan`].
pub fn scan_tree(root: &Utf8Path, placeholder: &str, readme_name: &str) -> Result<ScanResult> {
    info!(
        "Scanning {} for '{}' directories and {} files",
        root, placeholder, readme_name
    );

    let mut result = ScanResult::default();
    let walker = WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            !(e.depth() == 1
                && e.file_type().is_dir()
                && e.file_name() == OsStr::new(METADATA_DIR))
        });

    for entry in walker {
        let entry = entry.map_err(Error::Scan)?;

        // Names that are not UTF-8 can match neither the token nor the README name
        let Some(name) = entry.file_name().to_str() else {
            continue;
        };

        if entry.file_type().is_dir() {
            if name.ends_with(placeholder) {
                debug!("Placeholder directory: {}", entry.path().display());
                result.placeholder_dirs.push(to_utf8(entry.path())?);
            }
        } else if name == readme_name {
            debug!("README file: {}", entry.path().display());
            result.readme_files.push(to_utf8(entry.path())?);
        }
    }

    result.placeholder_dirs.reverse();

    info!(
        "Found {} placeholder directories and {} README files",
        result.placeholder_dirs.len(),
        result.readme_files.len()
    );
    Ok(result)
}

fn to_utf8(path: &Path) -> Result<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(path.to_path_buf())
        .map_err(|p| Error::invalid_path(p.display().to_string()))
}

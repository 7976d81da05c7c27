//! Project scaffolding from a template repository
//!
//! A run validates the name and target, clones the template into a private
//! temporary workspace, rewrites it in place and finally moves it to
//! `<base_dir>/<name>`:
//!
//! 1. [`validate_project_name`] and [`check_target_available`]
//! 2. [`Workspace::provision`]
//! 3. [`clone_repository`](crate::git::clone_repository)
//! 4. [`scan_tree`]
//! 5. [`rename_placeholder_dirs`], [`remove_files`] (paths moved with [`relocate`]),
//!    [`remove_metadata`]
//! 6. [`Workspace::finalize`]
//!
//! Steps run strictly in order and the first error aborts the run. The
//! workspace is removed on every early return.

mod prune;
mod scan;
mod validate;
mod workspace;

pub use prune::{
    relocate, remove_files, remove_metadata, rename_placeholder_dirs, renamed_path,
};
pub use scan::scan_tree;
pub use validate::{check_target_available, validate_project_name};
pub use workspace::Workspace;

use crate::error::Result;
use crate::git::{clone_repository, CloneOptions};
use crate::types::{ScaffoldOptions, ScaffoldReport};
use tracing::info;

/// Create the project `name` from the template described by `options`
///
/// # Errors
/// Returns the first failure of any step; see [`crate::Error`]. Nothing is
/// left in the temp directory on failure, and nothing is created at the
/// target unless the run succeeds.
pub async fn create_project(name: &str, options: &ScaffoldOptions) -> Result<ScaffoldReport> {
    validate_project_name(name)?;
    info!("App name: {}", name);

    let target = options.target_dir(name);
    check_target_available(&target)?;

    let workspace = Workspace::provision(&options.temp_prefix, options.temp_root.as_deref())?;

    let clone_options = CloneOptions {
        progress: options.show_progress,
    };
    clone_repository(&options.template_url, workspace.path(), &clone_options).await?;

    let scan = scan_tree(workspace.path(), &options.placeholder, &options.readme_name)?;

    let renames =
        rename_placeholder_dirs(&scan.placeholder_dirs, &options.placeholder, name).await?;

    // READMEs were recorded under the pre-rename directory names
    let readme_files: Vec<_> = scan
        .readme_files
        .iter()
        .map(|path| relocate(path, &renames))
        .collect();
    let removed_readmes = remove_files(&readme_files).await?;
    remove_metadata(workspace.path()).await?;

    let project_dir = workspace.finalize(&target).await?;
    info!("Project created: {}", project_dir);

    Ok(ScaffoldReport {
        project_dir,
        renamed_dirs: renames.len(),
        removed_readmes,
    })
}

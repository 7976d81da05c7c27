//! Git operations module
//!
//! Fetching the project template is the only git operation the scaffolder
//! needs. It shells out to the `git` binary, so no libgit2 is linked.
//!
//! # Examples
//!
//! ```no_run
//! use pj_builder_projects::git::{clone_repository, CloneOptions};
//! use camino::Utf8Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let url = "https://github.com/golang-standards/project-layout";
//! let dest = Utf8Path::new("/tmp/my-clone");
//! clone_repository(url, dest, &CloneOptions::default()).await?;
//! # Ok(())
//! # }
//! ```

mod clone;

pub use clone::{clone_repository, CloneOptions};

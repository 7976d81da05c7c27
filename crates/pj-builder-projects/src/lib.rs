//! # pj-builder-projects
//!
//! Scaffolding library behind the `pj-builder` CLI:
//! - Git operations (cloning the template repository)
//! - Template rewriting (placeholder directories, README stripping, metadata removal)
//! - Workspace lifecycle (temporary directory, final move into place)
//!
//! # Examples
//!
//! ## Create a project from the default template
//!
//! ```no_run
//! use pj_builder_projects::{create_project, ScaffoldOptions};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let options = ScaffoldOptions::new(".");
//! let report = create_project("myapp", &options).await?;
//! println!("created {}", report.project_dir);
//! # Ok(())
//! # }
//! ```
//!
//! ## Use another template
//!
//! ```no_run
//! use pj_builder_projects::{create_project, ScaffoldOptions};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let options = ScaffoldOptions::new("/srv/projects")
//!     .with_template_url("file:///srv/templates/service")
//!     .with_placeholder("__service__")
//!     .with_progress(false);
//! create_project("billing", &options).await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod git;
pub mod scaffold;
pub mod types;

pub use error::{Error, Result};

// Re-export the scaffolding entry point for convenience
pub use scaffold::create_project;
pub use types::{ScaffoldOptions, ScaffoldReport, ScanResult};

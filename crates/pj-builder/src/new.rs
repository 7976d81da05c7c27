//! Project creation handler

use anyhow::{Context, Result};
use pj_builder_projects::{create_project, ScaffoldOptions};
use tracing::{debug, info};

use crate::cli::Cli;

/// Create `<cwd>/<name>` from the default template
///
/// Only git's clone progress is written to stdout; every status line here
/// goes through `tracing` to stderr.
pub(crate) async fn run(cli: &Cli) -> Result<()> {
    let options = ScaffoldOptions::default();
    debug!("Scaffold options: {:?}", options);

    info!("Template: {}", options.template_url);
    info!("Location: {}", options.target_dir(&cli.name));

    let report = create_project(&cli.name, &options)
        .await
        .with_context(|| format!("Failed to create project '{}'", cli.name))?;

    info!(
        "Project '{}' created successfully ({} directories renamed, {} README files removed)",
        cli.name, report.renamed_dirs, report.removed_readmes
    );
    info!("Next step: cd {}", report.project_dir);

    Ok(())
}

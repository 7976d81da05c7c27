//! pj-builder CLI - scaffold a project from a template repository
//!
//! This is the main entry point for the pj-builder command-line interface.

mod cli;
mod new;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI args; a wrong argument count exits here with a usage error
    let cli = Cli::parse();

    init_tracing();

    new::run(&cli).await
}

/// Initialize tracing; operator messages go to stderr at info level
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::new("info"))
        .init();
}

//! CLI argument parsing with clap

use clap::Parser;

/// pj-builder - Create a Go project from golang-standards/project-layout
#[derive(Parser, Debug)]
#[command(name = "pj-builder")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Name of the project; also the directory created in the current directory
    #[arg(value_name = "PROJECT_NAME", allow_hyphen_values = true)]
    pub name: String,
}

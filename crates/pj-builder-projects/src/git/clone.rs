//! Repository cloning

use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::process::{ExitStatus, Stdio};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::process::Command;
use tracing::{debug, info};

/// Bytes of git output retained for error reporting
const CAPTURE_LIMIT: usize = 16 * 1024;

/// Options for cloning a repository
#[derive(Debug, Clone)]
pub struct CloneOptions {
    /// Relay git's progress output to stdout while cloning
    pub progress: bool,
}

impl Default for CloneOptions {
    fn default() -> Self {
        Self { progress: true }
    }
}

/// Clone a repository
///
/// Performs a full clone (no depth limit, default branch) into
/// `destination`, which may be an existing empty directory. Credential
/// prompts are disabled, so a repository that needs authentication fails
/// instead of blocking on the terminal.
///
/// # Arguments
/// * `url` - Repository URL to clone
/// * `destination` - Destination directory path
/// * `options` - Clone options
///
/// # Returns
/// Path to the cloned repository
///
/// # Errors
/// Returns error if:
/// - Invalid repository URL
/// - Git is not installed
/// - Clone operation fails (the error carries git's diagnostic)
pub async fn clone_repository(
    url: &str,
    destination: &Utf8Path,
    options: &CloneOptions,
) -> Result<Utf8PathBuf> {
    info!("Cloning repository: {} -> {}", url, destination);

    if !is_valid_repo_url(url) {
        return Err(Error::clone_failed(url, "unsupported repository URL"));
    }

    let mut cmd = Command::new("git");
    cmd.arg("clone");
    if options.progress {
        cmd.arg("--progress");
    }
    cmd.arg(url)
        .arg(destination.as_str())
        .env("GIT_TERMINAL_PROMPT", "0")
        .stdin(Stdio::null())
        .stdout(if options.progress {
            Stdio::inherit()
        } else {
            Stdio::null()
        })
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    debug!("Running: git clone");
    let mut child = cmd.spawn().map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => Error::GitNotFound,
        _ => Error::Io(e),
    })?;

    // git reports progress on stderr; forward it while keeping a tail for diagnostics
    let mut captured = Vec::new();
    if let Some(mut stderr) = child.stderr.take() {
        let mut stdout = tokio::io::stdout();
        let mut buf = [0u8; 4096];
        loop {
            let n = stderr.read(&mut buf).await?;
            if n == 0 {
                break;
            }
            if options.progress {
                stdout.write_all(&buf[..n]).await?;
                stdout.flush().await?;
            }
            captured.extend_from_slice(&buf[..n]);
            if captured.len() > CAPTURE_LIMIT {
                captured.drain(..captured.len() - CAPTURE_LIMIT);
            }
        }
    }

    let status = child.wait().await?;
    if !status.success() {
        let output = String::from_utf8_lossy(&captured);
        return Err(Error::clone_failed(url, failure_message(&output, status)));
    }

    info!("Repository cloned successfully");
    Ok(destination.to_path_buf())
}

/// Validate if a string is a cloneable repository URL
fn is_valid_repo_url(url: &str) -> bool {
    url.starts_with("https://")
        || url.starts_with("http://")
        || url.starts_with("git@")
        || url.starts_with("ssh://")
        || url.starts_with("file://")
}

/// Pick the meaningful lines out of git's output
///
/// Progress updates are separated by carriage returns, so both `\r` and
/// `\n` split lines. `fatal:`/`error:` lines win; otherwise the last line
/// is used, and the exit status when git printed nothing.
fn failure_message(output: &str, status: ExitStatus) -> String {
    let lines: Vec<&str> = output
        .split(['\r', '\n'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let diagnostics: Vec<&str> = lines
        .iter()
        .copied()
        .filter(|line| line.starts_with("fatal:") || line.starts_with("error:"))
        .collect();

    if !diagnostics.is_empty() {
        diagnostics.join("; ")
    } else if let Some(last) = lines.last() {
        (*last).to_string()
    } else {
        format!("git exited with {}", status)
    }
}

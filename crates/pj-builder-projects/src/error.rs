//! Error types for pj-builder-projects

use thiserror::Error;

/// Result type alias using pj-builder-projects's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Scaffolding error types
#[derive(Error, Debug)]
pub enum Error {
    /// Project name argument was empty
    #[error("app name is empty")]
    EmptyProjectName,

    /// Something already occupies the target path
    #[error("{path} already exists")]
    ProjectExists { path: String },

    /// Temporary workspace could not be created
    #[error("failed to create temp dir")]
    TempDir(#[source] std::io::Error),

    /// Git command not found
    #[error("Git command not found. Please ensure git is installed and in PATH")]
    GitNotFound,

    /// Clone failed
    #[error("failed to clone {url}: {message}")]
    CloneFailed { url: String, message: String },

    /// Walking the cloned tree failed
    #[error("failed in listing directories")]
    Scan(#[source] walkdir::Error),

    /// Path cannot be represented as UTF-8
    #[error("Invalid path: {path}")]
    InvalidPath { path: String },

    /// Renaming a placeholder directory failed
    #[error("failed to rename directory {from} -> {to}")]
    Rename {
        from: String,
        to: String,
        #[source]
        source: std::io::Error,
    },

    /// Removing a README file failed
    #[error("failed to remove {path}")]
    RemoveReadme {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Removing the version-control metadata failed
    #[error("failed to remove {path} directory")]
    RemoveMetadata {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Moving the workspace into place failed
    #[error("failed to move directory {from} -> {to}")]
    Move {
        from: String,
        to: String,
        #[source]
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a project exists error
    pub fn project_exists(path: impl Into<String>) -> Self {
        Self::ProjectExists { path: path.into() }
    }

    /// Create a clone failed error
    pub fn clone_failed(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::CloneFailed {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create an invalid path error
    pub fn invalid_path(path: impl Into<String>) -> Self {
        Self::InvalidPath { path: path.into() }
    }

    pub fn rename(
        from: impl Into<String>,
        to: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Self::Rename {
            from: from.into(),
            to: to.into(),
            source,
        }
    }

    pub fn remove_readme(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::RemoveReadme {
            path: path.into(),
            source,
        }
    }

    pub fn remove_metadata(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::RemoveMetadata {
            path: path.into(),
            source,
        }
    }

    pub fn move_failed(
        from: impl Into<String>,
        to: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Self::Move {
            from: from.into(),
            to: to.into(),
            source,
        }
    }
}

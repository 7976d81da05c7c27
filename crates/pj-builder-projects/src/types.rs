//! Core types for project scaffolding

use camino::Utf8PathBuf;

/// Template repository cloned for every new project
pub const DEFAULT_TEMPLATE_URL: &str = "https://github.com/golang-standards/project-layout";

/// Token in template directory names that is replaced by the project name
pub const DEFAULT_PLACEHOLDER: &str = "_your_app_";

/// Template documentation files stripped from the new project
pub const DEFAULT_README_NAME: &str = "README.md";

/// Prefix of the temporary workspace directory
pub const DEFAULT_TEMP_PREFIX: &str = "pj";

/// Version-control metadata directory removed from the new project
pub const METADATA_DIR: &str = ".git";

/// Options for scaffolding a project
///
/// Every input the scaffolder needs besides the project name lives here, so
/// callers decide the target root and template instead of the library
/// reading process-global state.
#[derive(Debug, Clone)]
pub struct ScaffoldOptions {
    /// Directory the project is created in
    pub base_dir: Utf8PathBuf,
    /// Repository URL to clone
    pub template_url: String,
    /// Directory name token replaced by the project name
    pub placeholder: String,
    /// File name removed everywhere in the tree
    pub readme_name: String,
    /// Prefix of the temporary workspace
    pub temp_prefix: String,
    /// Directory the workspace is created in; the system temp dir when unset
    pub temp_root: Option<Utf8PathBuf>,
    /// Relay clone progress to stdout
    pub show_progress: bool,
}

impl Default for ScaffoldOptions {
    fn default() -> Self {
        Self {
            base_dir: Utf8PathBuf::from("."),
            template_url: DEFAULT_TEMPLATE_URL.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            readme_name: DEFAULT_README_NAME.to_string(),
            temp_prefix: DEFAULT_TEMP_PREFIX.to_string(),
            temp_root: None,
            show_progress: true,
        }
    }
}

impl ScaffoldOptions {
    /// Create options rooted at `base_dir` with every other field defaulted
    pub fn new(base_dir: impl Into<Utf8PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            ..Default::default()
        }
    }

    pub fn with_template_url(mut self, url: impl Into<String>) -> Self {
        self.template_url = url.into();
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_temp_root(mut self, temp_root: impl Into<Utf8PathBuf>) -> Self {
        self.temp_root = Some(temp_root.into());
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Path the project named `name` will occupy
    pub fn target_dir(&self, name: &str) -> Utf8PathBuf {
        self.base_dir.join(name)
    }
}

/// Paths collected by a single walk of the cloned template
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    /// Directories whose name ends with the placeholder, innermost first
    pub placeholder_dirs: Vec<Utf8PathBuf>,
    /// Files named exactly like the README
    pub readme_files: Vec<Utf8PathBuf>,
}

/// Outcome of a successful scaffold
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    /// Where the project now lives
    pub project_dir: Utf8PathBuf,
    /// Number of placeholder directories renamed
    pub renamed_dirs: usize,
    /// Number of README files removed
    pub removed_readmes: usize,
}

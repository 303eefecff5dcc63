//! Resolved filesystem layout for a launcher project
//!
//! All paths the launcher touches are computed once, up front, from the
//! project root and the active configuration. Nothing downstream joins path
//! segments on its own.

use std::path::{Path, PathBuf};

use crate::config::Config;

/// Marker filename inside the virtual environment
pub const MARKER_FILE: &str = "installed.flag";

/// Advisory lock filename, sibling of the environment directory so it
/// survives `clean`
pub const LOCK_FILE: &str = ".venv.lock";

/// Resolved paths for one project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    /// Project root (working directory by default)
    pub root: PathBuf,
    /// Virtual environment root
    pub venv_dir: PathBuf,
    /// Install marker inside the environment
    pub marker: PathBuf,
    /// Setup lock file
    pub lock_file: PathBuf,
    /// Dependency manifest
    pub manifest: PathBuf,
    /// Dashboard entry file
    pub app_entry: PathBuf,
}

impl ProjectPaths {
    /// Resolve the layout for `root` under `config`.
    ///
    /// Relative config paths are anchored at the project root; absolute
    /// paths are taken as-is.
    pub fn resolve(root: &Path, config: &Config) -> Self {
        let venv_dir = anchor(root, &config.paths.venv_dir);
        let marker = venv_dir.join(MARKER_FILE);
        let lock_file = venv_dir
            .parent()
            .unwrap_or(root)
            .join(LOCK_FILE);

        Self {
            root: root.to_path_buf(),
            marker,
            lock_file,
            manifest: anchor(root, &config.paths.manifest),
            app_entry: anchor(root, &config.app.entry),
            venv_dir,
        }
    }
}

fn anchor(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

//! Python interpreter discovery
//!
//! Resolution order: explicit override (config or HYFI_PYTHON), then the
//! conventional interpreter names on PATH. An override that does not answer
//! `--version` is an error rather than a fallthrough, so a typo in the
//! config never silently picks up a different system Python.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::{LaunchError, LaunchResult};

/// Interpreter names probed on PATH, in order
#[cfg(not(windows))]
const PATH_CANDIDATES: &[&str] = &["python3", "python"];
#[cfg(windows)]
const PATH_CANDIDATES: &[&str] = &["python", "py"];

/// A resolved Python interpreter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpreter {
    /// Command or path the interpreter was resolved as
    pub path: PathBuf,
    /// Version string as reported, e.g. "3.12.1"
    pub version: String,
}

impl Interpreter {
    /// Resolve an interpreter, preferring `override_path` when given.
    pub fn resolve(override_path: Option<&Path>) -> LaunchResult<Interpreter> {
        if let Some(path) = override_path {
            return probe(path).ok_or_else(|| LaunchError::PythonNotFound {
                candidates: vec![path.display().to_string()],
            });
        }

        for candidate in PATH_CANDIDATES {
            if let Some(interpreter) = probe(Path::new(candidate)) {
                return Ok(interpreter);
            }
        }

        Err(LaunchError::PythonNotFound {
            candidates: PATH_CANDIDATES.iter().map(|c| c.to_string()).collect(),
        })
    }
}

/// Run `<path> --version` and parse the reported version.
///
/// Returns None when the command cannot be spawned or exits nonzero.
fn probe(path: &Path) -> Option<Interpreter> {
    let output = Command::new(path)
        .arg("--version")
        .stdin(Stdio::null())
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    // Old interpreters print the version to stderr
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    let banner = if stdout.trim().is_empty() {
        stderr
    } else {
        stdout
    };

    Some(Interpreter {
        path: path.to_path_buf(),
        version: parse_version_banner(&banner),
    })
}

/// Extract "3.12.1" from a banner like "Python 3.12.1".
fn parse_version_banner(banner: &str) -> String {
    let trimmed = banner.trim();
    trimmed
        .strip_prefix("Python ")
        .unwrap_or(trimmed)
        .to_string()
}

//! Virtual environment handling
//!
//! Nothing is ever "activated" here: the environment's binaries are
//! addressed by explicit path, so the launcher's own process state never
//! changes and no subshell is involved.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::{LaunchError, LaunchResult};
use crate::interpreter::Interpreter;

/// A project-local virtual environment, existing or not
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Venv {
    root: PathBuf,
}

impl Venv {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory presence is the existence flag; the environment is never
    /// recreated once the directory is there.
    pub fn exists(&self) -> bool {
        self.root.is_dir()
    }

    /// Path to the environment's own interpreter
    pub fn python(&self) -> PathBuf {
        self.bin_dir().join(exe("python"))
    }

    /// Path to the environment's streamlit entry point
    pub fn streamlit(&self) -> PathBuf {
        self.bin_dir().join(exe("streamlit"))
    }

    fn bin_dir(&self) -> PathBuf {
        #[cfg(windows)]
        {
            self.root.join("Scripts")
        }
        #[cfg(not(windows))]
        {
            self.root.join("bin")
        }
    }

    /// Create the environment with `python -m venv`.
    ///
    /// The caller is responsible for only invoking this when `exists()` is
    /// false; a failed creation may leave a partial directory behind, which
    /// `clean` removes.
    pub fn create(&self, interpreter: &Interpreter) -> LaunchResult<()> {
        let status = Command::new(&interpreter.path)
            .arg("-m")
            .arg("venv")
            .arg(&self.root)
            .stdin(Stdio::null())
            .status()
            .map_err(|e| LaunchError::VenvCreate {
                dir: self.root.clone(),
                message: e.to_string(),
            })?;

        if !status.success() {
            return Err(LaunchError::VenvCreate {
                dir: self.root.clone(),
                message: format!("python -m venv exited with {status}"),
            });
        }

        Ok(())
    }
}

fn exe(name: &str) -> String {
    #[cfg(windows)]
    {
        format!("{name}.exe")
    }
    #[cfg(not(windows))]
    {
        name.to_string()
    }
}

//! Dependency installation through pip
//!
//! Both steps run the environment's own interpreter with `-m pip`, never a
//! bare `pip` from PATH, so the system installation is untouched. Output
//! streams straight to the operator's terminal; pip's progress display is
//! better than anything we would paraphrase.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{LaunchError, LaunchResult};
use crate::venv::Venv;

/// Runs pip inside a virtual environment
pub struct Installer<'a> {
    venv: &'a Venv,
}

impl<'a> Installer<'a> {
    pub fn new(venv: &'a Venv) -> Self {
        Self { venv }
    }

    /// Upgrade pip itself before the manifest install, so old seed pips
    /// never choke on current wheels.
    pub fn upgrade_pip(&self) -> LaunchResult<()> {
        self.run_pip(&["install", "--upgrade", "pip"], "pip self-upgrade")
    }

    /// Install every package in the manifest.
    pub fn install_manifest(&self, manifest: &Path) -> LaunchResult<()> {
        let manifest_arg = manifest.display().to_string();
        self.run_pip(
            &["install", "-r", &manifest_arg],
            "manifest install",
        )
    }

    fn run_pip(&self, args: &[&str], what: &str) -> LaunchResult<()> {
        let python = self.venv.python();
        let status = Command::new(&python)
            .arg("-m")
            .arg("pip")
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| LaunchError::Install {
                message: format!("{what}: failed to run {}: {e}", python.display()),
            })?;

        if !status.success() {
            return Err(LaunchError::Install {
                message: format!("{what} exited with {status}"),
            });
        }

        Ok(())
    }
}

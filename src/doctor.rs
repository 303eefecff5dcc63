//! Read-only project health checks for the `check` command
//!
//! Each check inspects one piece of the launch prerequisites and never
//! mutates anything; `check` on a half-set-up project is always safe.

use crate::config::Config;
use crate::interpreter::Interpreter;
use crate::manifest::Manifest;
use crate::paths::ProjectPaths;
use crate::state::{self, InstallReason, SetupState};
use crate::venv::Venv;

/// Single check result
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchCheck {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
    pub recommendation: Option<String>,
}

/// Status of a check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Warning,
    Error,
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckStatus::Pass => write!(f, "✓"),
            CheckStatus::Warning => write!(f, "⚠"),
            CheckStatus::Error => write!(f, "✗"),
        }
    }
}

/// Check run results
#[derive(Debug, Clone, Default)]
pub struct LaunchReport {
    pub checks: Vec<LaunchCheck>,
}

impl LaunchReport {
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    pub fn add_pass(&mut self, name: &str, message: &str) {
        self.checks.push(LaunchCheck {
            name: name.to_string(),
            status: CheckStatus::Pass,
            message: message.to_string(),
            recommendation: None,
        });
    }

    pub fn add_warning(&mut self, name: &str, message: &str, recommendation: Option<&str>) {
        self.checks.push(LaunchCheck {
            name: name.to_string(),
            status: CheckStatus::Warning,
            message: message.to_string(),
            recommendation: recommendation.map(String::from),
        });
    }

    pub fn add_error(&mut self, name: &str, message: &str, recommendation: Option<&str>) {
        self.checks.push(LaunchCheck {
            name: name.to_string(),
            status: CheckStatus::Error,
            message: message.to_string(),
            recommendation: recommendation.map(String::from),
        });
    }

    pub fn passes(&self) -> usize {
        self.count(CheckStatus::Pass)
    }

    pub fn warnings(&self) -> usize {
        self.count(CheckStatus::Warning)
    }

    pub fn errors(&self) -> usize {
        self.count(CheckStatus::Error)
    }

    pub fn is_success(&self) -> bool {
        self.errors() == 0
    }

    fn count(&self, status: CheckStatus) -> usize {
        self.checks.iter().filter(|c| c.status == status).count()
    }
}

/// Run all launch prerequisite checks
pub fn run_checks(paths: &ProjectPaths, config: &Config) -> LaunchReport {
    let mut report = LaunchReport::new();

    check_interpreter(config, &mut report);
    check_manifest(paths, &mut report);
    check_environment(paths, &mut report);
    check_app_entry(paths, &mut report);

    report
}

fn check_interpreter(config: &Config, report: &mut LaunchReport) {
    match Interpreter::resolve(config.python.interpreter.as_deref()) {
        Ok(interpreter) => {
            report.add_pass(
                "interpreter",
                &format!(
                    "Python {} ({})",
                    interpreter.version,
                    interpreter.path.display()
                ),
            );
        }
        Err(err) => {
            report.add_error(
                "interpreter",
                &err.to_string(),
                Some("Install Python 3 or set HYFI_PYTHON / [python].interpreter"),
            );
        }
    }
}

fn check_manifest(paths: &ProjectPaths, report: &mut LaunchReport) {
    match Manifest::load(&paths.manifest) {
        Ok(manifest) => {
            report.add_pass(
                "manifest",
                &format!(
                    "{} ({} packages)",
                    paths.manifest.display(),
                    manifest.specifiers.len()
                ),
            );
        }
        Err(_) => {
            report.add_error(
                "manifest",
                &format!("{} not found", paths.manifest.display()),
                Some("Create the dependency manifest next to the dashboard"),
            );
        }
    }
}

fn check_environment(paths: &ProjectPaths, report: &mut LaunchReport) {
    let venv = Venv::new(&paths.venv_dir);
    if !venv.exists() {
        report.add_warning(
            "environment",
            "virtual environment not created yet",
            Some("Run `hyfi-launcher setup`"),
        );
        return;
    }
    report.add_pass(
        "environment",
        &format!("{} exists", paths.venv_dir.display()),
    );

    // Marker state only means something against a readable manifest
    match state::detect(paths) {
        Ok(SetupState::Ready) => {
            report.add_pass("dependencies", "installed and current");
        }
        Ok(SetupState::NeedsInstall(InstallReason::ManifestChanged)) => {
            report.add_warning(
                "dependencies",
                "manifest changed since last install",
                Some("Run `hyfi-launcher setup` to reinstall"),
            );
        }
        Ok(SetupState::NeedsInstall(_)) | Ok(SetupState::NeedsEnvironment) => {
            report.add_warning(
                "dependencies",
                "not installed yet",
                Some("Run `hyfi-launcher setup`"),
            );
        }
        Err(_) => {
            // Missing manifest already reported by check_manifest
        }
    }
}

fn check_app_entry(paths: &ProjectPaths, report: &mut LaunchReport) {
    if paths.app_entry.is_file() {
        report.add_pass(
            "application",
            &format!("{} exists", paths.app_entry.display()),
        );
    } else {
        report.add_error(
            "application",
            &format!("{} not found", paths.app_entry.display()),
            Some("Point [app].entry at the dashboard entry file"),
        );
    }
}

//! Command handlers for the launcher CLI
//!
//! Each handler owns its printing; the library layer stays silent and
//! reports progress through [`SetupEvent`] callbacks.

mod check;
mod clean;
mod run;
mod setup;

pub use check::cmd_check;
pub use clean::cmd_clean;
pub use run::cmd_run;
pub use setup::cmd_setup;

use std::path::PathBuf;

use anyhow::{Context, Result};
use hyfi_launcher::bootstrap::SetupEvent;
use hyfi_launcher::ProjectPaths;

/// Resolve the project root from the -C flag or the working directory
pub fn project_root(flag: Option<PathBuf>) -> Result<PathBuf> {
    match flag {
        Some(root) => Ok(root),
        None => std::env::current_dir().context("could not determine working directory"),
    }
}

/// Shared progress rendering for run/setup
pub(crate) fn report_setup_event(event: &SetupEvent) {
    match event {
        SetupEvent::WaitingForLock => {
            println!("⏳ Another instance is running setup; waiting for it to finish...");
        }
        SetupEvent::CreatingEnvironment => {
            println!("📦 Creating virtual environment...");
        }
        SetupEvent::EnvironmentExists => {
            println!("✓ Virtual environment present");
        }
        SetupEvent::InstallingDependencies(reason) => {
            println!("⬇ Installing dependencies ({reason})...");
        }
        SetupEvent::DependenciesCurrent => {
            println!("✓ Dependencies up to date");
        }
    }
}

pub(crate) fn print_layout(paths: &ProjectPaths) {
    println!("Project:     {}", paths.root.display());
    println!("Environment: {}", paths.venv_dir.display());
    println!("Manifest:    {}", paths.manifest.display());
    println!("Entry:       {}", paths.app_entry.display());
    println!();
}

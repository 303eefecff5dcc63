//! Clean command: remove the virtual environment
//!
//! The launcher itself never deletes the environment during normal runs;
//! this is the explicit recovery path (partial venv after a failed create,
//! broken package set, interpreter upgrade).

use std::path::Path;

use anyhow::{bail, Result};
use is_terminal::IsTerminal;

use hyfi_launcher::{Config, ProjectPaths, Venv};

pub fn cmd_clean(root: &Path, yes: bool) -> Result<()> {
    let config = Config::load_for_project(root)?;
    let paths = ProjectPaths::resolve(root, &config);
    let venv = Venv::new(&paths.venv_dir);

    if !venv.exists() {
        println!("Nothing to clean; {} does not exist.", paths.venv_dir.display());
        return Ok(());
    }

    if !yes {
        if !std::io::stdin().is_terminal() {
            bail!(
                "refusing to remove {} without --yes in non-interactive mode",
                paths.venv_dir.display()
            );
        }

        use dialoguer::Confirm;
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Remove {} and its installed packages?",
                paths.venv_dir.display()
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    std::fs::remove_dir_all(&paths.venv_dir)?;
    println!("✓ Removed {}", paths.venv_dir.display());
    println!("The next run will rebuild the environment from scratch.");

    Ok(())
}

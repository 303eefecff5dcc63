//! Setup command: bootstrap without launching

use std::path::Path;

use anyhow::Result;

use hyfi_launcher::{ensure_ready, Config, InstallOutcome, Interpreter, ProjectPaths};

pub fn cmd_setup(root: &Path, verbose: u8) -> Result<()> {
    let config = Config::load_for_project(root)?;
    let paths = ProjectPaths::resolve(root, &config);

    println!("🌊 HYFI Launcher Setup");
    if verbose > 0 {
        super::print_layout(&paths);
    }

    let interpreter = Interpreter::resolve(config.python.interpreter.as_deref())?;
    println!(
        "✓ Python {} ({})",
        interpreter.version,
        interpreter.path.display()
    );

    let summary = ensure_ready(&paths, &interpreter, |event| {
        super::report_setup_event(&event)
    })?;

    println!();
    match summary.install {
        InstallOutcome::Installed => println!("✓ Setup complete"),
        InstallOutcome::Skipped => println!("✓ Nothing to do; already set up"),
    }

    Ok(())
}

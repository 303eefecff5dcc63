//! Run command: the full check → ensure → install-once → launch sequence

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{bail, Result};

use hyfi_launcher::runner::{run_app, AppExit, RunOptions};
use hyfi_launcher::{ensure_ready, Config, Interpreter, ProjectPaths};

pub fn cmd_run(root: &Path, port: Option<u16>, verbose: u8) -> Result<()> {
    let config = Config::load_for_project(root)?;
    let paths = ProjectPaths::resolve(root, &config);

    println!("🌊 HYFI Launcher");
    if verbose > 0 {
        super::print_layout(&paths);
    }

    // Interpreter first: a missing Python must fail before anything is
    // created on disk.
    let interpreter = Interpreter::resolve(config.python.interpreter.as_deref())?;
    println!(
        "✓ Python {} ({})",
        interpreter.version,
        interpreter.path.display()
    );

    let summary = ensure_ready(&paths, &interpreter, |event| {
        super::report_setup_event(&event)
    })?;

    // Ctrl+C reaches the dashboard through the shared process group; the
    // handler only remembers that the stop was operator-initiated.
    let interrupted = Arc::new(AtomicBool::new(false));
    let flag = interrupted.clone();
    ctrlc::set_handler(move || {
        flag.store(true, Ordering::SeqCst);
    })?;

    let options = RunOptions {
        port: port.or(config.app.port),
        extra_args: config.app.extra_args.clone(),
    };

    println!(
        "🚀 Starting dashboard: {} (Ctrl+C to stop)",
        paths.app_entry.display()
    );
    println!();

    match run_app(&summary.venv, &paths.app_entry, &options, interrupted)? {
        AppExit::Clean => {
            println!();
            println!("✓ Dashboard exited");
            Ok(())
        }
        AppExit::Interrupted => {
            println!();
            println!("👋 Dashboard stopped");
            Ok(())
        }
        AppExit::Failed { code } => match code {
            Some(code) => bail!("dashboard exited with status {code}"),
            None => bail!("dashboard terminated by signal"),
        },
    }
}

//! Dashboard launch
//!
//! The final, blocking step: `python -m streamlit run app.py` with the
//! environment's interpreter. Going through `-m streamlit` rather than the
//! `streamlit` script keeps the invocation identical on Unix and Windows
//! and independent of the Scripts/bin layout.

use std::path::Path;
use std::process::{Command, Stdio};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::{LaunchError, LaunchResult};
use crate::venv::Venv;

/// Options forwarded to `streamlit run`
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Fixed server port (`--server.port`)
    pub port: Option<u16>,
    /// Extra arguments appended verbatim
    pub extra_args: Vec<String>,
}

/// How the application run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppExit {
    /// Server exited with status 0
    Clean,
    /// Operator pressed Ctrl+C; not an error
    Interrupted,
    /// Server exited nonzero on its own
    Failed { code: Option<i32> },
}

/// Run the dashboard and block until it exits.
///
/// `interrupted` is set by the caller's Ctrl+C handler; the signal reaches
/// the child through the shared process group, so this function only has to
/// wait and then classify the exit.
pub fn run_app(
    venv: &Venv,
    app_entry: &Path,
    options: &RunOptions,
    interrupted: Arc<AtomicBool>,
) -> LaunchResult<AppExit> {
    if !app_entry.is_file() {
        return Err(LaunchError::AppMissing {
            path: app_entry.to_path_buf(),
        });
    }

    let mut cmd = Command::new(venv.python());
    cmd.arg("-m")
        .arg("streamlit")
        .arg("run")
        .arg(app_entry)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    if let Some(port) = options.port {
        cmd.arg("--server.port").arg(port.to_string());
    }
    for arg in &options.extra_args {
        cmd.arg(arg);
    }

    let status = cmd.status()?;

    if interrupted.load(Ordering::SeqCst) {
        return Ok(AppExit::Interrupted);
    }

    if status.success() {
        Ok(AppExit::Clean)
    } else {
        Ok(AppExit::Failed {
            code: status.code(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_missing_app_entry_is_error() {
        let dir = tempdir().unwrap();
        let venv = Venv::new(&dir.path().join(".venv"));

        let err = run_app(
            &venv,
            &dir.path().join("app.py"),
            &RunOptions::default(),
            Arc::new(AtomicBool::new(false)),
        )
        .unwrap_err();
        assert!(matches!(err, LaunchError::AppMissing { .. }));
    }

    #[cfg(unix)]
    fn stub_venv(dir: &std::path::Path, script: &str) -> Venv {
        use std::os::unix::fs::PermissionsExt;

        let venv = Venv::new(&dir.join(".venv"));
        fs::create_dir_all(dir.join(".venv/bin")).unwrap();
        let python = venv.python();
        fs::write(&python, script).unwrap();
        fs::set_permissions(&python, fs::Permissions::from_mode(0o755)).unwrap();
        venv
    }

    #[cfg(unix)]
    #[test]
    fn test_clean_exit() {
        let dir = tempdir().unwrap();
        let venv = stub_venv(dir.path(), "#!/bin/sh\nexit 0\n");
        fs::write(dir.path().join("app.py"), "").unwrap();

        let exit = run_app(
            &venv,
            &dir.path().join("app.py"),
            &RunOptions::default(),
            Arc::new(AtomicBool::new(false)),
        )
        .unwrap();
        assert_eq!(exit, AppExit::Clean);
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_is_failed() {
        let dir = tempdir().unwrap();
        let venv = stub_venv(dir.path(), "#!/bin/sh\nexit 7\n");
        fs::write(dir.path().join("app.py"), "").unwrap();

        let exit = run_app(
            &venv,
            &dir.path().join("app.py"),
            &RunOptions::default(),
            Arc::new(AtomicBool::new(false)),
        )
        .unwrap();
        assert_eq!(exit, AppExit::Failed { code: Some(7) });
    }

    #[cfg(unix)]
    #[test]
    fn test_interrupt_flag_wins_over_exit_status() {
        let dir = tempdir().unwrap();
        let venv = stub_venv(dir.path(), "#!/bin/sh\nexit 130\n");
        fs::write(dir.path().join("app.py"), "").unwrap();

        let exit = run_app(
            &venv,
            &dir.path().join("app.py"),
            &RunOptions::default(),
            Arc::new(AtomicBool::new(true)),
        )
        .unwrap();
        assert_eq!(exit, AppExit::Interrupted);
    }

    #[cfg(unix)]
    #[test]
    fn test_port_and_extra_args_are_forwarded() {
        // The stub records its argv so the invocation shape is observable.
        let dir = tempdir().unwrap();
        let log = dir.path().join("argv.log");
        let script = format!("#!/bin/sh\necho \"$@\" > {}\nexit 0\n", log.display());
        let venv = stub_venv(dir.path(), &script);
        fs::write(dir.path().join("app.py"), "").unwrap();

        let options = RunOptions {
            port: Some(8502),
            extra_args: vec!["--server.headless".to_string(), "true".to_string()],
        };
        run_app(
            &venv,
            &dir.path().join("app.py"),
            &options,
            Arc::new(AtomicBool::new(false)),
        )
        .unwrap();

        let argv = fs::read_to_string(&log).unwrap();
        assert!(argv.contains("-m streamlit run"));
        assert!(argv.contains("--server.port 8502"));
        assert!(argv.contains("--server.headless true"));
    }
}

//! Common test utilities for launcher integration tests.
//!
//! Provides `TestEnv`: an isolated temp project with a stub Python
//! interpreter, plus helpers to run the compiled launcher binary against
//! it. The stub answers `--version`, builds a venv skeleton containing a
//! copy of itself on `-m venv`, and records every `pip`/`streamlit`
//! invocation to a call log so tests can assert on the exact sequence the
//! launcher executed.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Result of running a launcher CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated project directory with a stub interpreter
pub struct TestEnv {
    pub project: TempDir,
    stub: PathBuf,
    log: PathBuf,
}

impl TestEnv {
    /// Empty project: stub interpreter only, no manifest, no app
    pub fn bare() -> Self {
        let project = TempDir::new().expect("failed to create project temp dir");
        let log = project.path().join("stub-calls.log");
        let stub = write_stub_interpreter(project.path(), &log);
        Self { project, stub, log }
    }

    /// Typical project: manifest and dashboard entry present
    pub fn with_dashboard() -> Self {
        let env = Self::bare();
        env.write_file("requirement.txt", "streamlit==1.37.0\npandas\nplotly\n");
        env.write_file("app.py", "# dashboard entry\n");
        env
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.project.path().join(relative)
    }

    pub fn write_file(&self, relative: &str, content: &str) {
        let full = self.path(relative);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).expect("failed to create parent dirs");
        }
        std::fs::write(&full, content).expect("failed to write file");
    }

    /// Make the stub's pip step fail until the flag file is removed
    pub fn make_pip_fail(&self) {
        self.write_file("stub-pip-fail", "");
    }

    pub fn clear_pip_fail(&self) {
        let _ = std::fs::remove_file(self.path("stub-pip-fail"));
    }

    /// Make the stub's venv creation fail
    pub fn make_venv_fail(&self) {
        self.write_file("stub-venv-fail", "");
    }

    /// Run the launcher with the stub interpreter wired in
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let bin = env!("CARGO_BIN_EXE_hyfi-launcher");

        let mut cmd = Command::new(bin);
        cmd.current_dir(self.project.path())
            .args(args)
            .stdin(Stdio::null())
            .env("HYFI_PYTHON", &self.stub);

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("failed to execute hyfi-launcher");
        output_to_result(output)
    }

    /// Stub invocations recorded since the last `clear_calls`
    pub fn calls(&self) -> Vec<String> {
        std::fs::read_to_string(&self.log)
            .unwrap_or_default()
            .lines()
            .map(String::from)
            .collect()
    }

    pub fn clear_calls(&self) {
        let _ = std::fs::remove_file(&self.log);
    }

    pub fn has_call(&self, prefix: &str) -> bool {
        self.calls().iter().any(|c| c.starts_with(prefix))
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

#[cfg(unix)]
fn write_stub_interpreter(project: &Path, log: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let stub = project.join("stub-python");
    let script = format!(
        r#"#!/bin/sh
LOG="{log}"
FAIL_PIP="{fail_pip}"
FAIL_VENV="{fail_venv}"
case "$1" in
--version)
    echo "Python 3.12.1"
    exit 0
    ;;
-m)
    shift
    case "$1" in
    venv)
        shift
        echo "venv $1" >> "$LOG"
        [ -e "$FAIL_VENV" ] && exit 1
        mkdir -p "$1/bin"
        printf 'home = stub\n' > "$1/pyvenv.cfg"
        cp "$0" "$1/bin/python"
        chmod +x "$1/bin/python"
        exit 0
        ;;
    pip)
        shift
        echo "pip $@" >> "$LOG"
        [ -e "$FAIL_PIP" ] && exit 1
        exit 0
        ;;
    streamlit)
        shift
        echo "streamlit $@" >> "$LOG"
        exit 0
        ;;
    esac
    ;;
esac
exit 0
"#,
        log = log.display(),
        fail_pip = project.join("stub-pip-fail").display(),
        fail_venv = project.join("stub-venv-fail").display(),
    );

    std::fs::write(&stub, script).expect("failed to write stub interpreter");
    std::fs::set_permissions(&stub, std::fs::Permissions::from_mode(0o755))
        .expect("failed to chmod stub interpreter");
    stub
}

#[cfg(not(unix))]
fn write_stub_interpreter(project: &Path, _log: &Path) -> PathBuf {
    // Windows CI exercises the unit tests; the end-to-end suite is
    // Unix-only because the stub is a shell script.
    project.join("stub-python")
}

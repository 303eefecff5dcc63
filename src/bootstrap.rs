//! Setup orchestration
//!
//! `ensure_ready` is the idempotent heart of the launcher: interpreter
//! already checked, it brings the project from whatever state it is in to
//! "environment present, dependencies current", doing nothing when nothing
//! is needed. Progress is reported through an event callback so the command
//! layer owns all printing.

use crate::error::LaunchResult;
use crate::installer::Installer;
use crate::interpreter::Interpreter;
use crate::lock::SetupLock;
use crate::manifest::Manifest;
use crate::marker::InstallMarker;
use crate::paths::ProjectPaths;
use crate::state::{self, InstallReason, SetupState};
use crate::venv::Venv;

/// Progress events emitted during setup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupEvent {
    /// Another instance holds the setup lock; we are waiting for it
    WaitingForLock,
    /// Environment directory is being created
    CreatingEnvironment,
    /// Environment already existed
    EnvironmentExists,
    /// Dependencies are about to be installed
    InstallingDependencies(InstallReason),
    /// Marker is fresh; install skipped
    DependenciesCurrent,
}

/// What `ensure_ready` did about dependencies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    Skipped,
    Installed,
}

/// Outcome of a completed setup pass
#[derive(Debug)]
pub struct SetupSummary {
    pub venv: Venv,
    pub created_environment: bool,
    pub install: InstallOutcome,
}

/// Bring the project to a runnable state.
///
/// Takes the setup lock only when work might be needed, and re-checks the
/// state after acquiring it: if a concurrent instance finished the setup
/// while we waited, this pass degrades to a no-op.
pub fn ensure_ready(
    paths: &ProjectPaths,
    interpreter: &Interpreter,
    mut on_event: impl FnMut(SetupEvent),
) -> LaunchResult<SetupSummary> {
    let venv = Venv::new(&paths.venv_dir);

    if state::detect(paths)? == SetupState::Ready {
        on_event(SetupEvent::EnvironmentExists);
        on_event(SetupEvent::DependenciesCurrent);
        return Ok(SetupSummary {
            venv,
            created_environment: false,
            install: InstallOutcome::Skipped,
        });
    }

    let _lock = SetupLock::acquire(&paths.lock_file, || {
        on_event(SetupEvent::WaitingForLock)
    })?;

    // State may have changed while we waited for the lock
    let state = state::detect(paths)?;

    let created_environment = match state {
        SetupState::NeedsEnvironment => {
            on_event(SetupEvent::CreatingEnvironment);
            venv.create(interpreter)?;
            true
        }
        _ => {
            on_event(SetupEvent::EnvironmentExists);
            false
        }
    };

    let reason = match state {
        SetupState::NeedsEnvironment => InstallReason::MarkerMissing,
        SetupState::NeedsInstall(reason) => reason,
        SetupState::Ready => {
            on_event(SetupEvent::DependenciesCurrent);
            return Ok(SetupSummary {
                venv,
                created_environment,
                install: InstallOutcome::Skipped,
            });
        }
    };

    on_event(SetupEvent::InstallingDependencies(reason));

    let manifest = Manifest::load(&paths.manifest)?;
    let installer = Installer::new(&venv);
    installer.upgrade_pip()?;
    installer.install_manifest(&manifest.path)?;

    // Written only after a fully successful install; an install failure
    // above leaves no marker, so the next run retries.
    InstallMarker::new(&manifest.fingerprint, &interpreter.version).save(&paths.marker)?;

    Ok(SetupSummary {
        venv,
        created_environment,
        install: InstallOutcome::Installed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::error::LaunchError;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn project_paths(root: &Path) -> ProjectPaths {
        ProjectPaths::resolve(root, &Config::default())
    }

    /// Stub interpreter whose `-m venv` builds a venv skeleton containing a
    /// copy of itself, and whose `-m pip` always succeeds.
    #[cfg(unix)]
    fn stub_interpreter(root: &Path) -> Interpreter {
        use std::os::unix::fs::PermissionsExt;

        let stub = root.join("python3");
        let script = r#"#!/bin/sh
case "$1 $2" in
"-m venv")
    mkdir -p "$3/bin"
    printf 'home = stub\n' > "$3/pyvenv.cfg"
    cp "$0" "$3/bin/python"
    chmod +x "$3/bin/python"
    ;;
"-m pip")
    exit 0
    ;;
"--version ")
    echo "Python 3.12.1"
    ;;
esac
exit 0
"#;
        fs::write(&stub, script).unwrap();
        fs::set_permissions(&stub, fs::Permissions::from_mode(0o755)).unwrap();
        Interpreter {
            path: stub,
            version: "3.12.1".to_string(),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_ensure_ready_builds_everything_once() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("requirement.txt"), "streamlit\n").unwrap();
        let interpreter = stub_interpreter(dir.path());
        let paths = project_paths(dir.path());

        let mut events = Vec::new();
        let summary = ensure_ready(&paths, &interpreter, |e| events.push(e)).unwrap();

        assert!(summary.created_environment);
        assert_eq!(summary.install, InstallOutcome::Installed);
        assert!(paths.venv_dir.is_dir());
        assert!(paths.marker.is_file());
        assert!(events.contains(&SetupEvent::CreatingEnvironment));

        // Second pass is a pure no-op
        let mut events = Vec::new();
        let summary = ensure_ready(&paths, &interpreter, |e| events.push(e)).unwrap();
        assert!(!summary.created_environment);
        assert_eq!(summary.install, InstallOutcome::Skipped);
        assert!(events.contains(&SetupEvent::DependenciesCurrent));
    }

    #[cfg(unix)]
    #[test]
    fn test_ensure_ready_reinstalls_on_manifest_drift() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("requirement.txt"), "streamlit\n").unwrap();
        let interpreter = stub_interpreter(dir.path());
        let paths = project_paths(dir.path());

        ensure_ready(&paths, &interpreter, |_| {}).unwrap();
        let first_marker = InstallMarker::load(&paths.marker).unwrap();

        fs::write(dir.path().join("requirement.txt"), "streamlit\npandas\n").unwrap();

        let mut events = Vec::new();
        let summary = ensure_ready(&paths, &interpreter, |e| events.push(e)).unwrap();
        assert_eq!(summary.install, InstallOutcome::Installed);
        assert!(events.contains(&SetupEvent::InstallingDependencies(
            InstallReason::ManifestChanged
        )));

        let second_marker = InstallMarker::load(&paths.marker).unwrap();
        assert_ne!(first_marker.manifest_hash, second_marker.manifest_hash);
    }

    #[test]
    fn test_ensure_ready_missing_manifest_creates_nothing() {
        let dir = tempdir().unwrap();
        let paths = project_paths(dir.path());
        let interpreter = Interpreter {
            path: dir.path().join("python3"),
            version: "3.12.1".to_string(),
        };

        let err = ensure_ready(&paths, &interpreter, |_| {}).unwrap_err();
        assert!(matches!(err, LaunchError::ManifestMissing { .. }));
        assert!(!paths.venv_dir.exists());
    }
}

//! Setup state detection
//!
//! A single side-effect-free check, performed at program start, that
//! classifies the project instead of scattering existence tests through the
//! control flow. `detect` only stats and reads; it never creates anything.

use crate::error::LaunchResult;
use crate::manifest::Manifest;
use crate::marker::InstallMarker;
use crate::paths::ProjectPaths;
use crate::venv::Venv;

/// Why an install pass is needed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallReason {
    /// Marker file does not exist
    MarkerMissing,
    /// Marker exists but is empty or unparsable (legacy zero-byte marker)
    MarkerUnreadable,
    /// Manifest contents changed since the recorded install
    ManifestChanged,
}

impl std::fmt::Display for InstallReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InstallReason::MarkerMissing => write!(f, "first install"),
            InstallReason::MarkerUnreadable => write!(f, "marker unreadable"),
            InstallReason::ManifestChanged => write!(f, "manifest changed"),
        }
    }
}

/// Result of the setup-state check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupState {
    /// Environment directory absent; everything must be built
    NeedsEnvironment,
    /// Environment present, dependencies not (or no longer) current
    NeedsInstall(InstallReason),
    /// Environment and dependencies both current
    Ready,
}

/// Classify the project. Requires a readable manifest, since freshness is
/// defined against its contents.
pub fn detect(paths: &ProjectPaths) -> LaunchResult<SetupState> {
    let manifest = Manifest::load(&paths.manifest)?;

    if !Venv::new(&paths.venv_dir).exists() {
        return Ok(SetupState::NeedsEnvironment);
    }

    match InstallMarker::load(&paths.marker) {
        None if paths.marker.exists() => Ok(SetupState::NeedsInstall(
            InstallReason::MarkerUnreadable,
        )),
        None => Ok(SetupState::NeedsInstall(InstallReason::MarkerMissing)),
        Some(marker) if marker.manifest_hash != manifest.fingerprint => {
            Ok(SetupState::NeedsInstall(InstallReason::ManifestChanged))
        }
        Some(_) => Ok(SetupState::Ready),
    }
}

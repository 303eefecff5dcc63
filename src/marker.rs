//! Install marker
//!
//! Persisted at `.venv/installed.flag` after a successful install. The
//! marker records the manifest fingerprint, so editing the manifest makes
//! it stale automatically. A legacy zero-byte (or otherwise unreadable)
//! marker is treated as "needs install".

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record written after a successful dependency installation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InstallMarker {
    /// Fingerprint of the manifest that was installed
    pub manifest_hash: String,
    /// Interpreter version used for the install
    pub python_version: String,
    /// When the install completed
    pub installed_at: DateTime<Utc>,
}

impl InstallMarker {
    pub fn new(manifest_hash: &str, python_version: &str) -> Self {
        Self {
            manifest_hash: manifest_hash.to_string(),
            python_version: python_version.to_string(),
            installed_at: Utc::now(),
        }
    }

    /// Load the marker, returning None when it is absent or unreadable.
    pub fn load(path: &Path) -> Option<Self> {
        let content = fs::read_to_string(path).ok()?;
        serde_json::from_str(&content).ok()
    }

    /// Write the marker. Failure here is an IO error, not an install
    /// failure; the caller decides how loudly to report it.
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)
    }
}

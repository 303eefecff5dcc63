//! Dependency manifest handling
//!
//! The manifest is pip's own format; the launcher never resolves packages
//! itself. It reads the file for two reasons only: to show the operator what
//! is about to be installed, and to fingerprint the raw contents so the
//! install marker can detect drift.

use std::fs;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::error::{LaunchError, LaunchResult};

/// A loaded dependency manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    pub path: PathBuf,
    /// Package specifiers, one per non-comment line
    pub specifiers: Vec<String>,
    /// Fingerprint of the raw file contents, `sha256:<hex>`
    pub fingerprint: String,
}

impl Manifest {
    /// Load and fingerprint the manifest at `path`.
    pub fn load(path: &Path) -> LaunchResult<Manifest> {
        if !path.is_file() {
            return Err(LaunchError::ManifestMissing {
                path: path.to_path_buf(),
            });
        }

        let raw = fs::read(path)?;
        let text = String::from_utf8_lossy(&raw);

        Ok(Manifest {
            path: path.to_path_buf(),
            specifiers: parse_specifiers(&text),
            fingerprint: fingerprint_bytes(&raw),
        })
    }
}

/// Parse package specifiers out of manifest text.
///
/// Blank lines and `#` comments are skipped; inline comments are pip's
/// business, not ours, so a specifier line is kept verbatim.
pub fn parse_specifiers(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}

/// Fingerprint raw manifest bytes.
pub fn fingerprint_bytes(raw: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(raw);
    format!("sha256:{:x}", hasher.finalize())
}

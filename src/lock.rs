//! Concurrent-invocation guard
//!
//! Two launcher instances started at the same moment must not both create
//! the environment or run pip. Setup is serialized through an exclusive
//! advisory lock on `.venv.lock`: the second instance waits for the first,
//! then re-checks the setup state and usually finds nothing left to do.
//! Running the dashboard itself is not guarded; Streamlit handles its own
//! port conflicts.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::error::{LaunchError, LaunchResult};

/// Held for the duration of environment creation and installation.
/// Released on drop.
#[derive(Debug)]
pub struct SetupLock {
    file: File,
    path: PathBuf,
}

impl SetupLock {
    /// Acquire the lock at `path`, calling `on_wait` once if another
    /// instance currently holds it (so the caller can tell the operator why
    /// nothing is happening), then blocking until it is free.
    pub fn acquire(path: &Path, on_wait: impl FnOnce()) -> LaunchResult<SetupLock> {
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(path)
            .map_err(|e| LaunchError::Lock {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        match file.try_lock_exclusive() {
            Ok(()) => {}
            Err(err) if is_contended(&err) => {
                on_wait();
                file.lock_exclusive().map_err(|e| LaunchError::Lock {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;
            }
            Err(err) => {
                return Err(LaunchError::Lock {
                    path: path.to_path_buf(),
                    message: err.to_string(),
                });
            }
        }

        Ok(SetupLock {
            file,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for SetupLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}

fn is_contended(err: &std::io::Error) -> bool {
    err.raw_os_error() == fs2::lock_contended_error().raw_os_error()
}

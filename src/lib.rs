//! HYFI Launcher - bootstrap tool for the HYFI flood monitoring dashboard
//!
//! The launcher verifies a Python interpreter is available, creates a
//! project-local virtual environment on first run, installs the dependency
//! manifest exactly once (tracked through a fingerprinted marker file), and
//! starts the Streamlit dashboard through the environment's own interpreter.
//! The dashboard itself (`app.py`) is an external collaborator; the launcher
//! never looks inside it.

pub mod bootstrap;
pub mod config;
pub mod doctor;
pub mod error;
pub mod installer;
pub mod interpreter;
pub mod lock;
pub mod manifest;
pub mod marker;
pub mod paths;
pub mod runner;
pub mod state;
pub mod venv;

// Re-exports for convenience
pub use bootstrap::{ensure_ready, InstallOutcome, SetupEvent, SetupSummary};
pub use config::Config;
pub use doctor::{run_checks, CheckStatus, LaunchCheck, LaunchReport};
pub use error::{LaunchError, LaunchResult};
pub use interpreter::Interpreter;
pub use lock::SetupLock;
pub use manifest::Manifest;
pub use marker::InstallMarker;
pub use paths::ProjectPaths;
pub use runner::{run_app, AppExit, RunOptions};
pub use state::{InstallReason, SetupState};
pub use venv::Venv;

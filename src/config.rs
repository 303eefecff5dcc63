//! Configuration module for the launcher
//!
//! Configuration hierarchy:
//! 1. Environment variables (HYFI_*) (highest priority)
//! 2. Project config (./hyfi.toml)
//! 3. User config (~/.config/hyfi/config.toml)
//! 4. Built-in defaults (lowest priority)
//!
//! Every knob defaults to the conventional dashboard layout (`.venv`,
//! `requirement.txt`, `app.py`), so a project with no `hyfi.toml` at all
//! still launches.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LaunchError, LaunchResult};

/// Interpreter configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PythonConfig {
    /// Explicit interpreter path. When set, PATH lookup is skipped entirely.
    #[serde(default)]
    pub interpreter: Option<PathBuf>,
}

/// Filesystem layout configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Virtual environment root, relative to the project root
    #[serde(default = "default_venv_dir")]
    pub venv_dir: PathBuf,

    /// Dependency manifest. The non-standard singular spelling is the
    /// historical default and must keep working.
    #[serde(default = "default_manifest")]
    pub manifest: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            venv_dir: default_venv_dir(),
            manifest: default_manifest(),
        }
    }
}

fn default_venv_dir() -> PathBuf {
    PathBuf::from(".venv")
}

fn default_manifest() -> PathBuf {
    PathBuf::from("requirement.txt")
}

/// Dashboard application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Entry file handed to `streamlit run`
    #[serde(default = "default_entry")]
    pub entry: PathBuf,

    /// Optional fixed server port (`--server.port`)
    #[serde(default)]
    pub port: Option<u16>,

    /// Extra arguments appended to the run command
    #[serde(default)]
    pub extra_args: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            entry: default_entry(),
            port: None,
            extra_args: Vec::new(),
        }
    }
}

fn default_entry() -> PathBuf {
    PathBuf::from("app.py")
}

/// Launcher configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub python: PythonConfig,

    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub app: AppConfig,
}

impl Config {
    /// Load configuration from a specific TOML file
    pub fn load(path: &Path) -> LaunchResult<Self> {
        let content = fs::read_to_string(path)?;
        let mut config: Config =
            toml::from_str(&content).map_err(|e| LaunchError::InvalidConfig {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        config.apply_env();
        Ok(config)
    }

    /// Load configuration for a project root, falling back through the
    /// hierarchy and finally to defaults. Parse errors in an existing file
    /// are reported rather than silently ignored.
    pub fn load_for_project(root: &Path) -> LaunchResult<Self> {
        let project_config = root.join(CONFIG_FILE);
        if project_config.is_file() {
            return Self::load(&project_config);
        }

        if let Some(user_config) = user_config_path() {
            if user_config.is_file() {
                return Self::load(&user_config);
            }
        }

        let mut config = Config::default();
        config.apply_env();
        Ok(config)
    }

    /// Apply HYFI_* environment variable overrides
    fn apply_env(&mut self) {
        if let Ok(python) = std::env::var("HYFI_PYTHON") {
            if !python.is_empty() {
                self.python.interpreter = Some(PathBuf::from(python));
            }
        }
        if let Ok(venv_dir) = std::env::var("HYFI_VENV_DIR") {
            if !venv_dir.is_empty() {
                self.paths.venv_dir = PathBuf::from(venv_dir);
            }
        }
    }
}

/// Project config filename
pub const CONFIG_FILE: &str = "hyfi.toml";

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("hyfi/config.toml"))
}

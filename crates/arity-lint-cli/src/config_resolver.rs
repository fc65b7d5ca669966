//! Locating and loading `arity-lint.toml`.
//!
//! Lookup order:
//!
//! 1. `--config` flag or `$ARITY_LINT_CONFIG`
//! 2. `arity-lint.toml` or `.arity-lint.toml` in the analyzed directory or
//!    the nearest ancestor that has one
//! 3. `config.toml` in `$ARITY_LINT_CONFIG_DIR`, else `~/.arity-lint/`
//! 4. built-in defaults (every rule inert)

use anyhow::{Context, Result};
use arity_lint_core::Config;
use std::path::{Path, PathBuf};

/// File names recognised in a project directory, by priority.
const PROJECT_CONFIG_NAMES: &[&str] = &["arity-lint.toml", ".arity-lint.toml"];

const GLOBAL_CONFIG_NAME: &str = "config.toml";

const CONFIG_DIR_ENV: &str = "ARITY_LINT_CONFIG_DIR";

/// Where the configuration comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Given on the command line.
    Explicit(PathBuf),
    /// Found next to, or above, the analyzed directory.
    Project(PathBuf),
    /// User-wide configuration.
    Global(PathBuf),
    /// Nothing found.
    Default,
}

impl ConfigSource {
    /// Returns the config file path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Reads and parses the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn load(&self) -> Result<Config> {
        let Some(path) = self.path() else {
            tracing::debug!("No config file found, using defaults");
            return Ok(Config::default());
        };

        match self {
            Self::Global(_) => tracing::info!("Using global config: {}", path.display()),
            _ => tracing::debug!("Using config: {}", path.display()),
        }

        Config::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))
    }
}

/// Resolves the configuration for a run rooted at `target`.
#[must_use]
pub fn resolve(target: &Path, explicit: Option<&Path>) -> ConfigSource {
    resolve_with(target, explicit, global_config_dir())
}

fn resolve_with(
    target: &Path,
    explicit: Option<&Path>,
    global_dir: Option<PathBuf>,
) -> ConfigSource {
    if let Some(path) = explicit {
        return ConfigSource::Explicit(path.to_path_buf());
    }

    if let Some(path) = find_project_config(target) {
        return ConfigSource::Project(path);
    }

    global_dir
        .map(|dir| dir.join(GLOBAL_CONFIG_NAME))
        .filter(|path| path.is_file())
        .map_or(ConfigSource::Default, ConfigSource::Global)
}

/// Searches `start` and its ancestors for a project config file.
fn find_project_config(start: &Path) -> Option<PathBuf> {
    let start = if start.is_absolute() {
        start.to_path_buf()
    } else {
        std::env::current_dir().ok()?.join(start)
    };

    start.ancestors().find_map(|dir| {
        PROJECT_CONFIG_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
    })
}

/// Returns the directory holding the user-wide `config.toml`.
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    match std::env::var_os(CONFIG_DIR_ENV) {
        Some(dir) => Some(PathBuf::from(dir)),
        None => home::home_dir().map(|home| home.join(".arity-lint")),
    }
}

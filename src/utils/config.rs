// Configuration file parsing and translation table discovery

use std::fs;
use std::path::{Path, PathBuf};
use serde::Deserialize;
use crate::utils::error::{PkgtransError, Result};

/// File name of the translation table shipped with the tool
pub const TABLE_FILE_NAME: &str = "translations.json";

/// Contents of `<config_dir>/pkgtrans/config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Translation table location
    pub table: Option<PathBuf>,
    /// Enable debug diagnostics
    #[serde(default)]
    pub verbose: bool,
}

impl Config {
    /// Default location of the user configuration file
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("pkgtrans").join("config.toml"))
    }

    /// Load the user configuration, falling back to defaults when no file exists
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            PkgtransError::ConfigError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::parse(&content)
            .map_err(|e| PkgtransError::ConfigError(format!("{} in {}", e, path.display())))
    }

    /// Parse configuration from a TOML string
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| PkgtransError::ConfigError(format!("Invalid TOML syntax: {e}")))
    }
}

/// Pick the translation table path.
///
/// Precedence: explicit override, then config file, then the table next to
/// the executable. Debug builds also fall back to the one in the source tree.
pub fn resolve_table_path(explicit: Option<&Path>, config: &Config) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    if let Some(path) = &config.table {
        return path.clone();
    }

    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    default_table_path(exe_dir.as_deref(), source_tree_dir())
}

/// The installed table next to the executable, unless it is missing and a
/// development fallback directory is available
fn default_table_path(exe_dir: Option<&Path>, fallback_dir: Option<&Path>) -> PathBuf {
    let installed = exe_dir.map_or_else(|| PathBuf::from(TABLE_FILE_NAME), |dir| dir.join(TABLE_FILE_NAME));
    match fallback_dir {
        Some(dir) if !installed.exists() => dir.join(TABLE_FILE_NAME),
        _ => installed,
    }
}

#[cfg(debug_assertions)]
fn source_tree_dir() -> Option<&'static Path> {
    Some(Path::new(env!("CARGO_MANIFEST_DIR")))
}

#[cfg(not(debug_assertions))]
fn source_tree_dir() -> Option<&'static Path> {
    None
}

//! Config file location: the per-user platform path or a `--config` override.

use std::path::{Path, PathBuf};

use spicerush_common::ConfigError;
use tracing::info;

use super::template::default_config_toml;

const APP_DIR: &str = "spicerush";
const CONFIG_FILE: &str = "config.toml";

/// Where the config file is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigLocation {
    /// `<platform config dir>/spicerush/config.toml`. Written from the
    /// template on first run.
    Platform(PathBuf),
    /// Path given on the command line. Never created; a missing file is an
    /// error.
    Explicit(PathBuf),
}

impl ConfigLocation {
    /// Use `explicit` when given, otherwise the platform path.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Ok(Self::Explicit(path.to_path_buf())),
            None => platform_config_path().map(Self::Platform),
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::Platform(path) | Self::Explicit(path) => path,
        }
    }

    /// Whether a missing file is replaced by the default template.
    pub fn creates_default(&self) -> bool {
        matches!(self, Self::Platform(_))
    }
}

/// The per-user config file path for this platform.
///
/// On macOS: `~/Library/Application Support/spicerush/config.toml`
/// On Linux: `~/.config/spicerush/config.toml`
pub fn platform_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
        .ok_or(ConfigError::NoConfigDir)
}

/// Write the commented default config to `path`, creating parent directories.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let io_error = |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_error)?;
    }
    std::fs::write(path, default_config_toml()).map_err(io_error)?;

    info!(path = %path.display(), "created default config");
    Ok(())
}

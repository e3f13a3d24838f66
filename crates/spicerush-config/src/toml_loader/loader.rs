//! Reading and parsing the config file.

use std::path::Path;

use spicerush_common::ConfigError;
use tracing::{info, warn};

use crate::schema::SpiceRushConfig;
use crate::validation;

use super::paths::{create_default_config, ConfigLocation};

/// Load config from a specific TOML file path.
///
/// Missing fields take their serde defaults. Validation problems are logged
/// as a warning and the parsed values are kept.
pub fn load_from_path(path: &Path) -> Result<SpiceRushConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let config: SpiceRushConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}; using parsed config with potentially invalid values");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from `location`.
///
/// A missing platform file is created from the template and defaults are
/// returned. A missing explicit file is [`ConfigError::FileNotFound`].
pub fn load(location: &ConfigLocation) -> Result<SpiceRushConfig, ConfigError> {
    match load_from_path(location.path()) {
        Err(ConfigError::FileNotFound(path)) if location.creates_default() => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(SpiceRushConfig::default())
        }
        other => other,
    }
}

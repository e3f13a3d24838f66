//! Spice Rush configuration system.
//!
//! Provides TOML-based configuration with full validation. All config
//! sections use sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use spicerush_config::{load_config, config_to_json};
//!
//! let loaded = load_config(None).expect("failed to load config");
//! let config = loaded.into_validated().expect("invalid config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{SpiceRushConfig, CONFIG_SCHEMA_VERSION};

use spicerush_common::ConfigError;
use std::path::Path;

/// A parsed config together with the result of validating it.
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: SpiceRushConfig,
    /// Every validation problem, or `None` when the config is valid.
    pub problems: Option<ConfigError>,
}

impl LoadedConfig {
    fn check(config: SpiceRushConfig) -> Self {
        let problems = validation::validate(&config).err();
        Self { config, problems }
    }

    /// The config, or the validation error if it has problems.
    pub fn into_validated(self) -> Result<SpiceRushConfig, ConfigError> {
        match self.problems {
            None => Ok(self.config),
            Some(e) => Err(e),
        }
    }
}

/// Load config from `explicit` (the `--config` override) or, when `None`,
/// from the platform default path, creating it on first run.
///
/// Only unreadable or unparsable files fail. Validation problems are
/// returned alongside the parsed values so the caller decides.
pub fn load_config(explicit: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
    let location = toml_loader::ConfigLocation::resolve(explicit)?;
    toml_loader::load(&location).map(LoadedConfig::check)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &SpiceRushConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

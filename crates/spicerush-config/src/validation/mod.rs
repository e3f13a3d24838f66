//! Full configuration validation.
//!
//! Each domain has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod content;
mod helpers;
mod misc;


use crate::schema::SpiceRushConfig;
use spicerush_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &SpiceRushConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    content::validate_content(&mut errors, config);
    content::validate_orientation(&mut errors, config);
    misc::validate_network(&mut errors, config);
    misc::validate_window(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

/// Validate a content URL on its own, e.g. one given on the command line.
pub fn validate_content_url(url: &str) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();
    content::check_content_url(&mut errors, url);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

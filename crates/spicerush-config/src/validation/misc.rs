//! Validation for smaller config sections: network and window.

use crate::schema::SpiceRushConfig;

use super::helpers::validate_range;

/// Validate reachability probe constraints.
pub(crate) fn validate_network(errors: &mut Vec<String>, config: &SpiceRushConfig) {
    validate_range(
        errors,
        "network.probe_interval_secs",
        config.network.probe_interval_secs,
        1,
        300,
    );
    validate_range(
        errors,
        "network.probe_timeout_ms",
        config.network.probe_timeout_ms,
        100,
        10_000,
    );
}

/// Validate window size constraints.
pub(crate) fn validate_window(errors: &mut Vec<String>, config: &SpiceRushConfig) {
    validate_range(errors, "window.width", config.window.width, 200, 4096);
    validate_range(errors, "window.height", config.window.height, 200, 4096);
}

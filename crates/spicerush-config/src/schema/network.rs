//! Network reachability monitor configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Seconds between reachability probes (valid range: 1-300).
    pub probe_interval_secs: u32,
    /// Connect timeout for a single probe in milliseconds (valid range: 100-10000).
    pub probe_timeout_ms: u32,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            probe_interval_secs: 5,
            probe_timeout_ms: 1500,
        }
    }
}

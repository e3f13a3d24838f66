//! Configuration schema types for Spice Rush.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod content;
mod network;
mod system;
mod webview;
mod window;

pub use content::*;
pub use network::*;
pub use system::*;
pub use webview::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct SpiceRushConfig {
    pub content: ContentConfig,
    pub orientation: OrientationConfig,
    pub webview: WebViewSchemaConfig,
    pub network: NetworkConfig,
    pub window: WindowConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================

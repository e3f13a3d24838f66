//! Web surface configuration.

use serde::{Deserialize, Serialize};

/// Settings applied once to the embedded web surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WebViewSchemaConfig {
    /// Play media inline without a user gesture.
    pub inline_media: bool,
    pub javascript: bool,
    /// Hold rendering until the document has fully loaded.
    pub suppress_incremental_rendering: bool,
    /// Enable dev tools (always on in debug builds).
    pub devtools: bool,
    /// Custom user agent string. Empty uses the engine default.
    pub user_agent: String,
}

impl Default for WebViewSchemaConfig {
    fn default() -> Self {
        Self {
            inline_media: true,
            javascript: true,
            suppress_incremental_rendering: false,
            devtools: cfg!(debug_assertions),
            user_agent: String::new(),
        }
    }
}

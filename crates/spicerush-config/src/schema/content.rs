//! Hosted content and default orientation configuration.

use serde::{Deserialize, Serialize};
use spicerush_common::Orientation;

/// Hosted web content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Page loaded into the web surface at startup.
    pub url: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            url: "https://spicerush.app/play/index.html".into(),
        }
    }
}

/// Orientation the host is locked to until the content unlocks it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OrientationConfig {
    pub default: Vec<Orientation>,
}

impl Default for OrientationConfig {
    fn default() -> Self {
        Self {
            default: vec![Orientation::Portrait],
        }
    }
}

//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Host window settings.
///
/// The initial size is given in portrait terms; the window is reshaped
/// whenever the orientation mask forbids its current aspect.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Logical width (valid range: 200-4096).
    pub width: u32,
    /// Logical height (valid range: 200-4096).
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Spice Rush".into(),
            width: 430,
            height: 860,
        }
    }
}
